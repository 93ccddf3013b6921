//! # Engine Module
//!
//! The stateful layer of the pair style: configuration state, the initialization pass that
//! calibrates and finalizes parameters, and the per-step interaction loop.
//!
//! ## Overview
//!
//! A host drives [`pair_style::LjCutCoulDsf`] through a fixed lifecycle. Configuration
//! calls may arrive in any order and any number of times; each one invalidates the cached
//! calibration. `init` then validates prerequisites, recomputes the shift constants, mixes
//! and derives every type pair and sums tail corrections. Only after that may `compute`
//! run, once per simulation step, over a host-supplied neighbor list.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Global settings, their builder and host constants
//! - **Pair Style** ([`pair_style`]) - Lifecycle, single-pair evaluation, extraction and checkpoints
//! - **Interaction Loop** ([`compute`]) - Neighbor traversal, force accumulation and ownership
//! - **Energy Ledger** ([`ledger`]) - Host interface for energy and virial contributions
//! - **Error Handling** ([`error`]) - Errors surfaced by the pair style

pub mod compute;
pub mod config;
pub mod error;
pub mod ledger;
pub mod pair_style;
