//! # LJ/DSF Pair Style Library
//!
//! A Lennard-Jones plus damped-shifted-force electrostatics pair style for particle
//! simulations, designed to be driven by a host molecular-dynamics engine that owns the
//! particles, the neighbor lists and the cross-partition reductions.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Pure interaction mathematics (`damping`, `calibration`,
//!   `potentials`), the per-type parameter table, host-facing data models and checkpoint I/O.
//!
//! - **[`engine`]: The Stateful Layer.** The [`engine::pair_style::LjCutCoulDsf`] object that
//!   accepts configuration, validates and calibrates it during `init`, and runs the
//!   interaction loop that accumulates forces and reports energies and virials to an
//!   [`engine::ledger::EnergyLedger`].

pub mod core;
pub mod engine;
