//! # Force Field Module
//!
//! This module provides the pure mathematics of the Lennard-Jones plus damped-shifted-force
//! (DSF) Coulomb interaction, together with the per-type parameter storage it reads from.
//!
//! ## Overview
//!
//! The Coulomb part is a short-ranged, cutoff-smooth alternative to a full Ewald sum. Both
//! the potential and the force are shifted so that they vanish exactly at the Coulomb
//! cutoff. The module supports:
//!
//! - **Damping variants** (none, Debye, Gaussian, erfc) bound once into a kernel
//! - **Shift calibration** of the Coulomb force and energy at the cutoff
//! - **Per-type-pair LJ parameters** with geometric, arithmetic and sixth-power mixing
//! - **Long-range dispersion tail corrections** for the truncated LJ term
//!
//! ## Key Components
//!
//! - [`damping`] - Damping variants and the bound [`damping::DampingKernel`]
//! - [`calibration`] - Shift and self-energy constants for a kernel and cutoff
//! - [`pair_table`] - Dense symmetric table of per-type-pair coefficients
//! - [`potentials`] - Single-pair force and energy evaluation
//! - [`settings`] - Global pair-style settings and their argument grammar
//! - [`params`] - Argument parsing helpers and the TOML force-field file
//!
//! ## Usage
//!
//! ```ignore
//! use ljdsf::core::forcefield::{calibration::Calibration, damping::DampingVariant};
//!
//! let calibration = Calibration::new(DampingVariant::Erfc.bind(0.2), 10.0, 332.06371);
//! let energy_at_cutoff = calibration.shifted_energy(10.0);
//! ```

pub mod calibration;
pub mod damping;
pub mod mixing;
pub mod pair_table;
pub mod params;
pub mod potentials;
pub mod settings;
pub mod tail;
pub mod term;
