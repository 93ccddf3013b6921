//! # Core Module
//!
//! Stateless building blocks of the pair style: the force-field mathematics, the particle
//! and neighbor models supplied by the host, and checkpoint I/O.
//!
//! ## Architecture
//!
//! - **Interaction Mathematics** ([`forcefield`]) - Damping kernels, calibration, mixing, LJ and Coulomb terms
//! - **Host Data** ([`models`]) - Particles, ownership and neighbor lists
//! - **Persistence** ([`io`]) - Little-endian checkpoint records

pub mod forcefield;
pub mod io;
pub mod models;
