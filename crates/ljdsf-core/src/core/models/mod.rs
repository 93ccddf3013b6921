//! # Core Models Module
//!
//! Host-facing data structures: particle storage split into owned and ghost particles,
//! and neighbor lists whose entries carry a special-bonding class in their upper bits.
//!
//! ## Key Components
//!
//! - [`particles`] - Borrowed [`particles::ParticleView`] and owned [`particles::ParticleSystem`]
//! - [`neighbor`] - Encoded neighbor entries, special-bond factors and half neighbor lists

pub mod neighbor;
pub mod particles;
