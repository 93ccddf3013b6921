//! Provides binary persistence of pair-style state.
//!
//! Only the user-supplied state is written: global settings and the raw explicit pair
//! entries. Calibration constants, mixed pairs and derived coefficients are rebuilt by
//! the next initialization pass.

pub mod checkpoint;
