use thiserror::Error;

use crate::core::forcefield::params::{ConfigError, ParamLoadError};
use crate::core::io::checkpoint::CheckpointError;

#[derive(Debug, Error)]
pub enum PairStyleError {
    #[error("Invalid pair style configuration: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    #[error("Pair style requires per-particle charges")]
    MissingCharges,

    #[error("Pair style has not been initialized since its last configuration change")]
    NotInitialized,

    #[error("Tail correction requires per-type particle counts")]
    MissingTypeCounts,

    #[error("Checkpoint error: {source}")]
    Checkpoint {
        #[from]
        source: CheckpointError,
    },

    #[error("Failed to load force field parameters: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },
}
