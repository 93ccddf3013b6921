use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Detail recorded in `--log-file`, independent of the terminal verbosity. At this level
/// the file keeps every coefficient assignment and the per-pass loop summary.
const FILE_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Terminal level for `-q` and the `-v` count.
///
/// Without flags only warnings reach stderr (for example a zero damping parameter on a
/// screened variant). `-v` adds the calibration and tail summaries, `-vv` the
/// per-coefficient and per-pass detail, and `-vvv` everything. `-q` keeps errors only.
pub fn stderr_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: a compact stderr layer filtered by [`stderr_level`]
/// and, with `--log-file`, a plain-text file layer at [`FILE_LEVEL`].
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(stderr_level(verbosity, quiet));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(FILE_LEVEL),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}
