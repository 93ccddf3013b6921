use clap::{Args, Parser, Subcommand};
use ljdsf::engine::config::UnitStyle;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "LJ/DSF CLI - Evaluate Lennard-Jones plus damped-shifted-force electrostatics on a particle configuration.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute forces, energies and the virial of a particle configuration.
    Compute(ComputeArgs),
    /// Restore a checkpoint and print its settings and finalized pair table.
    Inspect(InspectArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Path to the force-field file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub forcefield: PathBuf,

    /// Path to the particle CSV file with columns x,y,z,charge,type.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub particles: PathBuf,

    /// Number of particle types. Defaults to the largest type found in the particle file.
    #[arg(short = 'n', long, value_name = "INT")]
    pub ntypes: Option<usize>,

    /// Unit system, which fixes the Coulomb conversion constant.
    #[arg(short, long, default_value = "real", value_name = "real|metal|lj")]
    pub units: UnitStyle,

    /// Whether reaction forces on non-owned partners are accumulated locally.
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub newton_pair: bool,

    /// LJ scale factors for 1-2, 1-3 and 1-4 bonded neighbors.
    #[arg(long, value_name = "F12,F13,F14")]
    pub special_lj: Option<String>,

    /// Coulomb scale factors for 1-2, 1-3 and 1-4 bonded neighbors.
    #[arg(long, value_name = "F12,F13,F14")]
    pub special_coul: Option<String>,

    /// Write per-particle forces to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub forces: Option<PathBuf>,

    /// Write a binary checkpoint of the pair style.
    #[arg(long, value_name = "PATH")]
    pub checkpoint: Option<PathBuf>,

    /// Set a specific force-field value, overriding the file.
    /// Can be used multiple times. Example: -S settings.alpha=0.25
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a checkpoint written by `compute --checkpoint`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub checkpoint: PathBuf,

    /// Number of particle types the checkpoint was written with.
    #[arg(short = 'n', long, required = true, value_name = "INT")]
    pub ntypes: usize,

    /// Unit system used to calibrate the restored style.
    #[arg(short, long, default_value = "real", value_name = "real|metal|lj")]
    pub units: UnitStyle,
}
