use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use crate::utils::report;
use ljdsf::core::forcefield::tail::TypeCounts;
use ljdsf::engine::config::HostSettings;
use ljdsf::engine::pair_style::LjCutCoulDsf;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    if args.ntypes == 0 {
        return Err(CliError::Argument("--ntypes must be at least 1".to_string()));
    }

    info!("Restoring checkpoint from {:?}", &args.checkpoint);
    let mut reader = BufReader::new(File::open(&args.checkpoint)?);
    let mut style = LjCutCoulDsf::read_restart(&mut reader, args.ntypes)?;

    // Tail sums need particle counts, which a checkpoint does not carry.
    let counts = TypeCounts::new(args.ntypes);
    let cutforce = style.init(HostSettings::from_units(args.units), true, Some(&counts))?;

    println!("{}", report::settings_summary(style.global_settings()));
    println!("Largest interaction radius: {}", cutforce);
    if let Some(calibration) = style.calibration() {
        println!(
            "Calibration ({} units): f_shift = {:.8e}, e_shift = {:.8e}, e_self = {:.8e}",
            args.units, calibration.f_shift, calibration.e_shift, calibration.e_self
        );
    }
    print!("{}", report::pair_table(&style));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ljdsf::engine::config::UnitStyle;
    use tempfile::tempdir;

    #[test]
    fn inspect_restores_and_initializes_checkpoint() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.bin");

        let mut style = LjCutCoulDsf::from_args(2, &["0.2", "5.0"]).unwrap();
        style.coeff(&["1", "1", "1.0", "1.0"]).unwrap();
        style.coeff(&["2", "2", "0.5", "1.5"]).unwrap();
        style.modify(&["tail", "yes"]).unwrap();
        let mut file = File::create(&path).unwrap();
        style.write_restart(&mut file).unwrap();
        drop(file);

        let args = InspectArgs {
            checkpoint: path,
            ntypes: 2,
            units: UnitStyle::Real,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn inspect_rejects_missing_file_and_zero_types() {
        let dir = tempdir().unwrap();
        let missing = InspectArgs {
            checkpoint: dir.path().join("missing.bin"),
            ntypes: 1,
            units: UnitStyle::Real,
        };
        assert!(matches!(run(missing), Err(CliError::Io(_))));

        let zero = InspectArgs {
            checkpoint: dir.path().join("missing.bin"),
            ntypes: 0,
            units: UnitStyle::Real,
        };
        assert!(matches!(run(zero), Err(CliError::Argument(_))));
    }

    #[test]
    fn inspect_rejects_truncated_checkpoint() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, [0u8; 10]).unwrap();
        let args = InspectArgs {
            checkpoint: path,
            ntypes: 1,
            units: UnitStyle::Real,
        };
        assert!(matches!(run(args), Err(CliError::PairStyle(_))));
    }
}
