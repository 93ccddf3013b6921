use crate::error::{CliError, Result};
use ljdsf::core::forcefield::damping::DampingVariant;
use ljdsf::core::forcefield::mixing::MixingRule;
use ljdsf::core::forcefield::params::{ForceFieldFile, ParamLoadError};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Loads the force-field file and applies `--set KEY=VALUE` overrides on top of it.
pub fn load_force_field(path: &Path, set_values: &[String]) -> Result<ForceFieldFile> {
    let mut ff = ForceFieldFile::load(path).map_err(|e| match e {
        ParamLoadError::Io { source, .. } => CliError::Io(source),
        other => CliError::FileParsing {
            path: path.to_path_buf(),
            source: other.into(),
        },
    })?;
    apply_set_values(&mut ff, set_values)?;
    debug!(
        entries = ff.coeff.len(),
        overrides = set_values.len(),
        "Force field loaded."
    );
    Ok(ff)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str)))
}

fn apply_set_values(ff: &mut ForceFieldFile, set_values: &[String]) -> Result<()> {
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0];
        let value_str = parts[1];
        let settings = &mut ff.settings;

        match key {
            "settings.alpha" => settings.alpha = parse_value(key, value_str, "float")?,
            "settings.cut-lj" => settings.cut_lj = parse_value(key, value_str, "float")?,
            "settings.cut-coul" => {
                settings.cut_coul = Some(parse_value(key, value_str, "float")?)
            }
            "settings.self-energy" => {
                settings.self_energy = Some(parse_value(key, value_str, "boolean")?)
            }
            "settings.shift" => settings.shift = Some(parse_value(key, value_str, "boolean")?),
            "settings.tail" => settings.tail = Some(parse_value(key, value_str, "boolean")?),
            "settings.damping" => {
                settings.damping = Some(DampingVariant::from_keyword(value_str).ok_or_else(
                    || CliError::Config(format!("Unknown damping variant: {}", value_str)),
                )?)
            }
            "settings.mix" => {
                settings.mix = Some(MixingRule::from_keyword(value_str).ok_or_else(|| {
                    CliError::Config(format!("Unknown mixing rule: {}", value_str))
                })?)
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key for --set: {}",
                    key
                )));
            }
        }
    }
    Ok(())
}
