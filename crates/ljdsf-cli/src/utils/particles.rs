use crate::error::{CliError, Result};
use ljdsf::core::models::particles::ParticleSystem;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ParticleRecord {
    x: f64,
    y: f64,
    z: f64,
    charge: f64,
    #[serde(rename = "type")]
    particle_type: usize,
}

#[derive(Debug, Serialize)]
struct ForceRecord {
    index: usize,
    fx: f64,
    fy: f64,
    fz: f64,
}

/// Reads owned particles from a CSV file with a `x,y,z,charge,type` header.
pub fn read_particles(path: &Path) -> Result<ParticleSystem> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut system = ParticleSystem::new();
    for (row, record) in reader.deserialize::<ParticleRecord>().enumerate() {
        let record = record.map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("row {}: {}", row + 1, e),
        })?;
        system.add_local(
            Point3::new(record.x, record.y, record.z),
            record.charge,
            record.particle_type,
        );
    }
    Ok(system)
}

/// Checks that every particle type lies in `1..=ntypes`.
pub fn validate_types(system: &ParticleSystem, ntypes: usize) -> Result<()> {
    if let Some((index, &t)) = system
        .types()
        .iter()
        .enumerate()
        .find(|&(_, &t)| t < 1 || t > ntypes)
    {
        return Err(CliError::Argument(format!(
            "Particle {} has type {}, outside 1..={}",
            index, t, ntypes
        )));
    }
    Ok(())
}

pub fn write_forces(path: &Path, forces: &[Vector3<f64>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (index, f) in forces.iter().enumerate() {
        writer.serialize(ForceRecord {
            index,
            fx: f.x,
            fy: f.y,
            fz: f.z,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Parses a comma-separated triple of special-bond scale factors.
pub fn parse_special(value: &str) -> Result<[f64; 3]> {
    let parts: Vec<_> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CliError::Argument(format!(
            "Expected three comma-separated factors, got '{}'",
            value
        )));
    }
    let mut factors = [0.0; 3];
    for (slot, part) in factors.iter_mut().zip(&parts) {
        let factor: f64 = part
            .parse()
            .map_err(|_| CliError::Argument(format!("Invalid special-bond factor '{}'", part)))?;
        if !(0.0..=1.0).contains(&factor) {
            return Err(CliError::Argument(format!(
                "Special-bond factor {} must lie in [0, 1]",
                factor
            )));
        }
        *slot = factor;
    }
    Ok(factors)
}
