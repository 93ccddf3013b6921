use crate::core::forcefield::damping::DampingVariant;
use crate::core::forcefield::mixing::MixingRule;
use crate::core::forcefield::pair_table::TypePairTable;
use crate::core::forcefield::params::ConfigError;
use crate::core::forcefield::settings::GlobalSettings;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field} selector {value} in checkpoint")]
    InvalidSelector { field: &'static str, value: i32 },

    #[error("Checkpoint contains an invalid pair entry: {0}")]
    Table(#[from] ConfigError),
}

fn flag(value: bool) -> i32 {
    value as i32
}

/// Writes the global settings record.
///
/// Layout: `alpha`, `cut_lj_global`, `cut_coul` as `f64`, then `offset`, `mix`, `tail`,
/// `self`, `damping` as `i32`, all little-endian.
pub fn write_settings<W: Write>(writer: &mut W, settings: &GlobalSettings) -> Result<(), CheckpointError> {
    writer.write_f64::<LittleEndian>(settings.alpha)?;
    writer.write_f64::<LittleEndian>(settings.cut_lj_global)?;
    writer.write_f64::<LittleEndian>(settings.cut_coul)?;
    writer.write_i32::<LittleEndian>(flag(settings.offset))?;
    writer.write_i32::<LittleEndian>(settings.mixing.code())?;
    writer.write_i32::<LittleEndian>(flag(settings.tail))?;
    writer.write_i32::<LittleEndian>(flag(settings.self_energy))?;
    writer.write_i32::<LittleEndian>(settings.damping.code())?;
    Ok(())
}

pub fn read_settings<R: Read>(reader: &mut R) -> Result<GlobalSettings, CheckpointError> {
    let alpha = reader.read_f64::<LittleEndian>()?;
    let cut_lj_global = reader.read_f64::<LittleEndian>()?;
    let cut_coul = reader.read_f64::<LittleEndian>()?;
    let offset = reader.read_i32::<LittleEndian>()? != 0;

    let mix_code = reader.read_i32::<LittleEndian>()?;
    let mixing = MixingRule::from_code(mix_code).ok_or(CheckpointError::InvalidSelector {
        field: "mix",
        value: mix_code,
    })?;

    let tail = reader.read_i32::<LittleEndian>()? != 0;
    let self_energy = reader.read_i32::<LittleEndian>()? != 0;

    let damping_code = reader.read_i32::<LittleEndian>()?;
    let damping = DampingVariant::from_code(damping_code).ok_or(CheckpointError::InvalidSelector {
        field: "damping",
        value: damping_code,
    })?;

    Ok(GlobalSettings {
        alpha,
        cut_lj_global,
        cut_coul,
        self_energy,
        damping,
        offset,
        mixing,
        tail,
    })
}

/// Writes the raw per-pair records for `i in 1..=n, j in i..=n`.
///
/// Each record is the explicit flag as `i32`, followed by `epsilon`, `sigma` and `cut_lj`
/// only when the flag is set. Mixed and derived values are never written.
pub fn write_pairs<W: Write>(writer: &mut W, table: &TypePairTable) -> Result<(), CheckpointError> {
    let n = table.ntypes();
    for i in 1..=n {
        for j in i..=n {
            let coeff = table.get(i, j);
            writer.write_i32::<LittleEndian>(flag(coeff.explicit))?;
            if coeff.explicit {
                writer.write_f64::<LittleEndian>(coeff.epsilon)?;
                writer.write_f64::<LittleEndian>(coeff.sigma)?;
                writer.write_f64::<LittleEndian>(coeff.cut_lj)?;
            }
        }
    }
    Ok(())
}

pub fn read_pairs<R: Read>(reader: &mut R, ntypes: usize) -> Result<TypePairTable, CheckpointError> {
    let mut table = TypePairTable::new(ntypes);
    for i in 1..=ntypes {
        for j in i..=ntypes {
            let explicit = reader.read_i32::<LittleEndian>()?;
            match explicit {
                0 => {}
                1 => {
                    let epsilon = reader.read_f64::<LittleEndian>()?;
                    let sigma = reader.read_f64::<LittleEndian>()?;
                    let cut_lj = reader.read_f64::<LittleEndian>()?;
                    table.restore_explicit(i, j, epsilon, sigma, cut_lj)?;
                }
                value => {
                    return Err(CheckpointError::InvalidSelector {
                        field: "explicit",
                        value,
                    });
                }
            }
        }
    }
    Ok(table)
}
