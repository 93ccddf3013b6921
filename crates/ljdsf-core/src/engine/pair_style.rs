use super::compute::{ComputeFlags, InteractionLoop, LoopSummary};
use super::config::{GlobalSettings, HostSettings};
use super::error::PairStyleError;
use super::ledger::EnergyLedger;
use crate::core::forcefield::calibration::Calibration;
use crate::core::forcefield::damping::DampingVariant;
use crate::core::forcefield::pair_table::{PairCoeff, TypePairTable};
use crate::core::forcefield::params::{ConfigError, ForceFieldFile, parse_number, parse_type_range};
use crate::core::forcefield::potentials::PairEvaluator;
use crate::core::forcefield::tail::{TailCorrection, TypeCounts};
use crate::core::forcefield::term::EnergyTerm;
use crate::core::io::checkpoint;
use crate::core::models::neighbor::NeighborList;
use crate::core::models::particles::ParticleView;
use nalgebra::Vector3;
use std::io::{Read, Write};
use tracing::{debug, info, instrument, warn};

/// A named scalar exposed to other host components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extracted {
    pub value: f64,
    /// Number of type indices the value is keyed by; 0 for a global scalar.
    pub dim: usize,
}

/// Result of evaluating one isolated pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SinglePair {
    /// Force divided by separation.
    pub fforce: f64,
    pub energy: EnergyTerm,
}

/// Result of finalizing one type pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairInit {
    /// Overall interaction radius of the pair.
    pub cutoff: f64,
    /// Zero unless tail corrections are enabled.
    pub tail: TailCorrection,
}

/// Lennard-Jones with damped-shifted-force Coulomb.
///
/// The lifecycle mirrors a host engine's pair style: configure with [`settings`],
/// [`modify`] and [`coeff`] (in any order, any number of times), then [`init`] once
/// before force passes. Every configuration call discards the cached calibration, so
/// [`compute`] and [`single`] refuse to run until `init` is repeated.
///
/// [`settings`]: LjCutCoulDsf::settings
/// [`modify`]: LjCutCoulDsf::modify
/// [`coeff`]: LjCutCoulDsf::coeff
/// [`init`]: LjCutCoulDsf::init
/// [`compute`]: LjCutCoulDsf::compute
/// [`single`]: LjCutCoulDsf::single
#[derive(Debug, Clone)]
pub struct LjCutCoulDsf {
    settings: GlobalSettings,
    table: TypePairTable,
    host: HostSettings,
    calibration: Option<Calibration>,
    cutforce: f64,
    etail: f64,
    ptail: f64,
}

impl LjCutCoulDsf {
    pub fn new(ntypes: usize, settings: GlobalSettings) -> Self {
        Self {
            settings,
            table: TypePairTable::new(ntypes),
            host: HostSettings::default(),
            calibration: None,
            cutforce: 0.0,
            etail: 0.0,
            ptail: 0.0,
        }
    }

    /// Creates the style from pair-style arguments; see [`GlobalSettings::from_args`].
    pub fn from_args(ntypes: usize, args: &[&str]) -> Result<Self, PairStyleError> {
        Ok(Self::new(ntypes, GlobalSettings::from_args(args)?))
    }

    /// Creates the style from a parsed force-field file, applying its coefficient entries
    /// in file order.
    pub fn from_force_field(ntypes: usize, ff: &ForceFieldFile) -> Result<Self, PairStyleError> {
        let settings = GlobalSettings::from_section(&ff.settings)?;
        let mut style = Self::new(ntypes, settings);
        for entry in &ff.coeff {
            style.set_coeff(&entry.i, &entry.j, entry.epsilon, entry.sigma, entry.cut_lj)?;
        }
        info!(
            ntypes,
            entries = ff.coeff.len(),
            damping = %settings.damping,
            "Loaded pair style from force field file."
        );
        Ok(style)
    }

    pub fn ntypes(&self) -> usize {
        self.table.ntypes()
    }

    pub fn global_settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn table(&self) -> &TypePairTable {
        &self.table
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.calibration.is_some()
    }

    /// Largest interaction radius over all type pairs, as of the last `init`.
    pub fn cutforce(&self) -> f64 {
        self.cutforce
    }

    pub fn etail(&self) -> f64 {
        self.etail
    }

    pub fn ptail(&self) -> f64 {
        self.ptail
    }

    fn invalidate(&mut self) {
        self.calibration = None;
    }

    /// Re-applies pair-style arguments `alpha cut_lj [cut_coul] [self yes|no] [damp ...]`.
    ///
    /// Explicitly configured off-diagonal pairs have their LJ cutoff reset to the new
    /// global cutoff.
    pub fn settings(&mut self, args: &[&str]) -> Result<(), PairStyleError> {
        self.settings.apply_args(args)?;
        self.table.reset_explicit_cutoffs(self.settings.cut_lj_global);
        self.invalidate();
        Ok(())
    }

    /// Applies pair-modify keywords `shift`, `mix` and `tail`.
    pub fn modify(&mut self, args: &[&str]) -> Result<(), PairStyleError> {
        self.settings.apply_modify(args)?;
        self.invalidate();
        Ok(())
    }

    /// Sets `i_range j_range epsilon sigma [cut_lj]` and returns the number of type-pair
    /// cells touched.
    pub fn coeff(&mut self, args: &[&str]) -> Result<usize, PairStyleError> {
        if !(4..=5).contains(&args.len()) {
            return Err(ConfigError::ArgumentCount {
                command: "pair_coeff",
                expected: "4 or 5",
                found: args.len(),
            }
            .into());
        }
        let epsilon = parse_number("epsilon", args[2])?;
        let sigma = parse_number("sigma", args[3])?;
        let cut_lj = args
            .get(4)
            .map(|value| parse_number("cut_lj", value))
            .transpose()?;
        self.set_coeff(args[0], args[1], epsilon, sigma, cut_lj)
    }

    fn set_coeff(
        &mut self,
        i_token: &str,
        j_token: &str,
        epsilon: f64,
        sigma: f64,
        cut_lj: Option<f64>,
    ) -> Result<usize, PairStyleError> {
        let ntypes = self.table.ntypes();
        let i_range = parse_type_range(i_token, ntypes)?;
        let j_range = parse_type_range(j_token, ntypes)?;
        if let Some(value) = cut_lj {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange {
                    field: "cut_lj",
                    requirement: "finite and positive",
                    value,
                }
                .into());
            }
        }
        let cut_lj = cut_lj.unwrap_or(self.settings.cut_lj_global);

        let count = self
            .table
            .configure(i_range, j_range, epsilon, sigma, cut_lj)?;
        self.invalidate();
        debug!(i = i_token, j = j_token, epsilon, sigma, cut_lj, count, "Set pair coefficients.");
        Ok(count)
    }

    /// Validates prerequisites, recalibrates the Coulomb shift and finalizes every type
    /// pair. Returns the largest interaction radius.
    ///
    /// `type_counts` are the global per-type particle counts; they are only required when
    /// tail corrections are enabled.
    #[instrument(skip_all, name = "pair_style_init")]
    pub fn init(
        &mut self,
        host: HostSettings,
        has_charges: bool,
        type_counts: Option<&TypeCounts>,
    ) -> Result<f64, PairStyleError> {
        self.invalidate();
        if !has_charges {
            return Err(PairStyleError::MissingCharges);
        }
        if self.settings.tail && type_counts.is_none() {
            return Err(PairStyleError::MissingTypeCounts);
        }

        let s = self.settings;
        if s.alpha == 0.0 && s.damping != DampingVariant::None {
            warn!(
                damping = %s.damping,
                "Damping parameter alpha is zero; the {} variant reduces to the undamped kernel.",
                s.damping
            );
        }

        let calibration = Calibration::new(s.damping.bind(s.alpha), s.cut_coul, host.qqrd2e);

        let ntypes = self.table.ntypes();
        let mut cutforce: f64 = 0.0;
        let mut etail = 0.0;
        let mut ptail = 0.0;
        for i in 1..=ntypes {
            for j in i..=ntypes {
                let pair = self.init_one(i, j, type_counts)?;
                cutforce = cutforce.max(pair.cutoff);
                let weight = if i == j { 1.0 } else { 2.0 };
                etail += weight * pair.tail.etail;
                ptail += weight * pair.tail.ptail;
            }
        }

        self.host = host;
        self.calibration = Some(calibration);
        self.cutforce = cutforce;
        self.etail = etail;
        self.ptail = ptail;

        info!(
            damping = %s.damping,
            alpha = s.alpha,
            cut_coul = s.cut_coul,
            f_shift = calibration.f_shift,
            e_shift = calibration.e_shift,
            e_self = calibration.e_self,
            cutforce,
            "Pair style initialized."
        );
        if s.tail {
            info!(etail, ptail, "Tail corrections computed.");
        }

        Ok(cutforce)
    }

    /// Mixes (if needed) and finalizes pair `(i, j)`, computing its tail correction when
    /// enabled.
    pub fn init_one(
        &mut self,
        i: usize,
        j: usize,
        type_counts: Option<&TypeCounts>,
    ) -> Result<PairInit, PairStyleError> {
        let s = self.settings;
        let cutoff = self
            .table
            .finalize(i, j, s.mixing, s.offset, s.cut_coul)?;

        let tail = if s.tail {
            let counts = type_counts.ok_or(PairStyleError::MissingTypeCounts)?;
            TailCorrection::for_pair(self.table.get(i, j), counts.get(i), counts.get(j))
        } else {
            TailCorrection::default()
        };

        Ok(PairInit { cutoff, tail })
    }

    /// Runs one force pass, adding forces into `forces` and reporting energies and virials
    /// to `ledger` as requested by `flags`.
    #[instrument(skip_all, name = "pair_style_compute")]
    pub fn compute<L: EnergyLedger + ?Sized>(
        &self,
        particles: &ParticleView<'_>,
        forces: &mut [Vector3<f64>],
        neighbors: &NeighborList,
        flags: ComputeFlags,
        ledger: &mut L,
    ) -> Result<LoopSummary, PairStyleError> {
        let calibration = self
            .calibration
            .as_ref()
            .ok_or(PairStyleError::NotInitialized)?;

        let ntypes = self.table.ntypes();
        if let Some(&index) = particles.types.iter().find(|&&t| t < 1 || t > ntypes) {
            return Err(ConfigError::TypeIndex { index, ntypes }.into());
        }

        let summary = InteractionLoop {
            table: &self.table,
            calibration,
            host: &self.host,
            self_energy: self.settings.self_energy,
        }
        .run(particles, forces, neighbors, flags, ledger);

        debug!(
            owned = particles.nlocal,
            visited = summary.pairs_visited,
            evaluated = summary.pairs_evaluated,
            "Force pass complete."
        );
        Ok(summary)
    }

    /// Evaluates an isolated pair of the given types, outside any neighbor list.
    ///
    /// Only the pair terms are returned. The per-particle self energy tallied by
    /// [`compute`](Self::compute) when `self yes` is set has no pair counterpart and is
    /// never included here.
    #[allow(clippy::too_many_arguments)]
    pub fn single(
        &self,
        i_type: usize,
        j_type: usize,
        rsq: f64,
        factor_coul: f64,
        factor_lj: f64,
        q_i: f64,
        q_j: f64,
    ) -> Result<SinglePair, PairStyleError> {
        let calibration = self
            .calibration
            .as_ref()
            .ok_or(PairStyleError::NotInitialized)?;
        let coeff: &PairCoeff = self.table.try_get(i_type, j_type).ok_or_else(|| {
            ConfigError::TypeIndex {
                index: i_type.max(j_type),
                ntypes: self.table.ntypes(),
            }
        })?;

        let evaluator = PairEvaluator::new(calibration, self.host.qqrd2e);
        Ok(evaluator
            .evaluate(coeff, rsq, factor_lj, factor_coul, q_i, q_j, true)
            .map(|out| SinglePair {
                fforce: out.fpair,
                energy: EnergyTerm::new(out.evdwl, out.ecoul),
            })
            .unwrap_or_default())
    }

    pub fn extract(&self, name: &str) -> Option<Extracted> {
        match name {
            "cut_coul" => Some(Extracted {
                value: self.settings.cut_coul,
                dim: 0,
            }),
            _ => None,
        }
    }

    /// Writes the global settings followed by the raw explicit pair entries.
    pub fn write_restart<W: Write>(&self, writer: &mut W) -> Result<(), PairStyleError> {
        checkpoint::write_settings(writer, &self.settings)?;
        checkpoint::write_pairs(writer, &self.table)?;
        Ok(())
    }

    /// Restores a style written by [`write_restart`](Self::write_restart). The result must
    /// be initialized again before use.
    pub fn read_restart<R: Read>(reader: &mut R, ntypes: usize) -> Result<Self, PairStyleError> {
        let settings = checkpoint::read_settings(reader)?;
        settings.validate()?;
        let table = checkpoint::read_pairs(reader, ntypes)?;
        info!(
            ntypes,
            explicit = table.explicit_entries().count(),
            "Restored pair style from checkpoint."
        );
        Ok(Self {
            table,
            ..Self::new(ntypes, settings)
        })
    }
}
