use super::config::HostSettings;
use super::ledger::{EnergyLedger, Ownership, PairTally};
use crate::core::forcefield::calibration::Calibration;
use crate::core::forcefield::pair_table::TypePairTable;
use crate::core::forcefield::potentials::PairEvaluator;
use crate::core::models::neighbor::NeighborList;
use crate::core::models::particles::ParticleView;
use nalgebra::Vector3;

/// Per-pass switches supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputeFlags {
    pub energy: bool,
    pub virial: bool,
    /// Reaction forces on ghost partners are accumulated here rather than by their owner.
    pub newton_pair: bool,
}

impl ComputeFlags {
    pub fn forces_only(newton_pair: bool) -> Self {
        Self {
            energy: false,
            virial: false,
            newton_pair,
        }
    }

    pub fn all(newton_pair: bool) -> Self {
        Self {
            energy: true,
            virial: true,
            newton_pair,
        }
    }

    fn tally(&self) -> bool {
        self.energy || self.virial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSummary {
    pub pairs_visited: usize,
    pub pairs_evaluated: usize,
}

/// One force pass over a neighbor list with fixed, fully initialized parameters.
pub(crate) struct InteractionLoop<'a> {
    pub table: &'a TypePairTable,
    pub calibration: &'a Calibration,
    pub host: &'a HostSettings,
    pub self_energy: bool,
}

impl InteractionLoop<'_> {
    /// Particle types must lie in `1..=ntypes` and no two particles in the list may coincide.
    pub fn run<L: EnergyLedger + ?Sized>(
        &self,
        particles: &ParticleView<'_>,
        forces: &mut [Vector3<f64>],
        neighbors: &NeighborList,
        flags: ComputeFlags,
        ledger: &mut L,
    ) -> LoopSummary {
        let evaluator = PairEvaluator::new(self.calibration, self.host.qqrd2e);
        let special = &self.host.special;
        let ownership = Ownership {
            nlocal: particles.nlocal,
            newton_pair: flags.newton_pair,
        };
        let mut summary = LoopSummary::default();

        if flags.energy && self.self_energy {
            for i in 0..particles.nlocal {
                let e = self
                    .calibration
                    .self_energy(particles.charges[i], self.host.qqrd2e);
                ledger.tally_self(i, e);
            }
        }

        for (i, entries) in neighbors.iter() {
            let x_i = particles.positions[i];
            let q_i = particles.charges[i];
            let type_i = particles.types[i];

            for entry in entries {
                let j = entry.index();
                let sb = entry.special();
                summary.pairs_visited += 1;

                let del = x_i - particles.positions[j];
                let rsq = del.norm_squared();
                let coeff = self.table.get(type_i, particles.types[j]);

                let Some(out) = evaluator.evaluate(
                    coeff,
                    rsq,
                    special.lj[sb],
                    special.coul[sb],
                    q_i,
                    particles.charges[j],
                    flags.energy,
                ) else {
                    continue;
                };
                summary.pairs_evaluated += 1;

                let f = del * out.fpair;
                forces[i] += f;
                if flags.newton_pair || j < particles.nlocal {
                    forces[j] -= f;
                }

                if flags.tally() {
                    ledger.tally_pair(
                        &PairTally {
                            i,
                            j,
                            evdwl: out.evdwl,
                            ecoul: out.ecoul,
                            fpair: out.fpair,
                            del,
                        },
                        ownership,
                    );
                }
            }
        }

        summary
    }
}
