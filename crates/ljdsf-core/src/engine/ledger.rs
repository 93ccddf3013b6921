use crate::core::forcefield::term::EnergyTerm;
use nalgebra::Vector3;

/// One evaluated neighbor pair as reported to the host ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairTally {
    pub i: usize,
    pub j: usize,
    pub evdwl: f64,
    pub ecoul: f64,
    pub fpair: f64,
    /// `x_i - x_j`.
    pub del: Vector3<f64>,
}

impl PairTally {
    /// Six-component virial `[xx, yy, zz, xy, xz, yz]` of the pair.
    pub fn virial(&self) -> [f64; 6] {
        let d = &self.del;
        let f = self.fpair;
        [
            d.x * d.x * f,
            d.y * d.y * f,
            d.z * d.z * f,
            d.x * d.y * f,
            d.x * d.z * f,
            d.y * d.z * f,
        ]
    }
}

/// Which particles of the current pass belong to this partition, and whether pairs
/// straddling the partition boundary are counted once here or split with the neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub nlocal: usize,
    pub newton_pair: bool,
}

impl Ownership {
    /// Fraction of a pair's global energy and virial that belongs to this partition.
    pub fn pair_share(&self, i: usize, j: usize) -> f64 {
        if self.newton_pair {
            return 1.0;
        }
        let mut share = 0.0;
        if i < self.nlocal {
            share += 0.5;
        }
        if j < self.nlocal {
            share += 0.5;
        }
        share
    }

    /// Whether the per-atom accumulator of `index` receives half of a pair's energy.
    pub fn owns_atom_half(&self, index: usize) -> bool {
        self.newton_pair || index < self.nlocal
    }
}

/// Host-side sink for energy and virial contributions.
///
/// The pair style only reports contributions; how they are attributed and reduced is the
/// implementor's business.
pub trait EnergyLedger {
    fn tally_pair(&mut self, pair: &PairTally, ownership: Ownership);

    /// Energy attributed to a single particle with no partner, such as the Coulomb
    /// self-energy. Counted in full.
    fn tally_self(&mut self, i: usize, ecoul: f64);
}

/// Reference ledger accumulating global energy, the global virial and, optionally,
/// per-atom energies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyTally {
    pub energy: EnergyTerm,
    pub virial: [f64; 6],
    per_atom: Option<Vec<f64>>,
}

impl EnergyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also tracks per-atom energies for `len` particles (owned and ghost).
    pub fn with_per_atom(len: usize) -> Self {
        Self {
            per_atom: Some(vec![0.0; len]),
            ..Self::default()
        }
    }

    pub fn per_atom(&self) -> Option<&[f64]> {
        self.per_atom.as_deref()
    }

    pub fn reset(&mut self) {
        self.energy = EnergyTerm::default();
        self.virial = [0.0; 6];
        if let Some(per_atom) = self.per_atom.as_mut() {
            per_atom.iter_mut().for_each(|e| *e = 0.0);
        }
    }
}

impl EnergyLedger for EnergyTally {
    fn tally_pair(&mut self, pair: &PairTally, ownership: Ownership) {
        let share = ownership.pair_share(pair.i, pair.j);
        if share == 0.0 {
            return;
        }

        self.energy += EnergyTerm::new(pair.evdwl, pair.ecoul).scaled(share);
        for (total, v) in self.virial.iter_mut().zip(pair.virial()) {
            *total += share * v;
        }

        if let Some(per_atom) = self.per_atom.as_mut() {
            let half = 0.5 * (pair.evdwl + pair.ecoul);
            for index in [pair.i, pair.j] {
                if ownership.owns_atom_half(index) {
                    if let Some(e) = per_atom.get_mut(index) {
                        *e += half;
                    }
                }
            }
        }
    }

    fn tally_self(&mut self, i: usize, ecoul: f64) {
        self.energy.coulomb += ecoul;
        if let Some(e) = self.per_atom.as_mut().and_then(|p| p.get_mut(i)) {
            *e += ecoul;
        }
    }
}
