use super::pair_table::PairCoeff;
use std::f64::consts::PI;

/// Number of particles of each type, indexed by type (index 0 unused).
///
/// Counts are kept as `f64` so partition-local tallies can be summed by the host without
/// conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeCounts {
    counts: Vec<f64>,
}

impl TypeCounts {
    pub fn new(ntypes: usize) -> Self {
        Self {
            counts: vec![0.0; ntypes + 1],
        }
    }

    /// Counts the given (owned) particle types. Types outside `1..=ntypes` are ignored.
    pub fn from_types(types: &[usize], ntypes: usize) -> Self {
        let mut counts = Self::new(ntypes);
        for &t in types {
            if (1..=ntypes).contains(&t) {
                counts.counts[t] += 1.0;
            }
        }
        counts
    }

    /// Adds another partition's tally into this one.
    pub fn merge(&mut self, other: &TypeCounts) {
        if other.counts.len() > self.counts.len() {
            self.counts.resize(other.counts.len(), 0.0);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }

    pub fn get(&self, t: usize) -> f64 {
        self.counts.get(t).copied().unwrap_or(0.0)
    }

    pub fn ntypes(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }
}

/// Long-range dispersion correction of one type pair, assuming uniform density beyond the
/// LJ cutoff. Neither term is divided by the volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TailCorrection {
    pub etail: f64,
    pub ptail: f64,
}

impl TailCorrection {
    pub fn for_pair(coeff: &PairCoeff, count_i: f64, count_j: f64) -> Self {
        let sig2 = coeff.sigma * coeff.sigma;
        let sig6 = sig2 * sig2 * sig2;
        let rc3 = coeff.cut_lj * coeff.cut_lj * coeff.cut_lj;
        let rc6 = rc3 * rc3;
        let rc9 = rc3 * rc6;
        let pairs = count_i * count_j * coeff.epsilon;

        Self {
            etail: 8.0 * PI * pairs * sig6 * (sig6 - 3.0 * rc6) / (9.0 * rc9),
            ptail: 16.0 * PI * pairs * sig6 * (2.0 * sig6 - 3.0 * rc6) / (9.0 * rc9),
        }
    }
}
