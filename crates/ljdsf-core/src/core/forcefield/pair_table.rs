use super::mixing::MixingRule;
use super::params::ConfigError;
use std::ops::RangeInclusive;

/// Parameters of one type pair. Derived fields are only valid after [`TypePairTable::finalize`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairCoeff {
    pub epsilon: f64,
    pub sigma: f64,
    pub cut_lj: f64,
    pub cut_ljsq: f64,
    pub lj1: f64,
    pub lj2: f64,
    pub lj3: f64,
    pub lj4: f64,
    pub offset: f64,
    /// Square of the larger of the LJ and Coulomb cutoffs.
    pub cutsq: f64,
    /// Set when the pair was configured directly rather than mixed.
    pub explicit: bool,
}

impl PairCoeff {
    fn derive(&mut self, offset_enabled: bool, cut_coul: f64) -> f64 {
        let sig6 = self.sigma.powi(6);
        let sig12 = sig6 * sig6;

        self.cut_ljsq = self.cut_lj * self.cut_lj;
        self.lj1 = 48.0 * self.epsilon * sig12;
        self.lj2 = 24.0 * self.epsilon * sig6;
        self.lj3 = 4.0 * self.epsilon * sig12;
        self.lj4 = 4.0 * self.epsilon * sig6;

        self.offset = if offset_enabled && self.cut_lj > 0.0 {
            let ratio6 = (self.sigma / self.cut_lj).powi(6);
            4.0 * self.epsilon * (ratio6 * ratio6 - ratio6)
        } else {
            0.0
        };

        let cut = self.cut_lj.max(cut_coul);
        self.cutsq = cut * cut;
        cut
    }
}

/// Symmetric per-type-pair parameter table, stored as a dense `(ntypes + 1)^2` arena.
///
/// Row and column 0 are unused so that type indices can be used directly.
#[derive(Debug, Clone, PartialEq)]
pub struct TypePairTable {
    ntypes: usize,
    cells: Vec<PairCoeff>,
}

impl TypePairTable {
    pub fn new(ntypes: usize) -> Self {
        Self {
            ntypes,
            cells: vec![PairCoeff::default(); (ntypes + 1) * (ntypes + 1)],
        }
    }

    pub fn ntypes(&self) -> usize {
        self.ntypes
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * (self.ntypes + 1) + j
    }

    fn check(&self, i: usize, j: usize) -> Result<(), ConfigError> {
        for index in [i, j] {
            if index < 1 || index > self.ntypes {
                return Err(ConfigError::TypeIndex {
                    index,
                    ntypes: self.ntypes,
                });
            }
        }
        Ok(())
    }

    /// Unchecked lookup for the hot loop; both indices must lie in `1..=ntypes`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &PairCoeff {
        &self.cells[self.index(i, j)]
    }

    pub fn try_get(&self, i: usize, j: usize) -> Option<&PairCoeff> {
        self.check(i, j).ok().map(|_| self.get(i, j))
    }

    pub fn is_explicit(&self, i: usize, j: usize) -> bool {
        self.try_get(i, j).is_some_and(|c| c.explicit)
    }

    fn set_mirrored(&mut self, i: usize, j: usize, coeff: PairCoeff) {
        let ij = self.index(i, j);
        let ji = self.index(j, i);
        self.cells[ij] = coeff;
        self.cells[ji] = coeff;
    }

    /// Stores raw LJ parameters for every pair in `i_range x j_range`, mirrored into the
    /// transposed cell, and returns the number of cross-product cells touched.
    pub fn configure(
        &mut self,
        i_range: RangeInclusive<usize>,
        j_range: RangeInclusive<usize>,
        epsilon: f64,
        sigma: f64,
        cut_lj: f64,
    ) -> Result<usize, ConfigError> {
        if !i_range.is_empty() && !j_range.is_empty() {
            self.check(*i_range.start(), *j_range.start())?;
            self.check(*i_range.end(), *j_range.end())?;
        }

        let mut count = 0;
        for i in i_range.clone() {
            for j in j_range.clone() {
                let coeff = PairCoeff {
                    epsilon,
                    sigma,
                    cut_lj,
                    explicit: true,
                    ..PairCoeff::default()
                };
                self.set_mirrored(i, j, coeff);
                count += 1;
            }
        }

        if count == 0 {
            return Err(ConfigError::EmptyTypeRange {
                i: format!("{}*{}", i_range.start(), i_range.end()),
                j: format!("{}*{}", j_range.start(), j_range.end()),
            });
        }
        Ok(count)
    }

    /// Overwrites the LJ cutoff of explicitly configured off-diagonal pairs.
    pub fn reset_explicit_cutoffs(&mut self, cut_lj: f64) {
        for i in 1..=self.ntypes {
            for j in (i + 1)..=self.ntypes {
                if self.get(i, j).explicit {
                    let mut coeff = *self.get(i, j);
                    coeff.cut_lj = cut_lj;
                    self.set_mirrored(i, j, coeff);
                }
            }
        }
    }

    /// Restores a raw explicit entry, as read back from a checkpoint.
    pub fn restore_explicit(
        &mut self,
        i: usize,
        j: usize,
        epsilon: f64,
        sigma: f64,
        cut_lj: f64,
    ) -> Result<(), ConfigError> {
        self.check(i, j)?;
        self.set_mirrored(
            i,
            j,
            PairCoeff {
                epsilon,
                sigma,
                cut_lj,
                explicit: true,
                ..PairCoeff::default()
            },
        );
        Ok(())
    }

    /// Mixes (if needed) and derives the coefficients of pair `(i, j)`, mirroring them into
    /// `(j, i)`. Returns the pair's overall interaction radius.
    pub fn finalize(
        &mut self,
        i: usize,
        j: usize,
        mixing: MixingRule,
        offset_enabled: bool,
        cut_coul: f64,
    ) -> Result<f64, ConfigError> {
        self.check(i, j)?;
        let mut coeff = *self.get(i, j);

        if !coeff.explicit {
            let ii = *self.get(i, i);
            let jj = *self.get(j, j);
            if !ii.explicit || !jj.explicit {
                return Err(ConfigError::MissingCoefficients(i, j));
            }
            coeff.epsilon = mixing.mix_energy(ii.epsilon, jj.epsilon, ii.sigma, jj.sigma);
            coeff.sigma = mixing.mix_distance(ii.sigma, jj.sigma);
            coeff.cut_lj = mixing.mix_distance(ii.cut_lj, jj.cut_lj);
        }

        let cut = coeff.derive(offset_enabled, cut_coul);
        self.set_mirrored(i, j, coeff);
        Ok(cut)
    }

    /// Explicit raw entries for `i <= j` in ascending order.
    pub fn explicit_entries(&self) -> impl Iterator<Item = (usize, usize, &PairCoeff)> + '_ {
        (1..=self.ntypes)
            .flat_map(move |i| (i..=self.ntypes).map(move |j| (i, j)))
            .map(move |(i, j)| (i, j, self.get(i, j)))
            .filter(|(_, _, c)| c.explicit)
    }
}
