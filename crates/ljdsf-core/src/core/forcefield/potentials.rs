use super::calibration::Calibration;
use super::pair_table::PairCoeff;

/// Force and energy of one neighbor pair.
///
/// `fpair` is the force divided by the separation: the force on the first particle is
/// `del * fpair` where `del = x_i - x_j`, and the second particle receives the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairContribution {
    pub fpair: f64,
    pub evdwl: f64,
    pub ecoul: f64,
}

#[inline]
pub fn lj_force(coeff: &PairCoeff, r6inv: f64, factor_lj: f64) -> f64 {
    factor_lj * r6inv * (coeff.lj1 * r6inv - coeff.lj2)
}

#[inline]
pub fn lj_energy(coeff: &PairCoeff, r6inv: f64, factor_lj: f64) -> f64 {
    factor_lj * r6inv * (coeff.lj3 * r6inv - coeff.lj4) - coeff.offset
}

/// Evaluates the combined LJ and shifted-force Coulomb interaction of single pairs.
#[derive(Debug, Clone, Copy)]
pub struct PairEvaluator<'a> {
    calibration: &'a Calibration,
    qqrd2e: f64,
}

impl<'a> PairEvaluator<'a> {
    pub fn new(calibration: &'a Calibration, qqrd2e: f64) -> Self {
        Self {
            calibration,
            qqrd2e,
        }
    }

    /// Returns `None` when `rsq` lies outside the pair's combined cutoff.
    ///
    /// Energies are left at zero unless `energy` is set. `rsq` must be positive.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &self,
        coeff: &PairCoeff,
        rsq: f64,
        factor_lj: f64,
        factor_coul: f64,
        q_i: f64,
        q_j: f64,
        energy: bool,
    ) -> Option<PairContribution> {
        if rsq >= coeff.cutsq {
            return None;
        }

        let calib = self.calibration;
        let r2inv = 1.0 / rsq;
        let mut out = PairContribution::default();
        let mut force = 0.0;

        if rsq < coeff.cut_ljsq {
            let r6inv = r2inv * r2inv * r2inv;
            force += lj_force(coeff, r6inv, factor_lj);
            if energy {
                out.evdwl = lj_energy(coeff, r6inv, factor_lj);
            }
        }

        if rsq < calib.cut_coulsq {
            let r = rsq.sqrt();
            let (v, f) = calib.kernel().evaluate(r);
            let prefactor = factor_coul * (self.qqrd2e * q_i) * q_j;
            force += prefactor * (f - calib.f_shift) * r;
            if energy {
                out.ecoul = prefactor * (v + r * calib.f_shift - calib.e_shift);
            }
        }

        out.fpair = force * r2inv;
        Some(out)
    }
}
