use super::damping::{DampingKernel, DampingVariant, TWO_OVER_SQRT_PI};

/// Shift constants derived from a bound damping kernel and the Coulomb cutoff.
///
/// A `Calibration` is only meaningful for the exact `(variant, alpha, cut_coul, qqrd2e)` it
/// was built from; any change to those inputs requires a fresh [`Calibration::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    kernel: DampingKernel,
    pub cut_coul: f64,
    pub cut_coulsq: f64,
    /// Force kernel value at the cutoff.
    pub f_shift: f64,
    /// Potential at the cutoff plus `f_shift * cut_coul`.
    pub e_shift: f64,
    /// Per-charge self-energy constant, already divided by `qqrd2e`.
    pub e_self: f64,
}

impl Calibration {
    pub fn new(kernel: DampingKernel, cut_coul: f64, qqrd2e: f64) -> Self {
        let (v_cut, f_shift) = kernel.evaluate(cut_coul);
        let e_shift = v_cut + f_shift * cut_coul;

        let e_self = match kernel.variant() {
            DampingVariant::Debye => -0.5 * (e_shift + kernel.alpha()) / qqrd2e,
            DampingVariant::Erfc => -0.5 * (e_shift + TWO_OVER_SQRT_PI * kernel.alpha()) / qqrd2e,
            DampingVariant::None | DampingVariant::Gauss => -0.5 * e_shift / qqrd2e,
        };

        Self {
            kernel,
            cut_coul,
            cut_coulsq: cut_coul * cut_coul,
            f_shift,
            e_shift,
            e_self,
        }
    }

    #[inline]
    pub fn kernel(&self) -> &DampingKernel {
        &self.kernel
    }

    /// Shifted Coulomb force term `(f - f_shift) * r` per unit prefactor.
    #[inline]
    pub fn shifted_force(&self, r: f64) -> f64 {
        let (_, f) = self.kernel.evaluate(r);
        (f - self.f_shift) * r
    }

    /// Shifted Coulomb energy `v + r * f_shift - e_shift` per unit prefactor.
    #[inline]
    pub fn shifted_energy(&self, r: f64) -> f64 {
        let (v, _) = self.kernel.evaluate(r);
        v + r * self.f_shift - self.e_shift
    }

    /// Self-energy contribution of one particle with charge `q`.
    #[inline]
    pub fn self_energy(&self, q: f64, qqrd2e: f64) -> f64 {
        let qtmp = qqrd2e * q;
        self.e_self * qtmp * qtmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn calibrations() -> Vec<Calibration> {
        let mut out = Vec::new();
        for variant in [
            DampingVariant::None,
            DampingVariant::Debye,
            DampingVariant::Gauss,
            DampingVariant::Erfc,
        ] {
            for &(alpha, cut) in &[(0.0, 2.5), (0.2, 10.0), (0.35, 12.0), (1.0, 3.0)] {
                out.push(Calibration::new(variant.bind(alpha), cut, 332.06371));
            }
        }
        out
    }

    #[test]
    fn unscreened_constants_match_hand_computed_values() {
        let calib = Calibration::new(DampingVariant::None.bind(0.0), 2.5, 1.0);
        assert!(f64_approx_equal(calib.f_shift, 1.0 / 6.25));
        assert!(f64_approx_equal(calib.e_shift, 1.0 / 2.5 + 2.5 / 6.25));
        assert!(f64_approx_equal(calib.e_self, -0.5 * calib.e_shift));
        assert!(f64_approx_equal(calib.cut_coulsq, 6.25));
    }

    #[test]
    fn shifted_force_vanishes_at_cutoff_for_every_variant() {
        for calib in calibrations() {
            assert_eq!(calib.shifted_force(calib.cut_coul), 0.0, "{:?}", calib.kernel());
        }
    }

    #[test]
    fn shifted_energy_vanishes_at_cutoff_for_every_variant() {
        for calib in calibrations() {
            let e = calib.shifted_energy(calib.cut_coul);
            assert!(e.abs() <= 1e-15 * calib.e_shift.abs().max(1.0), "{e}");
        }
    }

    #[test]
    fn debye_self_energy_includes_alpha_term() {
        let calib = Calibration::new(DampingVariant::Debye.bind(0.3), 8.0, 2.0);
        assert!(f64_approx_equal(calib.e_self, -0.5 * (calib.e_shift + 0.3) / 2.0));
    }

    #[test]
    fn erfc_self_energy_includes_gaussian_term() {
        let calib = Calibration::new(DampingVariant::Erfc.bind(0.2), 10.0, 4.0);
        let expected = -0.5 * (calib.e_shift + TWO_OVER_SQRT_PI * 0.2) / 4.0;
        assert!(f64_approx_equal(calib.e_self, expected));
    }

    #[test]
    fn gauss_self_energy_uses_energy_shift_only() {
        let calib = Calibration::new(DampingVariant::Gauss.bind(0.4), 5.0, 1.0);
        assert!(f64_approx_equal(calib.e_self, -0.5 * calib.e_shift));
    }

    #[test]
    fn self_energy_scales_with_charge_squared() {
        let calib = Calibration::new(DampingVariant::Erfc.bind(0.2), 10.0, 332.06371);
        let single = calib.self_energy(0.8, 332.06371);
        let doubled = calib.self_energy(1.6, 332.06371);
        assert!((doubled - 4.0 * single).abs() < 1e-9 * single.abs());
        assert!(single < 0.0);
    }

    #[test]
    fn erfc_self_energy_is_linear_in_qqrd2e() {
        let qqrd2e = 332.06371;
        let q = 0.8;
        let calib = Calibration::new(DampingVariant::Erfc.bind(0.2), 10.0, qqrd2e);
        let expected =
            qqrd2e * q * q * (-0.5 * (calib.e_shift + 2.0 * 0.2 / std::f64::consts::PI.sqrt()));
        let actual = calib.self_energy(q, qqrd2e);
        assert!((actual - expected).abs() < 1e-12 * expected.abs(), "{actual} vs {expected}");

        let unit = Calibration::new(DampingVariant::Erfc.bind(0.2), 10.0, 1.0);
        assert!((actual - qqrd2e * unit.self_energy(q, 1.0)).abs() < 1e-12 * expected.abs());
    }

    #[test]
    fn recalibrating_with_new_cutoff_changes_constants() {
        let kernel = DampingVariant::Erfc.bind(0.2);
        let a = Calibration::new(kernel, 10.0, 1.0);
        let b = Calibration::new(kernel, 12.0, 1.0);
        assert_ne!(a.f_shift, b.f_shift);
        assert_ne!(a.e_shift, b.e_shift);
    }
}
