use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;

const ERFC_P: f64 = 0.3275911;
const ERFC_A1: f64 = 0.254829592;
const ERFC_A2: f64 = -0.284496736;
const ERFC_A3: f64 = 1.421413741;
const ERFC_A4: f64 = -1.453152027;
const ERFC_A5: f64 = 1.061405429;

/// 2/sqrt(pi).
pub const TWO_OVER_SQRT_PI: f64 = 1.12837916709551;

static DAMPING_KEYWORDS: Map<&'static str, DampingVariant> = phf_map! {
    "none" => DampingVariant::None,
    "debye" => DampingVariant::Debye,
    "gauss" => DampingVariant::Gauss,
    "erfc" => DampingVariant::Erfc,
};

/// Shape of the unshifted Coulomb interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DampingVariant {
    None,
    Debye,
    Gauss,
    #[default]
    Erfc,
}

impl DampingVariant {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        DAMPING_KEYWORDS.get(keyword).copied()
    }

    pub fn keyword(self) -> &'static str {
        match self {
            DampingVariant::None => "none",
            DampingVariant::Debye => "debye",
            DampingVariant::Gauss => "gauss",
            DampingVariant::Erfc => "erfc",
        }
    }

    /// Selector code used in checkpoints.
    pub fn code(self) -> i32 {
        match self {
            DampingVariant::None => 0,
            DampingVariant::Debye => 1,
            DampingVariant::Gauss => 2,
            DampingVariant::Erfc => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(DampingVariant::None),
            1 => Some(DampingVariant::Debye),
            2 => Some(DampingVariant::Gauss),
            3 => Some(DampingVariant::Erfc),
            _ => None,
        }
    }

    /// Resolves the variant into a callable kernel for the given damping strength.
    pub fn bind(self, alpha: f64) -> DampingKernel {
        let eval: DampingFn = match self {
            DampingVariant::None => unshifted_none,
            DampingVariant::Debye => unshifted_debye,
            DampingVariant::Gauss => unshifted_gauss,
            DampingVariant::Erfc => unshifted_erfc,
        };
        DampingKernel {
            variant: self,
            alpha,
            eval,
        }
    }
}

impl fmt::Display for DampingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

type DampingFn = fn(f64, f64) -> (f64, f64);

/// A damping variant bound to its damping strength.
///
/// Evaluating the kernel at separation `r` yields `(v, f)`: the unshifted potential per unit
/// charge product, and the matching force term such that the pair force magnitude is
/// `q_i * q_j * f`. `r` must be strictly positive.
#[derive(Clone, Copy)]
pub struct DampingKernel {
    variant: DampingVariant,
    alpha: f64,
    eval: DampingFn,
}

impl DampingKernel {
    #[inline]
    pub fn evaluate(&self, r: f64) -> (f64, f64) {
        (self.eval)(r, self.alpha)
    }

    pub fn variant(&self) -> DampingVariant {
        self.variant
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl fmt::Debug for DampingKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DampingKernel")
            .field("variant", &self.variant)
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl PartialEq for DampingKernel {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.alpha.to_bits() == other.alpha.to_bits()
    }
}

#[inline]
fn unshifted_none(r: f64, _alpha: f64) -> (f64, f64) {
    let v = 1.0 / r;
    (v, v * v)
}

#[inline]
fn unshifted_debye(r: f64, alpha: f64) -> (f64, f64) {
    let ar = alpha * r;
    let inv_r = 1.0 / r;
    let v = (-ar).exp() * inv_r;
    (v, inv_r * (1.0 + ar) * v)
}

#[inline]
fn unshifted_gauss(r: f64, alpha: f64) -> (f64, f64) {
    let ar2 = (alpha * r) * (alpha * r);
    let inv_r = 1.0 / r;
    let v = (-ar2).exp() * inv_r;
    (v, inv_r * (1.0 + 2.0 * ar2) * v)
}

#[inline]
fn unshifted_erfc(r: f64, alpha: f64) -> (f64, f64) {
    let ar = alpha * r;
    let gauss = (-ar * ar).exp() / r;
    let t = 1.0 / (1.0 + ERFC_P * ar);
    let v = t * (ERFC_A1 + t * (ERFC_A2 + t * (ERFC_A3 + t * (ERFC_A4 + t * ERFC_A5)))) * gauss;
    (v, v / r + TWO_OVER_SQRT_PI * alpha * gauss)
}
