use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;

static MIXING_KEYWORDS: Map<&'static str, MixingRule> = phf_map! {
    "geometric" => MixingRule::Geometric,
    "arithmetic" => MixingRule::Arithmetic,
    "sixthpower" => MixingRule::Sixthpower,
};

/// Combination rule used to derive cross-type LJ parameters from the self-interaction ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixingRule {
    Geometric,
    /// Lorentz-Berthelot: geometric well depth, arithmetic size.
    #[default]
    Arithmetic,
    Sixthpower,
}

impl MixingRule {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        MIXING_KEYWORDS.get(keyword).copied()
    }

    pub fn keyword(self) -> &'static str {
        match self {
            MixingRule::Geometric => "geometric",
            MixingRule::Arithmetic => "arithmetic",
            MixingRule::Sixthpower => "sixthpower",
        }
    }

    pub fn code(self) -> i32 {
        match self {
            MixingRule::Geometric => 0,
            MixingRule::Arithmetic => 1,
            MixingRule::Sixthpower => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(MixingRule::Geometric),
            1 => Some(MixingRule::Arithmetic),
            2 => Some(MixingRule::Sixthpower),
            _ => None,
        }
    }

    #[inline]
    pub fn mix_energy(self, eps1: f64, eps2: f64, sig1: f64, sig2: f64) -> f64 {
        match self {
            MixingRule::Geometric | MixingRule::Arithmetic => (eps1 * eps2).sqrt(),
            MixingRule::Sixthpower => {
                let sig1_3 = sig1.powi(3);
                let sig2_3 = sig2.powi(3);
                2.0 * (eps1 * eps2).sqrt() * (sig1_3 * sig2_3)
                    / (sig1_3 * sig1_3 + sig2_3 * sig2_3)
            }
        }
    }

    #[inline]
    pub fn mix_distance(self, sig1: f64, sig2: f64) -> f64 {
        match self {
            MixingRule::Geometric => (sig1 * sig2).sqrt(),
            MixingRule::Arithmetic => 0.5 * (sig1 + sig2),
            MixingRule::Sixthpower => (0.5 * (sig1.powi(6) + sig2.powi(6))).powf(1.0 / 6.0),
        }
    }
}

impl fmt::Display for MixingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
