use crate::core::forcefield::damping::DampingVariant;
use crate::core::forcefield::mixing::MixingRule;
use crate::core::forcefield::params::ConfigError;
use crate::core::models::neighbor::SpecialBonds;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub use crate::core::forcefield::settings::GlobalSettings;

/// Unit system of the host, which fixes the Coulomb conversion constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    #[default]
    Real,
    Metal,
    Lj,
}

impl UnitStyle {
    /// Coulomb conversion factor `qqrd2e`: energy of two unit charges at unit distance.
    pub fn qqrd2e(self) -> f64 {
        match self {
            UnitStyle::Real => 332.06371,
            UnitStyle::Metal => 14.399645,
            UnitStyle::Lj => 1.0,
        }
    }
}

impl FromStr for UnitStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(UnitStyle::Real),
            "metal" => Ok(UnitStyle::Metal),
            "lj" => Ok(UnitStyle::Lj),
            _ => Err(ConfigError::InvalidKeywordValue {
                keyword: "units".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UnitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitStyle::Real => "real",
            UnitStyle::Metal => "metal",
            UnitStyle::Lj => "lj",
        };
        f.write_str(name)
    }
}

/// Constants owned by the host simulation and read by the pair style on every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSettings {
    pub qqrd2e: f64,
    pub special: SpecialBonds,
}

impl HostSettings {
    pub fn new(qqrd2e: f64) -> Self {
        Self {
            qqrd2e,
            special: SpecialBonds::default(),
        }
    }

    pub fn from_units(units: UnitStyle) -> Self {
        Self::new(units.qqrd2e())
    }

    pub fn with_special(mut self, special: SpecialBonds) -> Self {
        self.special = special;
        self
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self::from_units(UnitStyle::default())
    }
}

#[derive(Default)]
pub struct GlobalSettingsBuilder {
    alpha: Option<f64>,
    cut_lj: Option<f64>,
    cut_coul: Option<f64>,
    self_energy: Option<bool>,
    damping: Option<DampingVariant>,
    shift: Option<bool>,
    mix: Option<MixingRule>,
    tail: Option<bool>,
}

impl GlobalSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
    pub fn cut_lj(mut self, cutoff: f64) -> Self {
        self.cut_lj = Some(cutoff);
        self
    }
    pub fn cut_coul(mut self, cutoff: f64) -> Self {
        self.cut_coul = Some(cutoff);
        self
    }
    pub fn self_energy(mut self, enabled: bool) -> Self {
        self.self_energy = Some(enabled);
        self
    }
    pub fn damping(mut self, variant: DampingVariant) -> Self {
        self.damping = Some(variant);
        self
    }
    pub fn shift(mut self, enabled: bool) -> Self {
        self.shift = Some(enabled);
        self
    }
    pub fn mix(mut self, rule: MixingRule) -> Self {
        self.mix = Some(rule);
        self
    }
    pub fn tail(mut self, enabled: bool) -> Self {
        self.tail = Some(enabled);
        self
    }

    pub fn build(self) -> Result<GlobalSettings, ConfigError> {
        let alpha = self.alpha.ok_or(ConfigError::MissingParameter("alpha"))?;
        let cut_lj = self.cut_lj.ok_or(ConfigError::MissingParameter("cut_lj"))?;

        let mut settings = GlobalSettings::new(alpha, cut_lj);
        settings.cut_coul = self.cut_coul.unwrap_or(cut_lj);
        settings.self_energy = self.self_energy.unwrap_or(settings.self_energy);
        settings.damping = self.damping.unwrap_or(settings.damping);
        settings.offset = self.shift.unwrap_or(settings.offset);
        settings.mixing = self.mix.unwrap_or(settings.mixing);
        settings.tail = self.tail.unwrap_or(settings.tail);
        settings.validate()?;
        Ok(settings)
    }
}
