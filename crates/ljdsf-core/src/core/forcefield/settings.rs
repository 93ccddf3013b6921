use super::damping::DampingVariant;
use super::mixing::MixingRule;
use super::params::{ConfigError, SettingsSection, parse_number, parse_switch};

/// Global parameters of the pair style.
///
/// `alpha`, the cutoffs and `damping` feed the shift calibration; `offset`, `mixing` and
/// `tail` are the pair-modify switches applied while finalizing the pair table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalSettings {
    pub alpha: f64,
    pub cut_lj_global: f64,
    pub cut_coul: f64,
    pub self_energy: bool,
    pub damping: DampingVariant,
    pub offset: bool,
    pub mixing: MixingRule,
    pub tail: bool,
}

impl GlobalSettings {
    pub fn new(alpha: f64, cut_lj_global: f64) -> Self {
        Self {
            alpha,
            cut_lj_global,
            cut_coul: cut_lj_global,
            self_energy: true,
            damping: DampingVariant::default(),
            offset: false,
            mixing: MixingRule::default(),
            tail: false,
        }
    }

    /// Parses `alpha cut_lj [cut_coul] [self yes|no] [damp none|debye|gauss|erfc]`.
    pub fn from_args(args: &[&str]) -> Result<Self, ConfigError> {
        let mut settings = Self::new(0.0, 1.0);
        settings.apply_args(args)?;
        Ok(settings)
    }

    /// Re-applies pair-style arguments on top of the current values. Keywords that are not
    /// given keep their previous setting. Nothing is modified if the arguments are invalid.
    pub fn apply_args(&mut self, args: &[&str]) -> Result<(), ConfigError> {
        if args.len() < 2 {
            return Err(ConfigError::ArgumentCount {
                command: "pair_style",
                expected: "at least 2",
                found: args.len(),
            });
        }

        let mut next = *self;
        next.alpha = parse_number("alpha", args[0])?;
        next.cut_lj_global = parse_number("cut_lj", args[1])?;

        let mut iarg = 2;
        match args.get(2) {
            None | Some(&"self") | Some(&"damp") => next.cut_coul = next.cut_lj_global,
            Some(value) => {
                next.cut_coul = parse_number("cut_coul", value)?;
                iarg += 1;
            }
        }

        while iarg < args.len() {
            let keyword = args[iarg];
            let value = args
                .get(iarg + 1)
                .ok_or_else(|| ConfigError::MissingKeywordValue(keyword.to_string()))?;
            match keyword {
                "self" => next.self_energy = parse_switch(keyword, value)?,
                "damp" => {
                    next.damping = DampingVariant::from_keyword(value).ok_or_else(|| {
                        ConfigError::InvalidKeywordValue {
                            keyword: keyword.to_string(),
                            value: value.to_string(),
                        }
                    })?
                }
                _ => return Err(ConfigError::UnknownKeyword(keyword.to_string())),
            }
            iarg += 2;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Parses pair-modify style keyword pairs: `shift yes|no`, `mix <rule>`, `tail yes|no`.
    pub fn apply_modify(&mut self, args: &[&str]) -> Result<(), ConfigError> {
        if args.is_empty() {
            return Err(ConfigError::ArgumentCount {
                command: "pair_modify",
                expected: "at least 2",
                found: 0,
            });
        }

        let mut next = *self;
        for pair in args.chunks(2) {
            let keyword = pair[0];
            let value = pair
                .get(1)
                .ok_or_else(|| ConfigError::MissingKeywordValue(keyword.to_string()))?;
            match keyword {
                "shift" => next.offset = parse_switch(keyword, value)?,
                "tail" => next.tail = parse_switch(keyword, value)?,
                "mix" => {
                    next.mixing = MixingRule::from_keyword(value).ok_or_else(|| {
                        ConfigError::InvalidKeywordValue {
                            keyword: keyword.to_string(),
                            value: value.to_string(),
                        }
                    })?
                }
                _ => return Err(ConfigError::UnknownKeyword(keyword.to_string())),
            }
        }

        *self = next;
        Ok(())
    }

    pub fn from_section(section: &SettingsSection) -> Result<Self, ConfigError> {
        let mut settings = Self::new(section.alpha, section.cut_lj);
        settings.cut_coul = section.cut_coul.unwrap_or(section.cut_lj);
        if let Some(self_energy) = section.self_energy {
            settings.self_energy = self_energy;
        }
        if let Some(damping) = section.damping {
            settings.damping = damping;
        }
        if let Some(shift) = section.shift {
            settings.offset = shift;
        }
        if let Some(mix) = section.mix {
            settings.mixing = mix;
        }
        if let Some(tail) = section.tail {
            settings.tail = tail;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "alpha",
                requirement: "finite and non-negative",
                value: self.alpha,
            });
        }
        for (field, value) in [("cut_lj", self.cut_lj_global), ("cut_coul", self.cut_coul)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange {
                    field,
                    requirement: "finite and positive",
                    value,
                });
            }
        }
        Ok(())
    }
}
