use super::damping::DampingVariant;
use super::mixing::MixingRule;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Illegal {command} command: expected {expected} arguments, got {found}")]
    ArgumentCount {
        command: &'static str,
        expected: &'static str,
        found: usize,
    },
    #[error("Invalid numeric value '{value}' for {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Keyword '{0}' requires a value")]
    MissingKeywordValue(String),
    #[error("Unknown keyword '{0}'")]
    UnknownKeyword(String),
    #[error("Invalid value '{value}' for keyword '{keyword}'")]
    InvalidKeywordValue { keyword: String, value: String },
    #[error("Parameter {field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("Type range '{range}' is invalid for {ntypes} atom types")]
    TypeRangeOutOfBounds { range: String, ntypes: usize },
    #[error("Type ranges '{i}' and '{j}' select no type pairs")]
    EmptyTypeRange { i: String, j: String },
    #[error("Pair coefficients for types {0} and {1} are not set and cannot be mixed")]
    MissingCoefficients(usize, usize),
    #[error("Type index {index} is outside 1..={ntypes}")]
    TypeIndex { index: usize, ntypes: usize },
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Parses a floating point argument, naming the field on failure.
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, ConfigError> {
    value.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses a `yes`/`no` keyword value.
pub fn parse_switch(keyword: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ConfigError::InvalidKeywordValue {
            keyword: keyword.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Resolves a type-range token against the number of declared types.
///
/// Accepted forms are `n`, `*`, `*n`, `n*` and `m*n`. A range whose lower bound exceeds
/// its upper bound is returned as-is and simply selects nothing.
pub fn parse_type_range(token: &str, ntypes: usize) -> Result<RangeInclusive<usize>, ConfigError> {
    let invalid = || ConfigError::TypeRangeOutOfBounds {
        range: token.to_string(),
        ntypes,
    };
    let parse_bound = |s: &str| s.parse::<usize>().map_err(|_| invalid());

    let (lo, hi) = match token.split_once('*') {
        None => {
            let n = parse_bound(token)?;
            (n, n)
        }
        Some(("", "")) => (1, ntypes),
        Some(("", hi)) => (1, parse_bound(hi)?),
        Some((lo, "")) => (parse_bound(lo)?, ntypes),
        Some((lo, hi)) => (parse_bound(lo)?, parse_bound(hi)?),
    };

    if lo < 1 || hi > ntypes {
        return Err(invalid());
    }
    Ok(lo..=hi)
}

/// Global section of a force-field file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SettingsSection {
    #[serde(default)]
    pub alpha: f64,
    pub cut_lj: f64,
    pub cut_coul: Option<f64>,
    pub self_energy: Option<bool>,
    pub damping: Option<DampingVariant>,
    pub shift: Option<bool>,
    pub mix: Option<MixingRule>,
    pub tail: Option<bool>,
}

/// One `[[coeff]]` entry of a force-field file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CoeffSection {
    pub i: String,
    pub j: String,
    pub epsilon: f64,
    pub sigma: f64,
    pub cut_lj: Option<f64>,
}

/// TOML description of a complete pair style: global settings plus per-type coefficients.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ForceFieldFile {
    pub settings: SettingsSection,
    #[serde(default)]
    pub coeff: Vec<CoeffSection>,
}

impl ForceFieldFile {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_type_range_accepts_single_index() {
        assert_eq!(parse_type_range("2", 3).unwrap(), 2..=2);
    }

    #[test]
    fn parse_type_range_expands_wildcards() {
        assert_eq!(parse_type_range("*", 4).unwrap(), 1..=4);
        assert_eq!(parse_type_range("*2", 4).unwrap(), 1..=2);
        assert_eq!(parse_type_range("3*", 4).unwrap(), 3..=4);
        assert_eq!(parse_type_range("2*3", 4).unwrap(), 2..=3);
    }

    #[test]
    fn parse_type_range_rejects_out_of_bounds_indices() {
        assert!(matches!(
            parse_type_range("0", 3),
            Err(ConfigError::TypeRangeOutOfBounds { .. })
        ));
        assert!(matches!(
            parse_type_range("2*5", 3),
            Err(ConfigError::TypeRangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn parse_type_range_rejects_garbage() {
        assert!(parse_type_range("a", 3).is_err());
        assert!(parse_type_range("1*x", 3).is_err());
        assert!(parse_type_range("", 3).is_err());
    }

    #[test]
    fn parse_type_range_allows_reversed_bounds_as_empty_range() {
        let range = parse_type_range("3*2", 3).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn parse_number_reports_field_name() {
        let err = parse_number("alpha", "abc").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                field: "alpha",
                value: "abc".to_string()
            }
        );
        assert_eq!(parse_number("alpha", "0.25").unwrap(), 0.25);
    }

    #[test]
    fn parse_switch_accepts_only_yes_and_no() {
        assert_eq!(parse_switch("self", "yes"), Ok(true));
        assert_eq!(parse_switch("self", "no"), Ok(false));
        assert!(matches!(
            parse_switch("self", "true"),
            Err(ConfigError::InvalidKeywordValue { .. })
        ));
    }

    #[test]
    fn force_field_file_parses_full_document() {
        let ff = ForceFieldFile::parse(
            r#"
            [settings]
            alpha = 0.2
            cut-lj = 10.0
            cut-coul = 12.0
            self-energy = false
            damping = "gauss"
            shift = true
            mix = "geometric"
            tail = true

            [[coeff]]
            i = "1"
            j = "1"
            epsilon = 0.1
            sigma = 3.2

            [[coeff]]
            i = "2"
            j = "2*3"
            epsilon = 0.2
            sigma = 2.8
            cut-lj = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(ff.settings.alpha, 0.2);
        assert_eq!(ff.settings.cut_coul, Some(12.0));
        assert_eq!(ff.settings.self_energy, Some(false));
        assert_eq!(ff.settings.damping, Some(DampingVariant::Gauss));
        assert_eq!(ff.settings.mix, Some(MixingRule::Geometric));
        assert_eq!(ff.coeff.len(), 2);
        assert_eq!(ff.coeff[1].j, "2*3");
        assert_eq!(ff.coeff[1].cut_lj, Some(8.0));
        assert_eq!(ff.coeff[0].cut_lj, None);
    }

    #[test]
    fn force_field_file_applies_defaults_for_optional_fields() {
        let ff = ForceFieldFile::parse("[settings]\ncut-lj = 2.5\n").unwrap();
        assert_eq!(ff.settings.alpha, 0.0);
        assert_eq!(ff.settings.damping, None);
        assert!(ff.coeff.is_empty());
    }

    #[test]
    fn force_field_file_rejects_unknown_damping_variant() {
        let result = ForceFieldFile::parse("[settings]\ncut-lj = 2.5\ndamping = \"ewald\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn force_field_file_rejects_unknown_keys() {
        let result = ForceFieldFile::parse("[settings]\ncut-lj = 2.5\ncutoff = 3.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ForceFieldFile::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not toml").unwrap();
        let result = ForceFieldFile::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_succeeds_with_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ff.toml");
        fs::write(
            &path,
            "[settings]\ncut-lj = 2.5\n[[coeff]]\ni = \"*\"\nj = \"*\"\nepsilon = 1.0\nsigma = 1.0\n",
        )
        .unwrap();
        let ff = ForceFieldFile::load(&path).unwrap();
        assert_eq!(ff.coeff.len(), 1);
        assert_eq!(ff.settings.cut_lj, 2.5);
    }
}
