use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use tracing::{info, warn};

pub const CONFIG_PATH_VAR: &str = "APCALC_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "apcalc.toml";

/// Limits and knobs for the built-in capability sets.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Largest integer exponent evaluated exactly by `pow`, `scale` and the
    /// decimal rounding functions
    #[serde(default = "default_max_exact_exponent")]
    pub max_exact_exponent: u64,
    /// Largest exact `factorial` or `binomial` argument
    #[serde(default = "default_max_factorial")]
    pub max_factorial: u64,
    /// Largest `bernoulli` index. The exact table costs O(n²) big-rational
    /// steps, so this stays far below `max_factorial`.
    #[serde(default = "default_max_bernoulli")]
    pub max_bernoulli: u64,
    /// Iteration cap for series expansions
    #[serde(default = "default_series_max_terms")]
    pub series_max_terms: usize,
    /// Seed for `random` and `randomGaussian`; entropy-seeded when absent
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_max_exact_exponent() -> u64 {
    100_000
}

fn default_max_factorial() -> u64 {
    10_000
}

fn default_max_bernoulli() -> u64 {
    500
}

fn default_series_max_terms() -> usize {
    10_000
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_exact_exponent: default_max_exact_exponent(),
            max_factorial: default_max_factorial(),
            max_bernoulli: default_max_bernoulli(),
            series_max_terms: default_series_max_terms(),
            random_seed: None,
        }
    }
}

impl CalculatorConfig {
    /// Load the configuration file named by `APCALC_CONFIG_PATH` (default
    /// `apcalc.toml`), then apply environment overrides.
    pub fn load() -> CalcResult<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Like [`CalculatorConfig::load`] with an explicit file path. A missing
    /// file falls back to the defaults; any other read failure is an error.
    pub fn load_from(config_path: &str) -> CalcResult<Self> {
        let config = Self::read_file(config_path)?.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn read_file(config_path: &str) -> CalcResult<Self> {
        match fs::read_to_string(config_path) {
            Ok(contents) => {
                info!(path = %config_path, "Loaded calculator configuration");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    config_path
                );
                Ok(Self::default())
            }
            Err(e) => Err(CalcError::Configuration {
                message: format!("Failed to read '{config_path}': {e}"),
            }),
        }
    }

    pub fn from_toml_str(contents: &str) -> CalcResult<Self> {
        toml::from_str(contents)
            .map_err(|e| CalcError::Configuration { message: e.to_string() })
    }

    /// Apply `APCALC_*` environment variables on top of this configuration.
    /// Unparseable values are ignored with a warning.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
            let raw = raw?;
            let value = raw.parse().ok();
            if value.is_none() {
                warn!(key, value = %raw, "Ignoring unparseable configuration override");
            }
            value
        }

        if let Some(v) = parsed("APCALC_MAX_EXACT_EXPONENT", lookup("APCALC_MAX_EXACT_EXPONENT")) {
            self.max_exact_exponent = v;
        }
        if let Some(v) = parsed("APCALC_MAX_FACTORIAL", lookup("APCALC_MAX_FACTORIAL")) {
            self.max_factorial = v;
        }
        if let Some(v) = parsed("APCALC_MAX_BERNOULLI", lookup("APCALC_MAX_BERNOULLI")) {
            self.max_bernoulli = v;
        }
        if let Some(v) = parsed("APCALC_SERIES_MAX_TERMS", lookup("APCALC_SERIES_MAX_TERMS")) {
            self.series_max_terms = v;
        }
        if let Some(v) = parsed("APCALC_RANDOM_SEED", lookup("APCALC_RANDOM_SEED")) {
            self.random_seed = Some(v);
        }
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        let zero_limit = [
            ("max_exact_exponent", self.max_exact_exponent == 0),
            ("max_factorial", self.max_factorial == 0),
            ("max_bernoulli", self.max_bernoulli == 0),
            ("series_max_terms", self.series_max_terms == 0),
        ]
        .into_iter()
        .find(|(_, is_zero)| *is_zero);

        match zero_limit {
            Some((setting, _)) => Err(CalcError::Configuration {
                message: format!("{setting} must be greater than zero"),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config = CalculatorConfig::from_toml_str("max_factorial = 50\n").unwrap();
        assert_eq!(config.max_factorial, 50);
        assert_eq!(config.max_exact_exponent, 100_000);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn malformed_toml_is_a_configuration_error() {
        let error = CalculatorConfig::from_toml_str("max_factorial = \"lots\"").unwrap_err();
        assert_eq!(error.category(), "configuration");
    }

    #[test]
    fn overrides_replace_parsed_values_and_skip_garbage() {
        let env: HashMap<&str, &str> = [
            ("APCALC_MAX_FACTORIAL", "12"),
            ("APCALC_RANDOM_SEED", "7"),
            ("APCALC_SERIES_MAX_TERMS", "many"),
        ]
        .into_iter()
        .collect();
        let config = CalculatorConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.max_factorial, 12);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.series_max_terms, 10_000);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let config = CalculatorConfig { series_max_terms: 0, ..CalculatorConfig::default() };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("series_max_terms"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CalculatorConfig::read_file("/nonexistent/apcalc.toml").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn unreadable_file_is_a_configuration_error() {
        let directory = std::env::temp_dir();
        let error = CalculatorConfig::read_file(&directory.to_string_lossy()).unwrap_err();
        assert_eq!(error.category(), "configuration");
        assert!(error.to_string().contains("Failed to read"), "{error}");
    }

    #[test]
    fn bernoulli_limit_is_separate_and_overridable() {
        let config = CalculatorConfig::from_toml_str("max_factorial = 50\n").unwrap();
        assert_eq!(config.max_bernoulli, 500);

        let config = CalculatorConfig::default()
            .with_overrides(|key| (key == "APCALC_MAX_BERNOULLI").then(|| "40".to_string()));
        assert_eq!(config.max_bernoulli, 40);
        assert_eq!(config.max_factorial, 10_000);

        let config = CalculatorConfig { max_bernoulli: 0, ..CalculatorConfig::default() };
        assert!(config.validate().unwrap_err().to_string().contains("max_bernoulli"));
    }
}
