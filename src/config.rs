use crate::error::ConfigError;
use crate::report::Perception;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no `--config` flag is given
pub const CONFIG_ENV: &str = "DELTAE_CONFIG";

/// Largest accepted `precision`; an f64 carries at most 17 significant digits
pub const MAX_PRECISION: usize = 17;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// ΔE00 boundaries between perception categories
    pub thresholds: Thresholds,

    /// Decimal places in text output
    pub precision: usize,

    /// Maximum absolute error allowed per reference pair in `verify`
    pub verify_tolerance: f64,
}

/// Upper bounds (exclusive) of the first four perception categories.
///
/// Anything at or above `distinct` is [`Perception::Opposite`].
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub imperceptible: f64,
    pub close_observation: f64,
    pub at_a_glance: f64,
    pub distinct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            imperceptible: 1.0,
            close_observation: 2.0,
            at_a_glance: 10.0,
            distinct: 50.0,
        }
    }
}

impl Thresholds {
    fn as_array(&self) -> [f64; 4] {
        [
            self.imperceptible,
            self.close_observation,
            self.at_a_glance,
            self.distinct,
        ]
    }

    /// Place a ΔE00 value into its perception category
    pub fn classify(&self, delta_e: f64) -> Perception {
        if delta_e < self.imperceptible {
            Perception::Imperceptible
        } else if delta_e < self.close_observation {
            Perception::CloseObservation
        } else if delta_e < self.at_a_glance {
            Perception::AtAGlance
        } else if delta_e < self.distinct {
            Perception::Distinct
        } else {
            Perception::Opposite
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let values = self.as_array();
        let ascending = values.windows(2).all(|pair| pair[0] < pair[1]);
        let positive = values.iter().all(|v| v.is_finite() && *v > 0.0);
        if ascending && positive {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds(values))
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            precision: 4,
            verify_tolerance: 1e-4,
        }
    }
}

impl AppConfig {
    /// Pick the config file: explicit flag first, then `DELTAE_CONFIG`.
    pub fn resolve_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        Self::choose_path(cli_path, std::env::var(CONFIG_ENV).ok())
    }

    /// An empty environment value counts as unset.
    fn choose_path(cli_path: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
        cli_path.or_else(|| {
            env_value
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A named file that cannot be read, parsed or validated is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;

        tracing::info!(
            path = %path.display(),
            precision = config.precision,
            tolerance = config.verify_tolerance,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML content. `path` is only used in errors.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if !(self.verify_tolerance.is_finite() && self.verify_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.verify_tolerance));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
