use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Thresholds must be positive and strictly ascending, got {0:?}")]
    InvalidThresholds([f64; 4]),

    #[error("Verify tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("Precision must be at most 17 decimal places, got {0}")]
    InvalidPrecision(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_thresholds() {
        let error = ConfigError::InvalidThresholds([1.0, 3.0, 2.0, 50.0]);
        assert_eq!(
            error.to_string(),
            "Thresholds must be positive and strictly ascending, got [1.0, 3.0, 2.0, 50.0]"
        );
    }

    #[test]
    fn test_config_error_invalid_tolerance() {
        let error = ConfigError::InvalidTolerance(-0.5);
        assert_eq!(
            error.to_string(),
            "Verify tolerance must be positive and finite, got -0.5"
        );
    }

    #[test]
    fn test_config_error_invalid_precision() {
        let error = ConfigError::InvalidPrecision(40);
        assert_eq!(
            error.to_string(),
            "Precision must be at most 17 decimal places, got 40"
        );
    }

    #[test]
    fn test_config_error_read_names_path() {
        let error = ConfigError::Read {
            path: PathBuf::from("/nowhere/deltae.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config /nowhere/deltae.yaml: not found"
        );
    }
}
