//! # Facility Configuration
//!
//! The configuration surface of the facility: total capacity and the
//! hourly rate. Loaded from a YAML file, with every field optional and
//! defaulted, then validated once before any engine state is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of spaces when no configuration is supplied.
pub const DEFAULT_CAPACITY: u32 = 5;

/// Default hourly rate in currency units.
pub const DEFAULT_HOURLY_RATE: f64 = 2.0;

/// Facility configuration.
///
/// Recognized options: `capacity` (total spaces) and `hourly_rate`
/// (currency units per hour, partial hours billed as full hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Total number of parking spaces, numbered `1..=capacity`.
    #[serde(default = "default_capacity")]
    pub capacity: u32,

    /// Hourly parking rate in currency units.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl ParkConfig {
    /// Load configuration from a YAML file.
    ///
    /// Missing fields take their defaults. The result is *not* validated
    /// here — callers apply overrides first and then run
    /// [`ParkConfig::validate()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Yaml`] with the file
    /// path on read or parse failure.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is zero, or
    /// [`ConfigError::NegativeRate`] if `hourly_rate` is negative or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.hourly_rate >= 0.0) {
            return Err(ConfigError::NegativeRate {
                rate: self.hourly_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParkConfig::default();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.hourly_rate, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = ParkConfig {
            capacity: 0,
            ..ParkConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCapacity)
        ));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let config = ParkConfig {
            hourly_rate: -2.0,
            ..ParkConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeRate { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_rate() {
        let config = ParkConfig {
            hourly_rate: f64::NAN,
            ..ParkConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity: 12").unwrap();

        let config = ParkConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 12);
        assert_eq!(config.hourly_rate, 2.0);
    }

    #[test]
    fn test_load_full_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity: 80").unwrap();
        writeln!(file, "hourly_rate: 3.5").unwrap();

        let config = ParkConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 80);
        assert_eq!(config.hourly_rate, 3.5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ParkConfig::load(Path::new("/nonexistent/park.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_yaml_is_yaml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity: [not a number").unwrap();

        let err = ParkConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
