//! # Error Types — Core Error Hierarchy
//!
//! Defines the error types for foundational type construction and
//! configuration loading. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations, and every variant carries the
//! offending value so the presentation shell can render a useful message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors constructing core domain values.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A vehicle identifier was empty after normalization.
    #[error("vehicle registration must not be empty")]
    EmptyVehicleId,

    /// A timestamp string carried a non-UTC offset.
    #[error("timestamp must use Z suffix (UTC only), got {value:?}")]
    NonUtcTimestamp {
        /// The rejected input.
        value: String,
    },

    /// A timestamp string was not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {value:?}: {detail}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        detail: String,
    },

    /// A Unix epoch value was outside the representable range.
    #[error("epoch seconds out of range: {secs}")]
    EpochOutOfRange {
        /// The rejected epoch value.
        secs: i64,
    },
}

/// Errors in the facility configuration.
///
/// These are fatal at startup: no engine state is built on top of an
/// invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The facility must have at least one space.
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// The hourly rate must be a non-negative number.
    #[error("hourly rate must be non-negative, got {rate}")]
    NegativeRate {
        /// The rejected rate.
        rate: f64,
    },

    /// Reading the configuration file failed.
    #[error("failed to read config at {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Parsing the configuration file failed.
    #[error("failed to parse config at {path}: {source}")]
    Yaml {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vehicle_id_display() {
        let msg = CoreError::EmptyVehicleId.to_string();
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn test_non_utc_display_names_value() {
        let err = CoreError::NonUtcTimestamp {
            value: "2026-01-01T00:00:00+05:00".to_string(),
        };
        assert!(err.to_string().contains("+05:00"));
    }

    #[test]
    fn test_negative_rate_display_names_rate() {
        let err = ConfigError::NegativeRate { rate: -1.5 };
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_io_display_names_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/park.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/park.yaml"));
        assert!(msg.contains("denied"));
    }
}
