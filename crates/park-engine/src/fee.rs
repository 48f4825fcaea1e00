//! # Fee Schedule
//!
//! Pure duration → fee computation. Any partial hour is billed as a full
//! hour: a 61-minute stay costs two hours at the configured rate. The
//! hour count is computed with integer ceiling division so no float
//! rounding can shave a billable hour.

use thiserror::Error;

use park_core::{ConfigError, Timestamp, DEFAULT_HOURLY_RATE};

const SECONDS_PER_HOUR: u64 = 3600;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from fee computation.
#[derive(Error, Debug)]
pub enum FeeError {
    /// Exit precedes entry.
    ///
    /// Engine paths clamp the exit timestamp to the entry timestamp
    /// before computing, so this guard fires only for callers that skip
    /// the clamp.
    #[error("invalid interval: exit {exited_at} precedes entry {entered_at}")]
    InvalidInterval {
        /// Entry timestamp.
        entered_at: Timestamp,
        /// Offending exit timestamp.
        exited_at: Timestamp,
    },
}

// ─── Schedule ────────────────────────────────────────────────────────

/// The facility's pricing: a single hourly rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    hourly_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl FeeSchedule {
    /// Create a schedule with the given hourly rate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeRate`] for negative or NaN rates.
    pub fn new(hourly_rate: f64) -> Result<Self, ConfigError> {
        if !(hourly_rate >= 0.0) {
            return Err(ConfigError::NegativeRate { rate: hourly_rate });
        }
        Ok(Self { hourly_rate })
    }

    /// The configured hourly rate.
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// Compute the fee for a stay.
    ///
    /// Zero duration is free; any positive duration bills at least one
    /// hour, and every started hour bills in full.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::InvalidInterval`] if `exited_at` precedes
    /// `entered_at`.
    pub fn compute(&self, entered_at: Timestamp, exited_at: Timestamp) -> Result<f64, FeeError> {
        let seconds = exited_at.epoch_secs() - entered_at.epoch_secs();
        if seconds < 0 {
            return Err(FeeError::InvalidInterval {
                entered_at,
                exited_at,
            });
        }
        let billable_hours = (seconds as u64).div_ceil(SECONDS_PER_HOUR);
        Ok(billable_hours as f64 * self.hourly_rate)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    #[test]
    fn test_new_rejects_negative_rate() {
        assert!(FeeSchedule::new(-0.5).is_err());
        assert!(FeeSchedule::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default_rate() {
        assert_eq!(FeeSchedule::default().hourly_rate(), 2.0);
    }

    #[test]
    fn test_zero_duration_is_free() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.compute(ts(100), ts(100)).unwrap(), 0.0);
    }

    #[test]
    fn test_partial_hour_bills_full_hour() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.compute(ts(0), ts(1)).unwrap(), 2.0);
        assert_eq!(fees.compute(ts(0), ts(1800)).unwrap(), 2.0);
        assert_eq!(fees.compute(ts(0), ts(3600)).unwrap(), 2.0);
    }

    #[test]
    fn test_one_second_past_the_hour_bills_two() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.compute(ts(0), ts(3601)).unwrap(), 4.0);
    }

    #[test]
    fn test_long_stay() {
        let fees = FeeSchedule::new(3.0).unwrap();
        // 25 hours exactly.
        assert_eq!(fees.compute(ts(0), ts(25 * 3600)).unwrap(), 75.0);
        // 25 hours and one minute bills 26.
        assert_eq!(fees.compute(ts(0), ts(25 * 3600 + 60)).unwrap(), 78.0);
    }

    #[test]
    fn test_fee_monotonic_in_duration() {
        let fees = FeeSchedule::default();
        let mut last = 0.0;
        for seconds in [0, 1, 59, 3600, 3601, 7200, 86400] {
            let fee = fees.compute(ts(0), ts(seconds)).unwrap();
            assert!(fee >= last, "fee decreased at {seconds}s");
            last = fee;
        }
    }

    #[test]
    fn test_exit_before_entry_rejected() {
        let fees = FeeSchedule::default();
        assert!(matches!(
            fees.compute(ts(100), ts(99)),
            Err(FeeError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_zero_rate_is_always_free() {
        let fees = FeeSchedule::new(0.0).unwrap();
        assert_eq!(fees.compute(ts(0), ts(86400)).unwrap(), 0.0);
    }
}
