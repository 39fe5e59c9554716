//! # Housekeeper timing configuration.
//!
//! [`Config`] carries the three durations that drive the scheduler:
//! the start-up ramp-up delay, the tick period, and the expiry threshold
//! used by the token and certificate probes.
//!
//! All three must be strictly positive; [`Config::validate`] rejects
//! anything else at construction time. Tests shrink them to milliseconds.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use cloudkeeper::Config;
//!
//! let mut cfg = Config::default();
//! cfg.period = Duration::from_secs(10);
//!
//! assert!(cfg.validate().is_ok());
//! ```

use std::time::Duration;

use crate::error::HousekeeperError;

/// Timing parameters for the housekeeping scheduler.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Delay before the first tick. During `[init, init + initial_delay)`
    /// no probe runs, giving collaborators time to finish bootstrapping.
    pub initial_delay: Duration,
    /// Separation between consecutive ticks. An overrunning tick delays
    /// the next one; ticks never overlap.
    pub period: Duration,
    /// A token or certificate whose expiry is within this threshold of
    /// now (or unknown) is renewed on the next active tick.
    pub expiry_threshold: Duration,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `initial_delay = 60s`
    /// - `period = 30s`
    /// - `expiry_threshold = 1h`
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(60),
            period: Duration::from_secs(30),
            expiry_threshold: Duration::from_secs(60 * 60),
        }
    }
}

impl Config {
    /// Checks that every duration is strictly positive.
    ///
    /// Returns [`HousekeeperError::InvalidDuration`] naming the offending
    /// field otherwise.
    pub fn validate(&self) -> Result<(), HousekeeperError> {
        for (name, value) in [
            ("initial_delay", self.initial_delay),
            ("period", self.period),
            ("expiry_threshold", self.expiry_threshold),
        ] {
            if value.is_zero() {
                return Err(HousekeeperError::InvalidDuration { name });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_period_rejected() {
        let cfg = Config {
            period: Duration::ZERO,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            HousekeeperError::InvalidDuration { name: "period" }
        ));
    }

    #[test]
    fn zero_initial_delay_rejected() {
        let cfg = Config {
            initial_delay: Duration::ZERO,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_threshold_rejected() {
        let cfg = Config {
            expiry_threshold: Duration::ZERO,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
