//! Error types used by the housekeeper and its probes.
//!
//! This module defines three error enums:
//!
//! - [`HousekeeperError`] — lifecycle and configuration misuse, surfaced to
//!   the embedder at construction or `init` time.
//! - [`ManagerError`] — failures reported by the `ConfigurationManager`
//!   collaborator.
//! - [`ProbeError`] — failures inside one probe activation; always caught
//!   by the scheduler, never propagated to the embedder.
//!
//! All types provide `as_label()` returning a short stable snake_case
//! string for logs and metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors surfaced to the embedder.
///
/// These represent misuse of the housekeeper itself, not collaborator
/// failures. They are fatal to the housekeeper, not to the host.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HousekeeperError {
    /// A timing parameter was zero; all durations must be strictly positive.
    #[error("invalid config: `{name}` must be a strictly positive duration")]
    InvalidDuration {
        /// Name of the offending `Config` field.
        name: &'static str,
    },

    /// `init` was called after `destroy`; a housekeeper is never resurrected.
    #[error("housekeeper already destroyed; init after destroy is not allowed")]
    AlreadyDestroyed,
}

impl HousekeeperError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            HousekeeperError::InvalidDuration { .. } => "invalid_duration",
            HousekeeperError::AlreadyDestroyed => "already_destroyed",
        }
    }
}

/// # Errors reported by the `ConfigurationManager` collaborator.
///
/// From the housekeeper's point of view every variant is transient: the
/// failed operation is retried on a later tick.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ManagerError {
    /// `configure` failed; sessions could not be (re)established.
    #[error("reconfigure failed: {reason}")]
    Configure {
        /// The underlying error message.
        reason: String,
    },

    /// `renew_certs` failed with a certificate-domain error.
    #[error("certificate renewal failed: {reason}")]
    Certificate {
        /// The underlying error message.
        reason: String,
    },
}

impl ManagerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ManagerError::Configure { .. } => "manager_configure_failed",
            ManagerError::Certificate { .. } => "manager_certificate_failed",
        }
    }
}

/// # Errors produced by one probe activation.
///
/// The scheduler catches these, logs them at warn level, publishes a
/// `ProbeFailed` / `ProbeTimedOut` event, and moves on to the next probe.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A collaborator call failed.
    #[error(transparent)]
    Manager(#[from] ManagerError),

    /// The probe exceeded its collaborator-call budget.
    #[error("probe exceeded its {budget:?} budget")]
    Timeout {
        /// The budget that was exceeded (`max(period, 30s)`).
        budget: Duration,
    },
}

impl ProbeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ProbeError::Manager(e) => e.as_label(),
            ProbeError::Timeout { .. } => "probe_timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(
            HousekeeperError::AlreadyDestroyed.as_label(),
            "already_destroyed"
        );
        assert_eq!(
            ManagerError::Configure {
                reason: "boom".into()
            }
            .as_label(),
            "manager_configure_failed"
        );
        let e = ProbeError::from(ManagerError::Certificate {
            reason: "expired".into(),
        });
        assert_eq!(e.as_label(), "manager_certificate_failed");
    }
}
