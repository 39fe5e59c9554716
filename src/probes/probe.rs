//! # Probe abstraction.
//!
//! A probe is one housekeeping check, run at most once per tick by the
//! scheduler. Probes are invoked strictly sequentially in declared order
//! and must not assume anything about wall-clock spacing between
//! activations.

use std::time::{Duration, SystemTime};

use async_trait::async_trait;

use crate::error::ProbeError;

/// Which housekeeping concern a probe covers; the role gate filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeKind {
    /// Watched-key fingerprint comparison.
    ConfigChange,
    /// Auth token expiry.
    TokenExpiry,
    /// TLS client certificate expiry.
    CertExpiry,
}

impl ProbeKind {
    /// Every probe kind, in tick execution order.
    pub(crate) const ALL: [ProbeKind; 3] = [
        ProbeKind::ConfigChange,
        ProbeKind::TokenExpiry,
        ProbeKind::CertExpiry,
    ];
}

/// # One housekeeping check.
///
/// `run` takes `&mut self` because the config-change probe mutates its
/// stored fingerprint; the scheduler worker is the only caller, so no
/// further synchronization is needed.
#[async_trait]
pub(crate) trait Probe: Send {
    /// Stable name for logs and events.
    fn name(&self) -> &'static str;

    /// The concern this probe covers, used by the role gate.
    fn kind(&self) -> ProbeKind;

    /// Runs one activation: observe, decide, and trigger collaborator
    /// operations if due. Errors are swallowed by the scheduler.
    async fn run(&mut self) -> Result<(), ProbeError>;
}

/// Returns `true` when `expiry` is absent, already past, or within
/// `threshold` of now. Absent expiry data is treated as expired.
pub(crate) fn within_threshold(expiry: Option<SystemTime>, threshold: Duration) -> bool {
    match expiry {
        None => true,
        Some(at) => match at.duration_since(SystemTime::now()) {
            Ok(remaining) => remaining <= threshold,
            // `at` is in the past.
            Err(_) => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Duration = Duration::from_secs(60);

    #[test]
    fn absent_expiry_is_expired() {
        assert!(within_threshold(None, THRESHOLD));
    }

    #[test]
    fn past_expiry_is_expired() {
        let past = SystemTime::now() - Duration::from_secs(10);
        assert!(within_threshold(Some(past), THRESHOLD));
    }

    #[test]
    fn expiry_inside_threshold_triggers() {
        let soon = SystemTime::now() + Duration::from_secs(30);
        assert!(within_threshold(Some(soon), THRESHOLD));
    }

    #[test]
    fn distant_expiry_does_not_trigger() {
        let later = SystemTime::now() + Duration::from_secs(3600);
        assert!(!within_threshold(Some(later), THRESHOLD));
    }
}
