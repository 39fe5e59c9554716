//! Lightweight counters for housekeeping activity.
//!
//! [`Metrics`] is shared between the facade and the scheduler worker via
//! `Arc`; probes bump the counters with relaxed atomics and embedders read
//! a consistent-enough [`MetricsSnapshot`] at any time.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by the probes.
#[derive(Debug, Default)]
pub(crate) struct Metrics {
    renewals_attempted: AtomicU64,
    renewals_failed: AtomicU64,
    reconfigures_triggered: AtomicU64,
}

impl Metrics {
    /// A certificate renewal was triggered.
    pub(crate) fn renewal_attempted(&self) {
        self.renewals_attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// A triggered certificate renewal did not complete (either step).
    pub(crate) fn renewal_failed(&self) {
        self.renewals_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// A probe decided to call `configure`.
    pub(crate) fn reconfigure_triggered(&self) {
        self.reconfigures_triggered.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of all counters.
    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            renewals_attempted: self.renewals_attempted.load(Ordering::Relaxed),
            renewals_failed: self.renewals_failed.load(Ordering::Relaxed),
            reconfigures_triggered: self.reconfigures_triggered.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the housekeeping counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Certificate renewals triggered by the cert probe.
    pub renewals_attempted: u64,
    /// Triggered renewals that failed in either step.
    pub renewals_failed: u64,
    /// `configure` invocations triggered by any probe.
    pub reconfigures_triggered: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let m = Metrics::default();
        m.renewal_attempted();
        m.renewal_attempted();
        m.renewal_failed();
        m.reconfigure_triggered();

        let snap = m.snapshot();
        assert_eq!(snap.renewals_attempted, 2);
        assert_eq!(snap.renewals_failed, 1);
        assert_eq!(snap.reconfigures_triggered, 1);
    }
}
