//! # Housekeeping events and their metadata.
//!
//! [`EventKind`] classifies what happened; [`Event`] carries it together
//! with optional metadata (probe name, reason, timeout) attached via
//! builder-style `with_*` methods.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically; use it to restore order when events are buffered.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of housekeeping events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Lifecycle ===
    /// The scheduler worker started (ramp-up begins now).
    SchedulerStarted,

    /// The scheduler worker stopped; no further collaborator calls follow.
    SchedulerStopped,

    // === Gate ===
    /// A tick ran no probes.
    ///
    /// Sets:
    /// - `reason`: `"not_configured"` or `"role_inactive"`
    TickSkipped,

    // === Probe activity ===
    /// A probe decided to trigger `configure`.
    ///
    /// Sets:
    /// - `probe`: probe name
    ReconfigureTriggered,

    /// The cert probe is starting the two-step renewal.
    ///
    /// Sets:
    /// - `probe`: probe name
    CertRenewalTriggered,

    /// A probe activation failed; it will be retried on a later tick.
    ///
    /// Sets:
    /// - `probe`: probe name
    /// - `reason`: failure message
    ProbeFailed,

    /// A probe exceeded its collaborator-call budget.
    ///
    /// Sets:
    /// - `probe`: probe name
    /// - `timeout`: the exceeded budget
    ProbeTimedOut,
}

/// Housekeeping event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the probe, if applicable.
    pub probe: Option<Arc<str>>,
    /// Human-readable reason (errors, skip causes).
    pub reason: Option<Arc<str>>,
    /// Exceeded budget for [`EventKind::ProbeTimedOut`].
    pub timeout: Option<Duration>,
}

impl Event {
    /// Creates an event of the given kind with the current timestamp and
    /// next sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            probe: None,
            reason: None,
            timeout: None,
        }
    }

    /// Attaches the originating probe's name.
    #[inline]
    pub fn with_probe(mut self, probe: impl Into<Arc<str>>) -> Self {
        self.probe = Some(probe.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the exceeded timeout budget.
    #[inline]
    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.timeout = Some(budget);
        self
    }
}
