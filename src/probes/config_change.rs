//! # Config-change probe.
//!
//! Fingerprints the watched store keys on every activation and triggers a
//! reconfigure when the fingerprint moves. The stored fingerprint advances
//! only after `configure` succeeds, so a failed reconfigure is retried on
//! the next tick with the same change still pending.
//!
//! ## Fingerprint state machine
//! ```text
//! unset ── all keys absent ──► unset            (nothing observed yet)
//! unset ── non-empty read ───► configure ok ──► value v
//! v ────── equal read ───────► v                (self-loop)
//! v ────── changed read ─────► configure ok ──► value v'
//! any ───── configure fails ──► unchanged       (retry next tick)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::collab::{ConfigStore, ConfigurationManager};
use crate::error::ProbeError;
use crate::events::{Bus, Event, EventKind};
use crate::metrics::Metrics;
use crate::probes::fingerprint::{Fingerprint, Observation};
use crate::probes::probe::{Probe, ProbeKind};

pub(crate) struct ConfigChangeProbe {
    cm: Arc<dyn ConfigurationManager>,
    store: Arc<dyn ConfigStore>,
    bus: Bus,
    metrics: Arc<Metrics>,
    /// Fingerprint of the last observation that was successfully applied.
    /// Owned by the scheduler worker; never read from elsewhere.
    last: Option<Fingerprint>,
}

impl ConfigChangeProbe {
    pub(crate) fn new(
        cm: Arc<dyn ConfigurationManager>,
        store: Arc<dyn ConfigStore>,
        bus: Bus,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            cm,
            store,
            bus,
            metrics,
            last: None,
        }
    }
}

#[async_trait]
impl Probe for ConfigChangeProbe {
    fn name(&self) -> &'static str {
        "config-change"
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::ConfigChange
    }

    async fn run(&mut self) -> Result<(), ProbeError> {
        let observation = Observation::read(self.store.as_ref()).await;
        let next = observation.fingerprint();

        match &self.last {
            // Nothing observed yet and nothing there: stay unset.
            None if observation.is_empty() => return Ok(()),
            Some(prev) if *prev == next => return Ok(()),
            _ => {}
        }

        info!(fingerprint = ?next, "watched config keys changed, reconfiguring");
        self.metrics.reconfigure_triggered();
        self.bus
            .publish(Event::now(EventKind::ReconfigureTriggered).with_probe(self.name()));
        self.cm.configure().await?;

        // Only a successful reconfigure advances the fingerprint.
        self.last = Some(next);
        Ok(())
    }
}
