//! # Token expiry probe.
//!
//! Compares the auth token's expiry against the threshold; when the token
//! is about to expire (or the expiry is unknown) it triggers `configure`,
//! which refreshes the token as a side effect. The probe writes no state
//! of its own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::collab::ConfigurationManager;
use crate::error::ProbeError;
use crate::events::{Bus, Event, EventKind};
use crate::metrics::Metrics;
use crate::probes::probe::{Probe, ProbeKind, within_threshold};

pub(crate) struct TokenExpiryProbe {
    cm: Arc<dyn ConfigurationManager>,
    threshold: Duration,
    bus: Bus,
    metrics: Arc<Metrics>,
}

impl TokenExpiryProbe {
    pub(crate) fn new(
        cm: Arc<dyn ConfigurationManager>,
        threshold: Duration,
        bus: Bus,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            cm,
            threshold,
            bus,
            metrics,
        }
    }
}

#[async_trait]
impl Probe for TokenExpiryProbe {
    fn name(&self) -> &'static str {
        "token-expiry"
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::TokenExpiry
    }

    async fn run(&mut self) -> Result<(), ProbeError> {
        let expiry = self.cm.token_expiration().await;
        if !within_threshold(expiry, self.threshold) {
            return Ok(());
        }

        info!(expiry = ?expiry, "auth token within expiry threshold, reconfiguring");
        self.metrics.reconfigure_triggered();
        self.bus
            .publish(Event::now(EventKind::ReconfigureTriggered).with_probe(self.name()));
        self.cm.configure().await?;
        Ok(())
    }
}
