//! # Certificate expiry probe.
//!
//! Compares the TLS client certificate's expiry against the threshold;
//! when it is about to expire the probe runs the two-step renewal:
//!
//! 1. `renew_certs` — issue and persist a new keypair/certificate;
//! 2. `configure` — re-establish sessions with the new material.
//!
//! The ordering is strict: `configure` is not called unless `renew_certs`
//! returned successfully. If `configure` fails after a successful renewal
//! there is no rollback; the expiry is still close on the next tick, so
//! the retry happens naturally.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::collab::ConfigurationManager;
use crate::error::ProbeError;
use crate::events::{Bus, Event, EventKind};
use crate::metrics::Metrics;
use crate::probes::probe::{Probe, ProbeKind, within_threshold};

pub(crate) struct CertExpiryProbe {
    cm: Arc<dyn ConfigurationManager>,
    threshold: Duration,
    bus: Bus,
    metrics: Arc<Metrics>,
}

impl CertExpiryProbe {
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
impl Probe for CertExpiryProbe {
    fn name(&self) -> &'static str {
        "cert-expiry"
    }

    fn kind(&self) -> ProbeKind {
        ProbeKind::CertExpiry
    }

    async fn run(&mut self) -> Result<(), ProbeError> {
        let expiry = self.cm.cert_expiration().await;
        if !within_threshold(expiry, self.threshold) {
            return Ok(());
        }

        info!(expiry = ?expiry, "client certificate within expiry threshold, renewing");
        self.metrics.renewal_attempted();
        self.bus
            .publish(Event::now(EventKind::CertRenewalTriggered).with_probe(self.name()));

        if let Err(e) = self.cm.renew_certs().await {
            self.metrics.renewal_failed();
            return Err(e.into());
        }

        self.metrics.reconfigure_triggered();
        self.bus
            .publish(Event::now(EventKind::ReconfigureTriggered).with_probe(self.name()));
        if let Err(e) = self.cm.configure().await {
            self.metrics.renewal_failed();
            return Err(e.into());
        }
        Ok(())
    }
}
