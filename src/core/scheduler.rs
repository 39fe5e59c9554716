//! # Scheduler: the single periodic worker.
//!
//! Runs on one spawned task. After the ramp-up delay it evaluates the
//! probe set once per period, strictly sequentially and in declared order:
//! config-change, token, cert.
//!
//! ```text
//! run(token):
//!   ├─► sleep(initial_delay)            (cancellable)
//!   └─► loop {
//!         interval.tick()               (cancellable; Delay on overrun)
//!         tick():
//!           status != Configured  → skip (debug)
//!           role inactive         → skip (debug)
//!           for probe in [config-change, token, cert] if active(role):
//!             timeout(max(P, 30s), probe.run())
//!               Err → warn + ProbeFailed/ProbeTimedOut event, continue
//!       }
//! ```
//!
//! ## Rules
//! - Ticks never overlap: an overrunning tick delays the next one.
//! - Cancellation is honored at **safe points** only (ramp-up sleep and
//!   the wait for the next tick); destroy never interrupts a tick in
//!   flight, so after `destroy()` returns no collaborator call is in
//!   progress. The per-probe budget is the one exception: a collaborator
//!   call that outlives `max(P, 30s)` is dropped where it stands.
//! - Probe failures are swallowed: they never stop the scheduler and
//!   never skip the remaining probes of the tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::collab::{ConfigStatus, ConfigurationManager, RuntimeInfo};
use crate::config::Config;
use crate::core::gate;
use crate::error::ProbeError;
use crate::events::{Bus, Event, EventKind};
use crate::probes::Probe;

/// Advisory floor for the per-probe collaborator-call budget.
const MIN_PROBE_BUDGET: Duration = Duration::from_secs(30);

pub(crate) struct Scheduler {
    cfg: Config,
    cm: Arc<dyn ConfigurationManager>,
    runtime: Arc<dyn RuntimeInfo>,
    probes: Vec<Box<dyn Probe>>,
    bus: Bus,
}

impl Scheduler {
    /// Creates a scheduler over an ordered probe list. The order given
    /// here is the order probes run within each tick.
    pub(crate) fn new(
        cfg: Config,
        cm: Arc<dyn ConfigurationManager>,
        runtime: Arc<dyn RuntimeInfo>,
        probes: Vec<Box<dyn Probe>>,
        bus: Bus,
    ) -> Self {
        Self {
            cfg,
            cm,
            runtime,
            probes,
            bus,
        }
    }

    /// Runs until `token` is cancelled. The first tick fires no earlier
    /// than `initial_delay` after this call; subsequent ticks are
    /// separated by `period`.
    pub(crate) async fn run(mut self, token: CancellationToken) {
        info!(
            initial_delay = ?self.cfg.initial_delay,
            period = ?self.cfg.period,
            "housekeeping scheduler started"
        );
        self.bus.publish(Event::now(EventKind::SchedulerStarted));

        // Ramp-up: collaborators may still be bootstrapping.
        let ramp_up = time::sleep(self.cfg.initial_delay);
        tokio::pin!(ramp_up);
        tokio::select! {
            _ = &mut ramp_up => {}
            _ = token.cancelled() => {
                self.stopped();
                return;
            }
        }

        let mut ticker = time::interval(self.cfg.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = token.cancelled() => break,
            }
            // The tick body is not raced against cancellation: destroy
            // waits for an in-flight tick. Only the per-probe budget in
            // tick() can cut a collaborator call short.
            self.tick().await;
        }
        self.stopped();
    }

    /// One pass through the active probe set.
    async fn tick(&mut self) {
        if self.cm.status() != ConfigStatus::Configured {
            debug!("skipping tick: plugin not bootstrapped yet");
            self.bus
                .publish(Event::now(EventKind::TickSkipped).with_reason("not_configured"));
            return;
        }

        let role = self.runtime.container();
        if !gate::any_active(role) {
            debug!(?role, "skipping tick: no probe active for this role");
            self.bus
                .publish(Event::now(EventKind::TickSkipped).with_reason("role_inactive"));
            return;
        }

        let budget = self.cfg.period.max(MIN_PROBE_BUDGET);
        for probe in &mut self.probes {
            if !gate::active(role, probe.kind()) {
                continue;
            }
            let name = probe.name();
            let res = match time::timeout(budget, probe.run()).await {
                Ok(res) => res,
                Err(_elapsed) => Err(ProbeError::Timeout { budget }),
            };
            if let Err(e) = res {
                // Liveness over correctness of a single tick: log, report,
                // and keep going. The next tick retries.
                warn!(probe = name, label = e.as_label(), error = %e, "probe failed");
                let ev = match &e {
                    ProbeError::Timeout { budget } => Event::now(EventKind::ProbeTimedOut)
                        .with_probe(name)
                        .with_timeout(*budget),
                    _ => Event::now(EventKind::ProbeFailed)
                        .with_probe(name)
                        .with_reason(e.to_string()),
                };
                self.bus.publish(ev);
            }
        }
    }

    fn stopped(&self) {
        info!("housekeeping scheduler stopped");
        self.bus.publish(Event::now(EventKind::SchedulerStopped));
    }
}
