//! # Housekeeper: facade and lifecycle.
//!
//! Composes the gate, the probes, and the scheduler; exposes `init` /
//! `destroy` to the embedder. At most one housekeeper should run per host
//! process (two against the same collaborators would double-renew); the
//! host is responsible for not constructing more than one.
//!
//! ## Lifecycle
//! ```text
//! Created ── init ──► Running ── destroy ──► Stopped
//!    │                   │  ▲                   │
//!    │                   └──┘ (init: no-op)     ├─ destroy: no-op
//!    └────── destroy ───────────────────────────┘
//!
//! init after Stopped → HousekeeperError::AlreadyDestroyed
//! ```
//!
//! `destroy` cancels the worker at its next safe point, waits for any
//! in-flight tick to finish, and returns only once the worker is
//! quiescent. After it returns, no further collaborator call is made.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::collab::{ConfigStore, ConfigurationManager, RuntimeInfo};
use crate::config::Config;
use crate::core::scheduler::Scheduler;
use crate::error::HousekeeperError;
use crate::events::{Bus, Event};
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::probes::{CertExpiryProbe, ConfigChangeProbe, Probe, TokenExpiryProbe};

const BUS_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Running,
    Stopped,
}

struct Worker {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

struct State {
    phase: Phase,
    worker: Option<Worker>,
}

/// Housekeeping supervisor for a cloud-plugin connection.
///
/// See the [crate docs](crate) for the overall architecture and an
/// end-to-end example.
pub struct Housekeeper {
    cfg: Config,
    cm: Arc<dyn ConfigurationManager>,
    store: Arc<dyn ConfigStore>,
    runtime: Arc<dyn RuntimeInfo>,
    bus: Bus,
    metrics: Arc<Metrics>,
    state: Mutex<State>,
}

impl Housekeeper {
    /// Creates a housekeeper over the three collaborators.
    ///
    /// Fails with [`HousekeeperError::InvalidDuration`] when any of the
    /// configured durations is zero. Nothing runs until [`init`](Self::init).
    pub fn new(
        cm: Arc<dyn ConfigurationManager>,
        store: Arc<dyn ConfigStore>,
        runtime: Arc<dyn RuntimeInfo>,
        cfg: Config,
    ) -> Result<Self, HousekeeperError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            cm,
            store,
            runtime,
            bus: Bus::new(BUS_CAPACITY),
            metrics: Arc::new(Metrics::default()),
            state: Mutex::new(State {
                phase: Phase::Created,
                worker: None,
            }),
        })
    }

    /// Starts the scheduler worker.
    ///
    /// Must be called from within a tokio runtime. The first tick fires no
    /// earlier than `initial_delay` after this call. Idempotent while
    /// running; calling it after [`destroy`](Self::destroy) is an error.
    pub fn init(&self) -> Result<(), HousekeeperError> {
        let mut state = self.state.lock().expect("housekeeper state poisoned");
        match state.phase {
            Phase::Running => return Ok(()),
            Phase::Stopped => return Err(HousekeeperError::AlreadyDestroyed),
            Phase::Created => {}
        }

        // Declared order = execution order within a tick.
        let probes: Vec<Box<dyn Probe>> = vec![
            Box::new(ConfigChangeProbe::new(
                Arc::clone(&self.cm),
                Arc::clone(&self.store),
                self.bus.clone(),
                Arc::clone(&self.metrics),
            )),
            Box::new(TokenExpiryProbe::new(
                Arc::clone(&self.cm),
                self.cfg.expiry_threshold,
                self.bus.clone(),
                Arc::clone(&self.metrics),
            )),
            Box::new(CertExpiryProbe::new(
                Arc::clone(&self.cm),
                self.cfg.expiry_threshold,
                self.bus.clone(),
                Arc::clone(&self.metrics),
            )),
        ];
        let scheduler = Scheduler::new(
            self.cfg,
            Arc::clone(&self.cm),
            Arc::clone(&self.runtime),
            probes,
            self.bus.clone(),
        );

        let token = CancellationToken::new();
        let handle = tokio::spawn(scheduler.run(token.clone()));
        state.worker = Some(Worker { token, handle });
        state.phase = Phase::Running;
        Ok(())
    }

    /// Stops the scheduler and waits until it is quiescent.
    ///
    /// An in-flight tick runs to completion; after this returns, no
    /// further collaborator call is made. Idempotent; calling it before
    /// [`init`](Self::init) is a no-op that still retires the housekeeper.
    pub async fn destroy(&self) {
        let worker = {
            let mut state = self.state.lock().expect("housekeeper state poisoned");
            state.phase = Phase::Stopped;
            state.worker.take()
        };
        if let Some(worker) = worker {
            worker.token.cancel();
            // The worker never panics; join errors only on forced abort.
            let _ = worker.handle.await;
        }
    }

    /// Returns a receiver observing housekeeping [`Event`]s published
    /// after this call.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Returns a point-in-time copy of the housekeeping counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
