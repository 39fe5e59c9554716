//! # ConfigurationManager: the collaborator that does the real work.
//!
//! The housekeeper never touches the wire itself. When a probe decides a
//! renewal or reconfigure is due, it calls into this trait; the
//! implementation owns enrollment state, credentials, and sessions.

use std::time::SystemTime;

use async_trait::async_trait;

use crate::error::ManagerError;

/// Bootstrap state of the plugin, as reported by the manager.
///
/// The housekeeper performs no work unless the status is
/// [`ConfigStatus::Configured`]; the other variants mean "not yet
/// bootstrapped" and are treated identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStatus {
    /// Initial enrollment has not been attempted yet.
    NotAttempted,
    /// The last enrollment attempt failed.
    Failed,
    /// Enrollment with the cloud control plane succeeded.
    Configured,
}

/// # Contract for the configuration manager collaborator.
///
/// All mutating operations are expected to be idempotent: the housekeeper
/// may invoke `configure` twice in one tick (token and cert probes trigger
/// independently) and retries failed operations on later ticks.
///
/// Calls are made serially from the scheduler worker; implementations may
/// block for arbitrary durations (the scheduler delays the next tick rather
/// than interrupting).
#[async_trait]
pub trait ConfigurationManager: Send + Sync + 'static {
    /// Returns the current bootstrap status. Cheap and side-effect-free;
    /// called at the top of every tick.
    fn status(&self) -> ConfigStatus;

    /// Wall-clock instant at which the current auth token expires.
    ///
    /// `None` means expired or unknown and triggers renewal on the next
    /// active tick.
    async fn token_expiration(&self) -> Option<SystemTime>;

    /// Wall-clock instant at which the current TLS client certificate
    /// expires. `None` means expired or unknown.
    async fn cert_expiration(&self) -> Option<SystemTime>;

    /// (Re)establishes sessions with the control plane and refreshes the
    /// auth token as a side effect. Idempotent.
    async fn configure(&self) -> Result<(), ManagerError>;

    /// Issues and persists a new keypair/certificate. Idempotent from the
    /// housekeeper's view; does **not** re-establish sessions by itself
    /// (the cert probe follows up with [`configure`](Self::configure)).
    async fn renew_certs(&self) -> Result<(), ManagerError>;
}
