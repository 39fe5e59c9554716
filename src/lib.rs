//! # cloudkeeper
//!
//! **Cloudkeeper** is a housekeeping supervisor for a plugin's long-lived
//! connection to a remote cloud control plane. It runs one periodic worker
//! per host process that:
//!
//! - renews short-lived authentication tokens before they expire,
//! - renews TLS client certificates before they expire,
//! - reacts to out-of-band configuration changes by triggering a full
//!   reconfigure.
//!
//! The actual `configure` / `renew_certs` work is performed by external
//! collaborators; cloudkeeper only decides *when* to invoke them.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────────────┐  ┌──────────────┐  ┌──────────────┐
//!     │ ConfigurationManager │  │  ConfigStore │  │  RuntimeInfo │
//!     │ (configure, renew,   │  │ (watched     │  │ (host role)  │
//!     │  status, expiries)   │  │  key/values) │  │              │
//!     └──────────┬───────────┘  └──────┬───────┘  └──────┬───────┘
//!                ▼                     ▼                 ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Housekeeper (facade: init / destroy / subscribe / metrics)    │
//! │   └─► Scheduler worker (one tokio task)                       │
//! │         ramp-up sleep(D₀) → interval(P):                      │
//! │           gate: status == Configured?  role active?           │
//! │           ├─► ConfigChangeProbe  (fingerprint → configure)    │
//! │           ├─► TokenExpiryProbe   (expiry ≤ T → configure)     │
//! │           └─► CertExpiryProbe    (expiry ≤ T → renew_certs,   │
//! │                                   then configure)             │
//! └───────────────┬───────────────────────────────────────────────┘
//!                 ▼
//!           Bus (broadcast) ──► embedder subscribers (optional)
//! ```
//!
//! Probes run strictly sequentially on the worker; failures are logged,
//! published to the event bus, and swallowed so the next tick always
//! happens. `destroy()` waits for any in-flight tick to finish.
//!
//! ## Role gating
//! Which probes run depends on the host role, re-evaluated on every tick:
//!
//! | Role | token | cert | config-change |
//! |---|---|---|---|
//! | [`Role::Primary`] | yes | yes | no |
//! | [`Role::Secondary`] | no | no | yes |
//! | [`Role::Edge`] / [`Role::Other`] | no | no | no |
//!
//! Additionally, nothing runs until the collaborator reports
//! [`ConfigStatus::Configured`], so a housekeeper created before bootstrap
//! idles silently and starts working once bootstrap completes.
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::{Duration, SystemTime};
//! use async_trait::async_trait;
//! use cloudkeeper::{
//!     Config, ConfigKey, ConfigStatus, ConfigStore, ConfigurationManager,
//!     Housekeeper, ManagerError, Role, RuntimeInfo,
//! };
//!
//! struct Cm;
//! #[async_trait]
//! impl ConfigurationManager for Cm {
//!     fn status(&self) -> ConfigStatus { ConfigStatus::Configured }
//!     async fn token_expiration(&self) -> Option<SystemTime> { None }
//!     async fn cert_expiration(&self) -> Option<SystemTime> { None }
//!     async fn configure(&self) -> Result<(), ManagerError> { Ok(()) }
//!     async fn renew_certs(&self) -> Result<(), ManagerError> { Ok(()) }
//! }
//!
//! struct Store;
//! #[async_trait]
//! impl ConfigStore for Store {
//!     async fn get(&self, _key: ConfigKey) -> Option<String> { None }
//! }
//!
//! struct Rt;
//! impl RuntimeInfo for Rt {
//!     fn container(&self) -> Role { Role::Primary }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hk = Housekeeper::new(
//!         Arc::new(Cm),
//!         Arc::new(Store),
//!         Arc::new(Rt),
//!         Config {
//!             initial_delay: Duration::from_secs(60),
//!             period: Duration::from_secs(30),
//!             expiry_threshold: Duration::from_secs(3600),
//!         },
//!     )?;
//!     hk.init()?;
//!     // ... host process runs ...
//!     hk.destroy().await;
//!     Ok(())
//! }
//! ```

mod collab;
mod config;
mod core;
mod error;
mod metrics;
mod probes;

pub mod events;

// ---- Public re-exports ----

pub use collab::{ConfigKey, ConfigStatus, ConfigStore, ConfigurationManager, Role, RuntimeInfo};
pub use config::Config;
pub use core::Housekeeper;
pub use error::{HousekeeperError, ManagerError, ProbeError};
pub use events::{Event, EventKind};
pub use metrics::MetricsSnapshot;
