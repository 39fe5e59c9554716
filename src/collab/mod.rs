//! Collaborator interfaces consumed by the housekeeper.
//!
//! These are the only seams between the housekeeper and the rest of the
//! plugin: the [`ConfigurationManager`] performs the actual configure and
//! certificate-renewal work, the [`ConfigStore`] holds the persisted
//! connection parameters, and [`RuntimeInfo`] reports the host role.
//!
//! The housekeeper uses each collaborator serially from its single worker
//! and does not synchronize them beyond `Send + Sync` bounds.

mod manager;
mod runtime;
mod store;

pub use manager::{ConfigStatus, ConfigurationManager};
pub use runtime::{Role, RuntimeInfo};
pub use store::{ConfigKey, ConfigStore, WATCHED_KEYS};
