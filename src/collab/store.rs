//! # ConfigStore: persisted key/value connection parameters.
//!
//! A small persisted map holding bootstrap status and connection
//! parameters such as the gRPC endpoint host. The housekeeper only reads
//! it: the config-change probe fingerprints the watched keys on every tick
//! and triggers a reconfigure when the fingerprint moves.

use async_trait::async_trait;

/// Keys the housekeeper knows about.
///
/// The set is fixed at build time. `ConfigStatus` is listed for external
/// readers of the store; the housekeeper itself reads bootstrap status via
/// [`ConfigurationManager::status`](crate::ConfigurationManager::status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Persisted bootstrap status (`configstatus`).
    ConfigStatus,
    /// Cloud endpoint host (`grpchost`).
    GrpcHost,
    /// Cloud endpoint port (`grpcport`).
    GrpcPort,
}

impl ConfigKey {
    /// Returns the persisted name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ConfigStatus => "configstatus",
            ConfigKey::GrpcHost => "grpchost",
            ConfigKey::GrpcPort => "grpcport",
        }
    }
}

/// Keys covered by the config-change fingerprint, in digest order.
pub const WATCHED_KEYS: &[ConfigKey] = &[ConfigKey::GrpcHost, ConfigKey::GrpcPort];

/// # Contract for the persisted config store collaborator.
#[async_trait]
pub trait ConfigStore: Send + Sync + 'static {
    /// Returns the current value for `key`, or `None` when the key is
    /// absent. Implementations **must** distinguish "key absent" from
    /// "empty string": the fingerprint treats them as different states.
    async fn get(&self, key: ConfigKey) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_store() {
        assert_eq!(ConfigKey::ConfigStatus.as_str(), "configstatus");
        assert_eq!(ConfigKey::GrpcHost.as_str(), "grpchost");
        assert_eq!(ConfigKey::GrpcPort.as_str(), "grpcport");
    }

    #[test]
    fn watched_keys_exclude_status() {
        assert!(!WATCHED_KEYS.contains(&ConfigKey::ConfigStatus));
        assert!(WATCHED_KEYS.contains(&ConfigKey::GrpcHost));
    }
}
