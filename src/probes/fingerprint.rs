//! # Fingerprint over the watched config keys.
//!
//! A SHA-256 digest summarizing the current values of [`WATCHED_KEYS`] in
//! declared order. The encoding keeps three things distinct:
//!
//! - **absent vs empty**: an absent key contributes a tag byte of `0`, a
//!   present key a tag byte of `1` followed by the value;
//! - **value boundaries**: present values are length-prefixed, so
//!   `("ab", "c")` and `("a", "bc")` digest differently;
//! - **key identity**: the key name is mixed in before each value.

use sha2::{Digest, Sha256};

use crate::collab::{ConfigKey, ConfigStore, WATCHED_KEYS};

const TAG_ABSENT: u8 = 0;
const TAG_PRESENT: u8 = 1;

/// Digest of one observation of the watched keys.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Fingerprint([u8; 32]);

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fingerprint({})", hex::encode(&self.0[..8]))
    }
}

/// One observation of the watched keys, in [`WATCHED_KEYS`] order.
pub(crate) struct Observation {
    values: Vec<(ConfigKey, Option<String>)>,
}

impl Observation {
    /// Reads every watched key from the store.
    pub(crate) async fn read(store: &dyn ConfigStore) -> Self {
        let mut values = Vec::with_capacity(WATCHED_KEYS.len());
        for &key in WATCHED_KEYS {
            values.push((key, store.get(key).await));
        }
        Self { values }
    }

    /// Returns `true` when every watched key is absent, i.e. nothing has
    /// been observed yet. An empty observation never triggers a
    /// reconfigure.
    pub(crate) fn is_empty(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_none())
    }

    /// Computes the digest of this observation.
    pub(crate) fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        for (key, value) in &self.values {
            hasher.update(key.as_str().as_bytes());
            match value {
                None => hasher.update([TAG_ABSENT]),
                Some(v) => {
                    hasher.update([TAG_PRESENT]);
                    hasher.update((v.len() as u64).to_le_bytes());
                    hasher.update(v.as_bytes());
                }
            }
        }
        Fingerprint(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(values: &[(ConfigKey, Option<&str>)]) -> Observation {
        Observation {
            values: values
                .iter()
                .map(|(k, v)| (*k, v.map(str::to_owned)))
                .collect(),
        }
    }

    #[test]
    fn absent_and_empty_differ() {
        let absent = obs(&[(ConfigKey::GrpcHost, None), (ConfigKey::GrpcPort, None)]);
        let empty = obs(&[(ConfigKey::GrpcHost, Some("")), (ConfigKey::GrpcPort, None)]);
        assert_ne!(absent.fingerprint(), empty.fingerprint());
    }

    #[test]
    fn value_change_moves_fingerprint() {
        let a = obs(&[(ConfigKey::GrpcHost, Some("one.example"))]);
        let b = obs(&[(ConfigKey::GrpcHost, Some("two.example"))]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn equal_reads_digest_equal() {
        let a = obs(&[(ConfigKey::GrpcHost, Some("h")), (ConfigKey::GrpcPort, Some("443"))]);
        let b = obs(&[(ConfigKey::GrpcHost, Some("h")), (ConfigKey::GrpcPort, Some("443"))]);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn value_boundaries_are_unambiguous() {
        let a = obs(&[(ConfigKey::GrpcHost, Some("ab")), (ConfigKey::GrpcPort, Some("c"))]);
        let b = obs(&[(ConfigKey::GrpcHost, Some("a")), (ConfigKey::GrpcPort, Some("bc"))]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn all_absent_is_empty() {
        assert!(obs(&[(ConfigKey::GrpcHost, None)]).is_empty());
        assert!(!obs(&[(ConfigKey::GrpcHost, Some(""))]).is_empty());
    }
}
