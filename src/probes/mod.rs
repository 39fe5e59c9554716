//! The three housekeeping probes.
//!
//! Each probe is one decision: compare an observation against a condition
//! and, when it holds, trigger the matching collaborator operation. Probes
//! keep no state except the config-change probe's fingerprint, which is
//! owned by the scheduler worker and never read from elsewhere.
//!
//! Internal modules:
//! - [`probe`]: the [`Probe`] trait, [`ProbeKind`], expiry helper;
//! - [`token`]: token expiry → `configure`;
//! - [`cert`]: cert expiry → `renew_certs` then `configure`;
//! - [`config_change`]: watched-key fingerprint → `configure`;
//! - [`fingerprint`]: the digest over watched store keys.

mod cert;
mod config_change;
mod fingerprint;
mod probe;
mod token;

pub(crate) use cert::CertExpiryProbe;
pub(crate) use config_change::ConfigChangeProbe;
pub(crate) use probe::{Probe, ProbeKind};
pub(crate) use token::TokenExpiryProbe;
