//! # RuntimeInfo: the host role.
//!
//! The host process runs in one of several roles ("containers"); which
//! probes are active depends on it. The role is immutable for the
//! housekeeper's lifetime but is re-read on every tick for uniformity with
//! the bootstrap status check.

/// Operational role of the host process embedding the housekeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Primary node: holds credentials, issues certificates. Runs the
    /// token and certificate probes.
    Primary,
    /// Secondary node: consumes configuration produced elsewhere. Runs the
    /// config-change probe.
    Secondary,
    /// Edge node: no housekeeping responsibilities.
    Edge,
    /// Any other role: no housekeeping responsibilities.
    Other,
}

/// # Contract for the runtime information collaborator.
pub trait RuntimeInfo: Send + Sync + 'static {
    /// Returns the role the host process is running in.
    fn container(&self) -> Role;
}
