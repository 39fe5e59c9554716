//! # Role gate.
//!
//! Decides which probes run for the host role. Evaluated fresh on every
//! tick together with the bootstrap status, because the status may
//! transition to `Configured` at any time after the housekeeper starts.
//!
//! | Role | token | cert | config-change |
//! |---|---|---|---|
//! | Primary | yes | yes | no |
//! | Secondary | no | no | yes |
//! | Edge / Other | no | no | no |

use crate::collab::Role;
use crate::probes::ProbeKind;

/// Returns `true` when `kind` is active for `role`.
pub(crate) fn active(role: Role, kind: ProbeKind) -> bool {
    match role {
        Role::Primary => matches!(kind, ProbeKind::TokenExpiry | ProbeKind::CertExpiry),
        Role::Secondary => matches!(kind, ProbeKind::ConfigChange),
        Role::Edge | Role::Other => false,
    }
}

/// Returns `true` when `role` has any active probe at all.
pub(crate) fn any_active(role: Role) -> bool {
    ProbeKind::ALL.iter().any(|&kind| active(role, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_runs_expiry_probes_only() {
        assert!(active(Role::Primary, ProbeKind::TokenExpiry));
        assert!(active(Role::Primary, ProbeKind::CertExpiry));
        assert!(!active(Role::Primary, ProbeKind::ConfigChange));
    }

    #[test]
    fn secondary_runs_config_change_only() {
        assert!(active(Role::Secondary, ProbeKind::ConfigChange));
        assert!(!active(Role::Secondary, ProbeKind::TokenExpiry));
        assert!(!active(Role::Secondary, ProbeKind::CertExpiry));
    }

    #[test]
    fn other_roles_run_nothing() {
        for role in [Role::Edge, Role::Other] {
            assert!(!any_active(role));
            for kind in ProbeKind::ALL {
                assert!(!active(role, kind));
            }
        }
    }

    #[test]
    fn housekeeping_roles_are_active() {
        assert!(any_active(Role::Primary));
        assert!(any_active(Role::Secondary));
    }
}
