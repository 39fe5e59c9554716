//! Housekeeping core: gating, scheduling, and lifecycle.
//!
//! The only public API from this module is [`Housekeeper`], the facade the
//! embedder constructs and drives via `init` / `destroy`.
//!
//! Internal modules:
//! - [`gate`]: which probes are active for a role, plus the bootstrap gate;
//! - [`scheduler`]: the periodic worker that runs probes serially;
//! - [`housekeeper`]: facade and lifecycle state machine.

mod gate;
mod housekeeper;
mod scheduler;

pub use housekeeper::Housekeeper;
