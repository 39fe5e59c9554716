//! Observability events published by the housekeeper.
//!
//! The scheduler and probes publish [`Event`]s to a broadcast [`Bus`];
//! embedders obtain a receiver via
//! [`Housekeeper::subscribe`](crate::Housekeeper::subscribe). Delivery is
//! fire-and-forget: events carry no control-flow meaning and losing them
//! never affects housekeeping.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
