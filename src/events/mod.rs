//! Typed event feed from the host.
//!
//! The host owns all world state and notifies the tracker of the few
//! things it cares about: landmark destruction, construction completion,
//! entity deaths, and a periodic population-sampling tick.
//!
//! Delivery is single-threaded and in order. Idempotence, not locking,
//! is the safety net: a duplicate notification is applied as a no-op.

mod event;

pub use event::{MatchEvent, PopulationSample};
