//! # rts-victory
//!
//! Win-condition tracking for multi-team RTS matches.
//!
//! The host engine owns all world state - entities, squads, players,
//! teams. This crate owns the decision logic the host shouldn't have to
//! scatter across script callbacks: which teams are still alive, how far
//! each team is from winning, and when an AI opponent has collapsed badly
//! enough to surrender.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No engine handles anywhere. The integration
//!    layer maps its objects onto typed identifiers once, at match init.
//!
//! 2. **Events In, Directives Out**: The tracker never calls the host.
//!    Each applied [`events::MatchEvent`] returns the
//!    [`tracker::Directive`]s to forward.
//!
//! 3. **Idempotence Over Locking**: Delivery is single-threaded and in
//!    order, but duplicates happen. Every operation is safe to replay.
//!
//! ## Modules
//!
//! - `core`: Typed identifiers, participants, rosters, configuration
//! - `events`: The tagged-union event feed from the host
//! - `tracker`: Elimination state, winner resolution, surrender heuristic

pub mod core;
pub mod events;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{
    Control, EntityCategory, LandmarkId, Participant, ParticipantId, RosterConfig, RosterError,
    SurrenderConfig, TeamId, TrackerConfig,
};

pub use crate::events::{MatchEvent, PopulationSample};

pub use crate::tracker::{Directive, EliminationTracker, MatchOutcome, TeamState, TrackerError};
