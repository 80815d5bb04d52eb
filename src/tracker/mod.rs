//! Elimination tracking: landmark flags, progress scores, winner
//! resolution, and the AI surrender heuristic.
//!
//! ## Key Components
//!
//! - [`EliminationTracker`]: all win-condition state for one match
//! - [`TeamState`]: per-team landmark flags and progress score
//! - [`Directive`]: outbound instructions for the host integration layer
//! - [`MatchOutcome`]: the one-time terminal result
//!
//! ## Design Philosophy
//!
//! The tracker is a pure bookkeeping component. It owns no entities and
//! calls no host APIs; events come in, directives go out, and the host
//! glue on either side stays outside this crate. That keeps every rule -
//! idempotent destruction, opponents-only scoring, one-shot resolution -
//! testable without a running game.

mod directive;
mod elimination;
mod team;

pub use directive::Directive;
pub use elimination::{EliminationTracker, MatchOutcome, TrackerError};
pub use team::TeamState;
