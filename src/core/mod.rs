//! Core tracker types: identifiers, participants, rosters, configuration.
//!
//! This module contains the building blocks that are host-agnostic.
//! The host integration layer configures them once at match init rather
//! than the tracker hardcoding game data.

pub mod config;
pub mod ids;
pub mod participant;
pub mod roster;

pub use config::{EntityCategory, SurrenderConfig, TrackerConfig};
pub use ids::{LandmarkId, ParticipantId, TeamId};
pub use participant::{Control, Participant};
pub use roster::{ParticipantSetup, RosterConfig, RosterError, TeamSetup};
