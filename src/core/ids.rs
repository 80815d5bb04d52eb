//! Typed identifiers for match participants, teams, and landmarks.
//!
//! The tracker never interprets raw host handles. The host integration
//! layer maps its own entity/player references onto these identifiers once
//! at match initialization, and every later event uses them.
//!
//! ## ParticipantId
//!
//! One player or AI slot in the match (1-255 slots).
//!
//! ## TeamId
//!
//! A side in the match. Several participants may share a team.
//!
//! ## LandmarkId
//!
//! A team-defining structure whose destruction counts toward that team's
//! elimination. Landmark IDs are unique across the whole match, not per
//! team.

use serde::{Deserialize, Serialize};

/// Participant identifier supporting 1-255 match slots.
///
/// Slot indices are 0-based: the first slot is `ParticipantId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// Team identifier.
///
/// Teams are the unit of victory and defeat: landmarks belong to teams,
/// progress is scored per team, and winner resolution counts teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Unique identifier for a landmark structure.
///
/// Opaque to the tracker: the host assigns these when it registers each
/// team's defended landmarks at match initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LandmarkId(pub u32);

impl LandmarkId {
    /// Create a new landmark ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Landmark({})", self.0)
    }
}
