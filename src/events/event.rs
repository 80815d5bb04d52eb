//! Match event payloads.
//!
//! The host delivers events one at a time, in order. Instead of a
//! loosely-typed context bundle per notification, the feed is a single
//! tagged union the tracker dispatches over with an explicit `match`.

use serde::{Deserialize, Serialize};

use crate::core::{EntityCategory, LandmarkId, ParticipantId, TeamId};

/// One participant's population counts at a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSample {
    /// The sampled slot.
    pub participant: ParticipantId,

    /// Standing buildings at sample time.
    pub buildings: u32,

    /// Living units at sample time.
    pub units: u32,
}

impl PopulationSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(participant: ParticipantId, buildings: u32, units: u32) -> Self {
        Self {
            participant,
            buildings,
            units,
        }
    }
}

/// An event delivered by the host.
///
/// Duplicate delivery of the same event must be tolerated; the tracker
/// treats already-applied notifications as no-ops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A team-defining landmark was destroyed.
    LandmarkDestroyed {
        /// Which landmark fell.
        landmark: LandmarkId,
        /// The team that was defending it.
        owner: TeamId,
    },

    /// An entity finished construction.
    EntityConstructed {
        /// The slot that built it.
        owner: ParticipantId,
        /// Host-defined category of the entity.
        category: EntityCategory,
    },

    /// An entity was destroyed or killed.
    EntityKilled {
        /// The slot that owned it.
        owner: ParticipantId,
        /// Host-defined category of the entity.
        category: EntityCategory,
    },

    /// Periodic population sampling tick.
    Tick {
        /// One sample per participant the host chose to report.
        samples: Vec<PopulationSample>,
    },
}

impl MatchEvent {
    /// Create a landmark destruction event.
    #[must_use]
    pub const fn landmark_destroyed(landmark: LandmarkId, owner: TeamId) -> Self {
        Self::LandmarkDestroyed { landmark, owner }
    }

    /// Create a construction-complete event.
    #[must_use]
    pub const fn entity_constructed(owner: ParticipantId, category: EntityCategory) -> Self {
        Self::EntityConstructed { owner, category }
    }

    /// Create an entity-killed event.
    #[must_use]
    pub const fn entity_killed(owner: ParticipantId, category: EntityCategory) -> Self {
        Self::EntityKilled { owner, category }
    }

    /// Create a sampling tick from any collection of samples.
    pub fn tick(samples: impl IntoIterator<Item = PopulationSample>) -> Self {
        Self::Tick {
            samples: samples.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        let event = MatchEvent::landmark_destroyed(LandmarkId::new(5), TeamId::new(1));
        assert_eq!(
            event,
            MatchEvent::LandmarkDestroyed {
                landmark: LandmarkId::new(5),
                owner: TeamId::new(1),
            }
        );

        let event = MatchEvent::tick([PopulationSample::new(ParticipantId::new(0), 4, 12)]);
        match event {
            MatchEvent::Tick { samples } => {
                assert_eq!(samples.len(), 1);
                assert_eq!(samples[0].buildings, 4);
            }
            _ => panic!("Expected Tick"),
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = MatchEvent::entity_killed(ParticipantId::new(2), EntityCategory::new(7));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
