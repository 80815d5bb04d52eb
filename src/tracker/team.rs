//! Per-team elimination state.
//!
//! A team stays in the match while at least one of its registered
//! landmarks is standing. Destroyed flags are monotonic: once a landmark
//! falls it never comes back, and a duplicate destruction notification
//! changes nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{LandmarkId, TeamId};

/// Result of applying a destruction notification to a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Destruction {
    /// The flag flipped false -> true.
    Applied,
    /// The landmark was already down; nothing changed.
    AlreadyDown,
}

/// One team's landmark flags and progress score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    id: TeamId,

    /// landmark -> destroyed. Seeded false for every registered landmark.
    landmarks: FxHashMap<LandmarkId, bool>,

    /// Count of destroyed landmarks belonging to *other* teams.
    score: u32,
}

impl TeamState {
    pub(crate) fn new(id: TeamId, landmarks: impl IntoIterator<Item = LandmarkId>) -> Self {
        Self {
            id,
            landmarks: landmarks.into_iter().map(|l| (l, false)).collect(),
            score: 0,
        }
    }

    /// Team identifier.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// A team is alive while any of its landmarks is standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.landmarks.values().any(|destroyed| !destroyed)
    }

    /// Enemy landmarks destroyed so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total registered landmarks.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    /// How many of this team's own landmarks are down.
    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.landmarks.values().filter(|destroyed| **destroyed).count()
    }

    /// Does this team defend the given landmark?
    #[must_use]
    pub fn has_landmark(&self, landmark: LandmarkId) -> bool {
        self.landmarks.contains_key(&landmark)
    }

    /// Flip a landmark's destroyed flag, idempotently.
    ///
    /// Callers resolve ownership first; the landmark must belong to this
    /// team.
    pub(crate) fn mark_destroyed(&mut self, landmark: LandmarkId) -> Destruction {
        let flag = self
            .landmarks
            .get_mut(&landmark)
            .expect("landmark ownership resolved before marking");
        if *flag {
            Destruction::AlreadyDown
        } else {
            *flag = true;
            Destruction::Applied
        }
    }

    pub(crate) fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }
}
