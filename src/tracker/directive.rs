//! Outbound directives for the host.
//!
//! The tracker never calls into the host; applying an event returns the
//! directives the integration layer should forward (set defeated, set
//! victorious, update the objective counter). All of them are
//! fire-and-forget from the tracker's point of view.

use serde::{Deserialize, Serialize};

use crate::core::{ParticipantId, TeamId};

/// An instruction for the host integration layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Mark a single participant defeated (AI surrender).
    ParticipantDefeated(ParticipantId),

    /// Declare a team the match winner.
    TeamVictorious(TeamId),

    /// Declare a team defeated.
    TeamDefeated(TeamId),

    /// Refresh a participant's objective progress counter.
    ProgressUpdate {
        /// Whose counter to refresh.
        participant: ParticipantId,
        /// Enemy landmarks destroyed by the participant's team.
        current: u32,
        /// Enemy landmarks the team must destroy in total.
        max: u32,
    },
}

impl Directive {
    /// Completion ratio in `[0, 1]` for progress updates, `None` otherwise.
    ///
    /// The tracker only emits updates with `max > 0`, but a zero
    /// denominator still yields `None` rather than a non-finite ratio.
    #[must_use]
    pub fn progress_ratio(&self) -> Option<f64> {
        match self {
            Directive::ProgressUpdate { max: 0, .. } => None,
            Directive::ProgressUpdate { current, max, .. } => {
                Some(f64::from(*current) / f64::from(*max))
            }
            _ => None,
        }
    }
}
