//! Match roster configuration.
//!
//! The host enumerates participants and registers each team's defended
//! landmarks once, before the first event. [`RosterConfig`] collects that
//! enumeration and validates it when the tracker is built.
//!
//! ## Zero-landmark teams
//!
//! Under the elimination rule a team with no landmarks is vacuously never
//! alive, which would let winner resolution fire before anything happened
//! in the match. Rather than inherit that ambiguity, roster validation
//! rejects teams registered without landmarks.

use smallvec::SmallVec;
use thiserror::Error;

use super::ids::{LandmarkId, ParticipantId, TeamId};
use super::participant::Control;

/// Errors detected while validating a roster.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a match needs at least two teams, got {0}")]
    TooFewTeams(usize),

    #[error("{0} is registered twice")]
    DuplicateTeam(TeamId),

    #[error("{0} has no landmarks to defend")]
    TeamWithoutLandmarks(TeamId),

    #[error("{0} is registered to more than one team")]
    DuplicateLandmark(LandmarkId),

    #[error("{0} is enumerated twice")]
    DuplicateParticipant(ParticipantId),

    #[error("{participant} references unknown {team}")]
    UnknownTeam {
        participant: ParticipantId,
        team: TeamId,
    },
}

/// One team and the landmarks it must defend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSetup {
    /// Unique team identifier.
    pub id: TeamId,

    /// Landmarks whose total destruction eliminates the team.
    pub landmarks: SmallVec<[LandmarkId; 4]>,
}

impl TeamSetup {
    /// Create a team setup from any collection of landmark IDs.
    pub fn new(id: TeamId, landmarks: impl IntoIterator<Item = LandmarkId>) -> Self {
        Self {
            id,
            landmarks: landmarks.into_iter().collect(),
        }
    }
}

/// One enumerated participant slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantSetup {
    /// Unique slot identifier.
    pub id: ParticipantId,

    /// The team this slot fights for.
    pub team: TeamId,

    /// Human or AI.
    pub control: Control,
}

/// Complete match roster, built by the host integration layer.
///
/// ## Example
///
/// ```
/// use rts_victory::core::{
///     Control, LandmarkId, ParticipantId, RosterConfig, TeamId,
/// };
///
/// let roster = RosterConfig::new()
///     .team(TeamId::new(0), [LandmarkId::new(10)])
///     .team(TeamId::new(1), [LandmarkId::new(20)])
///     .participant(ParticipantId::new(0), TeamId::new(0), Control::Human)
///     .participant(ParticipantId::new(1), TeamId::new(1), Control::Ai);
///
/// assert!(roster.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterConfig {
    teams: Vec<TeamSetup>,
    participants: Vec<ParticipantSetup>,
}

impl RosterConfig {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team and its landmark set (builder pattern).
    #[must_use]
    pub fn team(mut self, id: TeamId, landmarks: impl IntoIterator<Item = LandmarkId>) -> Self {
        self.teams.push(TeamSetup::new(id, landmarks));
        self
    }

    /// Enumerate a participant slot (builder pattern).
    #[must_use]
    pub fn participant(mut self, id: ParticipantId, team: TeamId, control: Control) -> Self {
        self.participants.push(ParticipantSetup { id, team, control });
        self
    }

    /// Registered teams, in registration order.
    #[must_use]
    pub fn teams(&self) -> &[TeamSetup] {
        &self.teams
    }

    /// Enumerated participants, in enumeration order.
    #[must_use]
    pub fn participants(&self) -> &[ParticipantSetup] {
        &self.participants
    }

    /// Check the roster for structural problems.
    ///
    /// Returns the first problem found. The tracker constructor runs this
    /// before accepting the roster.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.teams.len() < 2 {
            return Err(RosterError::TooFewTeams(self.teams.len()));
        }

        let mut seen_teams: Vec<TeamId> = Vec::with_capacity(self.teams.len());
        let mut seen_landmarks: Vec<LandmarkId> = Vec::new();

        for team in &self.teams {
            if seen_teams.contains(&team.id) {
                return Err(RosterError::DuplicateTeam(team.id));
            }
            seen_teams.push(team.id);

            if team.landmarks.is_empty() {
                return Err(RosterError::TeamWithoutLandmarks(team.id));
            }

            for &landmark in &team.landmarks {
                if seen_landmarks.contains(&landmark) {
                    return Err(RosterError::DuplicateLandmark(landmark));
                }
                seen_landmarks.push(landmark);
            }
        }

        let mut seen_participants: Vec<ParticipantId> = Vec::new();
        for participant in &self.participants {
            if seen_participants.contains(&participant.id) {
                return Err(RosterError::DuplicateParticipant(participant.id));
            }
            seen_participants.push(participant.id);

            if !seen_teams.contains(&participant.team) {
                return Err(RosterError::UnknownTeam {
                    participant: participant.id,
                    team: participant.team,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_team_roster() -> RosterConfig {
        RosterConfig::new()
            .team(TeamId::new(0), [LandmarkId::new(10), LandmarkId::new(11)])
            .team(TeamId::new(1), [LandmarkId::new(20)])
            .participant(ParticipantId::new(0), TeamId::new(0), Control::Human)
            .participant(ParticipantId::new(1), TeamId::new(1), Control::Ai)
    }

    #[test]
    fn test_valid_roster() {
        assert!(two_team_roster().validate().is_ok());
    }

    #[test]
    fn test_rejects_single_team() {
        let roster = RosterConfig::new().team(TeamId::new(0), [LandmarkId::new(1)]);
        assert_eq!(roster.validate(), Err(RosterError::TooFewTeams(1)));
    }

    #[test]
    fn test_rejects_duplicate_team() {
        let roster = two_team_roster().team(TeamId::new(0), [LandmarkId::new(30)]);
        assert_eq!(
            roster.validate(),
            Err(RosterError::DuplicateTeam(TeamId::new(0)))
        );
    }

    #[test]
    fn test_rejects_zero_landmark_team() {
        let roster = two_team_roster().team(TeamId::new(2), []);
        assert_eq!(
            roster.validate(),
            Err(RosterError::TeamWithoutLandmarks(TeamId::new(2)))
        );
    }

    #[test]
    fn test_rejects_shared_landmark() {
        let roster = two_team_roster().team(TeamId::new(2), [LandmarkId::new(20)]);
        assert_eq!(
            roster.validate(),
            Err(RosterError::DuplicateLandmark(LandmarkId::new(20)))
        );
    }

    #[test]
    fn test_rejects_duplicate_participant() {
        let roster =
            two_team_roster().participant(ParticipantId::new(0), TeamId::new(1), Control::Ai);
        assert_eq!(
            roster.validate(),
            Err(RosterError::DuplicateParticipant(ParticipantId::new(0)))
        );
    }

    #[test]
    fn test_rejects_unknown_team_reference() {
        let roster =
            two_team_roster().participant(ParticipantId::new(2), TeamId::new(9), Control::Ai);
        assert_eq!(
            roster.validate(),
            Err(RosterError::UnknownTeam {
                participant: ParticipantId::new(2),
                team: TeamId::new(9),
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = RosterError::TeamWithoutLandmarks(TeamId::new(3));
        assert_eq!(format!("{}", err), "Team 3 has no landmarks to defend");
    }
}
