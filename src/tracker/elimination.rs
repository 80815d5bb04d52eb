//! The elimination tracker.
//!
//! One [`EliminationTracker`] instance owns all win-condition state for a
//! match. The host integration layer builds it from a roster at match
//! init, feeds it [`MatchEvent`]s as they arrive, and forwards the
//! returned [`Directive`]s to its own defeat/victory/UI calls.
//!
//! ## Terminal state
//!
//! Winner resolution fires exactly once. From then on the tracker is
//! resolved: further events are accepted but change nothing, so late or
//! duplicated notifications from the host are harmless.
//!
//! ## Error policy
//!
//! Strict operations (`record_*`, `evaluate_ai_surrender`) return typed
//! errors for unknown identifiers. The [`apply`](EliminationTracker::apply)
//! entry point downgrades those to warnings, because stale events for
//! already-removed participants are expected during normal play. Nothing
//! in this module panics on host input.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{
    EntityCategory, LandmarkId, Participant, ParticipantId, RosterConfig, RosterError, TeamId,
    TrackerConfig,
};
use crate::events::MatchEvent;

use super::directive::Directive;
use super::team::{Destruction, TeamState};

/// Errors from strict tracker operations.
///
/// All of these are local and non-fatal: the caller logs and moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("{0} is not part of this match")]
    UnknownTeam(TeamId),

    #[error("{0} is not part of this match")]
    UnknownParticipant(ParticipantId),

    #[error("{0} is not registered to any team")]
    UnknownLandmark(LandmarkId),

    #[error("{landmark} belongs to {actual}, not {claimed}")]
    LandmarkOwnerMismatch {
        landmark: LandmarkId,
        claimed: TeamId,
        actual: TeamId,
    },
}

/// The one-time result of a resolved match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The sole surviving team.
    pub victor: TeamId,

    /// Every other team, in registration order.
    pub defeated: Vec<TeamId>,
}

/// Win-condition state for one match.
///
/// ## Example
///
/// ```
/// use rts_victory::core::{Control, LandmarkId, ParticipantId, RosterConfig, TeamId, TrackerConfig};
/// use rts_victory::events::MatchEvent;
/// use rts_victory::tracker::{Directive, EliminationTracker};
///
/// let roster = RosterConfig::new()
///     .team(TeamId::new(0), [LandmarkId::new(10)])
///     .team(TeamId::new(1), [LandmarkId::new(20)])
///     .participant(ParticipantId::new(0), TeamId::new(0), Control::Human)
///     .participant(ParticipantId::new(1), TeamId::new(1), Control::Ai);
///
/// let mut tracker = EliminationTracker::new(&roster, TrackerConfig::default()).unwrap();
///
/// // Team 0's only landmark falls: team 1 wins.
/// let directives = tracker.apply(&MatchEvent::landmark_destroyed(
///     LandmarkId::new(10),
///     TeamId::new(0),
/// ));
///
/// assert!(directives.contains(&Directive::TeamVictorious(TeamId::new(1))));
/// assert!(tracker.is_resolved());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EliminationTracker {
    config: TrackerConfig,

    /// Participants in enumeration order.
    participants: Vec<Participant>,

    /// Teams in registration order.
    teams: Vec<TeamState>,

    /// Reverse index: landmark -> owning team.
    landmark_owners: FxHashMap<LandmarkId, TeamId>,

    /// Set exactly once, by winner resolution.
    outcome: Option<MatchOutcome>,
}

impl EliminationTracker {
    /// Build a tracker from a validated roster.
    ///
    /// Fails if the roster is structurally invalid (see [`RosterError`]).
    pub fn new(roster: &RosterConfig, config: TrackerConfig) -> Result<Self, RosterError> {
        roster.validate()?;

        let teams: Vec<TeamState> = roster
            .teams()
            .iter()
            .map(|setup| TeamState::new(setup.id, setup.landmarks.iter().copied()))
            .collect();

        let mut landmark_owners = FxHashMap::default();
        for setup in roster.teams() {
            for &landmark in &setup.landmarks {
                landmark_owners.insert(landmark, setup.id);
            }
        }

        let participants = roster
            .participants()
            .iter()
            .map(|setup| Participant::new(setup.id, setup.team, setup.control))
            .collect();

        Ok(Self {
            config,
            participants,
            teams,
            landmark_owners,
            outcome: None,
        })
    }

    /// The configuration this tracker was built with.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// All participants, in enumeration order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// All teams, in registration order.
    #[must_use]
    pub fn teams(&self) -> &[TeamState] {
        &self.teams
    }

    /// Look up one participant.
    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Look up one team.
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&TeamState> {
        self.teams.iter().find(|t| t.id() == id)
    }

    /// The terminal result, once winner resolution has fired.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Has a winner been declared?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// Enemy landmarks a team must destroy in total: the combined
    /// landmark count of every other team.
    #[must_use]
    pub fn progress_target(&self, team: TeamId) -> Option<u32> {
        self.team(team)?;
        let target = self
            .teams
            .iter()
            .filter(|t| t.id() != team)
            .map(|t| t.landmark_count() as u32)
            .sum();
        Some(target)
    }

    /// Apply one host event, downgrading unknown-id errors to warnings.
    ///
    /// This is the normal entry point for the host's event pump. The
    /// strict `record_*` methods are available when the caller wants the
    /// error instead.
    pub fn apply(&mut self, event: &MatchEvent) -> Vec<Directive> {
        match event {
            MatchEvent::LandmarkDestroyed { landmark, owner } => {
                match self.record_landmark_destroyed(*landmark, *owner) {
                    Ok(directives) => directives,
                    Err(error) => {
                        warn!(error = %error, "ignoring landmark destruction");
                        Vec::new()
                    }
                }
            }
            MatchEvent::EntityConstructed { owner, category } => {
                if let Err(error) = self.record_entity_constructed(*owner, *category) {
                    warn!(error = %error, "ignoring construction event");
                }
                Vec::new()
            }
            MatchEvent::EntityKilled { owner, category } => {
                match self.record_entity_killed(*owner, *category) {
                    Ok(directives) => directives,
                    Err(error) => {
                        warn!(error = %error, "ignoring kill event");
                        Vec::new()
                    }
                }
            }
            MatchEvent::Tick { samples } => {
                for sample in samples {
                    if let Err(error) =
                        self.record_population_sample(sample.participant, sample.buildings, sample.units)
                    {
                        warn!(error = %error, "ignoring population sample");
                    }
                }
                Vec::new()
            }
        }
    }

    /// A landmark fell.
    ///
    /// Idempotent: a duplicate notification for an already-destroyed
    /// landmark returns no directives and changes no scores. Otherwise
    /// every opposing team scores one point, fresh progress counters are
    /// emitted for the UI, and winner resolution runs.
    pub fn record_landmark_destroyed(
        &mut self,
        landmark: LandmarkId,
        owner: TeamId,
    ) -> Result<Vec<Directive>, TrackerError> {
        if self.is_resolved() {
            debug!(%landmark, "match already resolved; ignoring destruction");
            return Ok(Vec::new());
        }

        let actual = *self
            .landmark_owners
            .get(&landmark)
            .ok_or(TrackerError::UnknownLandmark(landmark))?;
        if self.team(owner).is_none() {
            return Err(TrackerError::UnknownTeam(owner));
        }
        if actual != owner {
            return Err(TrackerError::LandmarkOwnerMismatch {
                landmark,
                claimed: owner,
                actual,
            });
        }

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id() == owner)
            .ok_or(TrackerError::UnknownTeam(owner))?;
        if team.mark_destroyed(landmark) == Destruction::AlreadyDown {
            return Ok(Vec::new());
        }

        for team in self.teams.iter_mut().filter(|t| t.id() != owner) {
            team.add_score(1);
        }

        let mut directives = self.progress_updates();
        directives.extend(self.resolve_winner());
        Ok(directives)
    }

    /// A periodic population sample for one participant.
    ///
    /// Ratchets the peak counters up and remembers the current counts for
    /// kill-triggered surrender evaluation. Ignored once resolved.
    pub fn record_population_sample(
        &mut self,
        participant: ParticipantId,
        buildings: u32,
        units: u32,
    ) -> Result<(), TrackerError> {
        if self.is_resolved() {
            return Ok(());
        }

        self.participant_mut(participant)?
            .record_sample(buildings, units);
        Ok(())
    }

    /// An entity finished construction.
    ///
    /// Housing raises the owner's population-cap contribution; every
    /// other category is not the tracker's concern.
    pub fn record_entity_constructed(
        &mut self,
        owner: ParticipantId,
        category: EntityCategory,
    ) -> Result<(), TrackerError> {
        if self.is_resolved() {
            return Ok(());
        }

        let amount = self.config.housing_population;
        let housing = category == self.config.housing_category;

        let participant = self.participant_mut(owner)?;
        if housing {
            participant.add_housing(amount);
        }
        Ok(())
    }

    /// An entity was destroyed or killed.
    ///
    /// Housing lowers the owner's population-cap contribution by exactly
    /// the amount construction added. AI owners are then checked against
    /// the surrender heuristic with their last sampled counts.
    pub fn record_entity_killed(
        &mut self,
        owner: ParticipantId,
        category: EntityCategory,
    ) -> Result<Vec<Directive>, TrackerError> {
        if self.is_resolved() {
            return Ok(Vec::new());
        }

        let amount = self.config.housing_population;
        let housing = category == self.config.housing_category;

        let participant = self.participant_mut(owner)?;
        if housing {
            participant.remove_housing(amount);
        }

        if !participant.is_ai() {
            return Ok(Vec::new());
        }
        let buildings = participant.current_buildings();
        let units = participant.current_units();

        Ok(self
            .evaluate_ai_surrender(owner, buildings, units)?
            .into_iter()
            .collect())
    }

    /// Check an AI participant against the surrender heuristic.
    ///
    /// Human participants, already-eliminated participants, and resolved
    /// matches all yield `None`. On a recommendation the participant is
    /// marked eliminated so the directive fires exactly once.
    pub fn evaluate_ai_surrender(
        &mut self,
        participant: ParticipantId,
        current_buildings: u32,
        current_units: u32,
    ) -> Result<Option<Directive>, TrackerError> {
        if self.is_resolved() {
            return Ok(None);
        }

        let surrender = self.config.surrender;
        let participant = self.participant_mut(participant)?;
        if !participant.is_ai() || participant.is_eliminated() {
            return Ok(None);
        }

        if surrender.recommends(
            participant.most_buildings(),
            current_buildings,
            participant.most_units(),
            current_units,
        ) {
            participant.eliminate();
            Ok(Some(Directive::ParticipantDefeated(participant.id)))
        } else {
            Ok(None)
        }
    }

    fn participant_mut(
        &mut self,
        id: ParticipantId,
    ) -> Result<&mut Participant, TrackerError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TrackerError::UnknownParticipant(id))
    }

    /// One UI counter refresh per participant whose team has a non-zero
    /// progress target. The zero-target guard keeps the ratio defined.
    fn progress_updates(&self) -> Vec<Directive> {
        let mut updates = Vec::with_capacity(self.participants.len());
        for participant in &self.participants {
            let Some(max) = self.progress_target(participant.team) else {
                continue;
            };
            if max == 0 {
                continue;
            }
            let current = self
                .team(participant.team)
                .map(TeamState::score)
                .unwrap_or(0)
                .min(max);
            updates.push(Directive::ProgressUpdate {
                participant: participant.id,
                current,
                max,
            });
        }
        updates
    }

    /// Declare a winner when exactly one team is still alive.
    ///
    /// Terminal and one-shot: sets the outcome, marks every losing
    /// participant eliminated, and emits the victory/defeat directives.
    fn resolve_winner(&mut self) -> Vec<Directive> {
        if self.is_resolved() {
            return Vec::new();
        }

        let survivors: Vec<TeamId> = self
            .teams
            .iter()
            .filter(|t| t.is_alive())
            .map(TeamState::id)
            .collect();
        if survivors.len() != 1 {
            return Vec::new();
        }
        let victor = survivors[0];

        let defeated: Vec<TeamId> = self
            .teams
            .iter()
            .map(TeamState::id)
            .filter(|&id| id != victor)
            .collect();

        for participant in &mut self.participants {
            if participant.team != victor {
                participant.eliminate();
            }
        }

        self.outcome = Some(MatchOutcome {
            victor,
            defeated: defeated.clone(),
        });

        let mut directives = vec![Directive::TeamVictorious(victor)];
        directives.extend(defeated.into_iter().map(Directive::TeamDefeated));
        directives
    }
}
