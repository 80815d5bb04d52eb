//! Per-participant match bookkeeping.
//!
//! A [`Participant`] is one player or AI slot. The tracker keeps three
//! kinds of state for each slot:
//!
//! - peak strength: monotonic high-water marks of buildings and units,
//!   fed by periodic population samples;
//! - the latest sampled counts, used when the surrender heuristic runs in
//!   response to a kill event rather than a tick;
//! - a population-cap contribution that housing construction raises and
//!   housing destruction lowers by the same fixed amount.

use serde::{Deserialize, Serialize};

use super::ids::{ParticipantId, TeamId};

/// Who is driving a participant slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// A human player. Never subject to the surrender heuristic.
    Human,
    /// A computer player. Eligible for surrender recommendations.
    Ai,
}

/// One player or AI slot in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique slot identifier.
    pub id: ParticipantId,

    /// The team this slot fights for.
    pub team: TeamId,

    /// Human or AI.
    pub control: Control,

    /// Set when the participant surrenders or their team is defeated.
    /// Once set it never clears; defeat directives are one-shot.
    eliminated: bool,

    /// Highest building count ever sampled. Non-decreasing.
    most_buildings: u32,

    /// Highest unit count ever sampled. Non-decreasing.
    most_units: u32,

    /// Building count from the most recent sample.
    current_buildings: u32,

    /// Unit count from the most recent sample.
    current_units: u32,

    /// Population cap granted by standing housing. Raised on housing
    /// construction, lowered by the same amount on housing destruction.
    population_cap: u32,
}

impl Participant {
    /// Create a participant with zeroed counters.
    #[must_use]
    pub fn new(id: ParticipantId, team: TeamId, control: Control) -> Self {
        Self {
            id,
            team,
            control,
            eliminated: false,
            most_buildings: 0,
            most_units: 0,
            current_buildings: 0,
            current_units: 0,
            population_cap: 0,
        }
    }

    /// Is this slot AI-controlled?
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.control == Control::Ai
    }

    /// Has this participant been eliminated (surrender or team defeat)?
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Peak building count observed so far.
    #[must_use]
    pub fn most_buildings(&self) -> u32 {
        self.most_buildings
    }

    /// Peak unit count observed so far.
    #[must_use]
    pub fn most_units(&self) -> u32 {
        self.most_units
    }

    /// Building count from the most recent population sample.
    #[must_use]
    pub fn current_buildings(&self) -> u32 {
        self.current_buildings
    }

    /// Unit count from the most recent population sample.
    #[must_use]
    pub fn current_units(&self) -> u32 {
        self.current_units
    }

    /// Population cap contributed by standing housing.
    #[must_use]
    pub fn population_cap(&self) -> u32 {
        self.population_cap
    }

    /// Record a periodic population sample.
    ///
    /// Peaks only ever ratchet upward; the current counts always follow
    /// the sample.
    pub(crate) fn record_sample(&mut self, buildings: u32, units: u32) {
        self.most_buildings = self.most_buildings.max(buildings);
        self.most_units = self.most_units.max(units);
        self.current_buildings = buildings;
        self.current_units = units;
    }

    /// Housing finished construction: raise the cap contribution.
    pub(crate) fn add_housing(&mut self, amount: u32) {
        self.population_cap += amount;
    }

    /// Housing destroyed: lower the cap contribution by the paired amount.
    ///
    /// Saturates at zero. The host pairs every decrement with a prior
    /// increment, but a stale kill event after match teardown and rebuild
    /// must stay non-fatal.
    pub(crate) fn remove_housing(&mut self, amount: u32) {
        self.population_cap = self.population_cap.saturating_sub(amount);
    }

    /// Mark the participant eliminated. Idempotent.
    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant() -> Participant {
        Participant::new(ParticipantId::new(0), TeamId::new(0), Control::Ai)
    }

    #[test]
    fn test_new_participant_is_zeroed() {
        let p = participant();
        assert!(!p.is_eliminated());
        assert_eq!(p.most_buildings(), 0);
        assert_eq!(p.most_units(), 0);
        assert_eq!(p.population_cap(), 0);
    }

    #[test]
    fn test_peaks_are_monotonic() {
        let mut p = participant();

        p.record_sample(10, 40);
        assert_eq!(p.most_buildings(), 10);
        assert_eq!(p.most_units(), 40);

        // Counts drop: currents follow, peaks hold.
        p.record_sample(3, 12);
        assert_eq!(p.most_buildings(), 10);
        assert_eq!(p.most_units(), 40);
        assert_eq!(p.current_buildings(), 3);
        assert_eq!(p.current_units(), 12);

        p.record_sample(15, 20);
        assert_eq!(p.most_buildings(), 15);
        assert_eq!(p.most_units(), 40);
    }

    #[test]
    fn test_housing_pairing_is_symmetric() {
        let mut p = participant();

        p.add_housing(10);
        p.add_housing(10);
        assert_eq!(p.population_cap(), 20);

        p.remove_housing(10);
        assert_eq!(p.population_cap(), 10);
        p.remove_housing(10);
        assert_eq!(p.population_cap(), 0);
    }

    #[test]
    fn test_housing_removal_saturates() {
        let mut p = participant();
        p.remove_housing(10);
        assert_eq!(p.population_cap(), 0);
    }

    #[test]
    fn test_eliminate_is_idempotent() {
        let mut p = participant();
        p.eliminate();
        p.eliminate();
        assert!(p.is_eliminated());
    }

    #[test]
    fn test_control_flags() {
        let ai = participant();
        assert!(ai.is_ai());

        let human = Participant::new(ParticipantId::new(1), TeamId::new(1), Control::Human);
        assert!(!human.is_ai());
    }
}
