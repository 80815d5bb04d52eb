//! Property tests for the tracker's core invariants: idempotence,
//! monotonic peaks, score conservation, terminal outcomes, and the
//! surrender floor guard.

use proptest::prelude::*;

use rts_victory::core::{
    Control, LandmarkId, ParticipantId, RosterConfig, SurrenderConfig, TeamId, TrackerConfig,
};
use rts_victory::events::{MatchEvent, PopulationSample};
use rts_victory::tracker::EliminationTracker;

const AI: ParticipantId = ParticipantId::new(1);

/// Every landmark in the three-way fixture, with its owner.
const ALL_LANDMARKS: [(LandmarkId, TeamId); 6] = [
    (LandmarkId::new(10), TeamId::new(0)),
    (LandmarkId::new(11), TeamId::new(0)),
    (LandmarkId::new(20), TeamId::new(1)),
    (LandmarkId::new(21), TeamId::new(1)),
    (LandmarkId::new(30), TeamId::new(2)),
    (LandmarkId::new(31), TeamId::new(2)),
];

fn three_way() -> EliminationTracker {
    let roster = RosterConfig::new()
        .team(TeamId::new(0), [LandmarkId::new(10), LandmarkId::new(11)])
        .team(TeamId::new(1), [LandmarkId::new(20), LandmarkId::new(21)])
        .team(TeamId::new(2), [LandmarkId::new(30), LandmarkId::new(31)])
        .participant(ParticipantId::new(0), TeamId::new(0), Control::Human)
        .participant(AI, TeamId::new(1), Control::Ai)
        .participant(ParticipantId::new(2), TeamId::new(2), Control::Ai);
    EliminationTracker::new(&roster, TrackerConfig::default()).unwrap()
}

fn scores(tracker: &EliminationTracker) -> Vec<u32> {
    tracker.teams().iter().map(|t| t.score()).collect()
}

proptest! {
    /// Peak counters never decrease, whatever the host samples.
    #[test]
    fn peaks_are_monotonic(samples in prop::collection::vec((0u32..1000, 0u32..1000), 0..50)) {
        let mut tracker = three_way();
        let mut previous = (0u32, 0u32);

        for (buildings, units) in samples {
            tracker.apply(&MatchEvent::tick([PopulationSample::new(AI, buildings, units)]));

            let participant = tracker.participant(AI).unwrap();
            let peaks = (participant.most_buildings(), participant.most_units());
            prop_assert!(peaks.0 >= previous.0);
            prop_assert!(peaks.1 >= previous.1);
            prop_assert!(peaks.0 >= buildings);
            prop_assert!(peaks.1 >= units);
            previous = peaks;
        }
    }

    /// A destruction sequence with duplicates ends in the same state as
    /// the deduplicated sequence.
    #[test]
    fn duplicate_destructions_change_nothing(
        indices in prop::collection::vec(0usize..ALL_LANDMARKS.len(), 0..24),
    ) {
        let mut with_duplicates = three_way();
        let mut deduplicated = three_way();
        let mut seen = Vec::new();

        for index in indices {
            let (landmark, owner) = ALL_LANDMARKS[index];
            with_duplicates.apply(&MatchEvent::landmark_destroyed(landmark, owner));
            if !seen.contains(&index) {
                seen.push(index);
                deduplicated.apply(&MatchEvent::landmark_destroyed(landmark, owner));
            }
        }

        prop_assert_eq!(scores(&with_duplicates), scores(&deduplicated));
        prop_assert_eq!(with_duplicates.outcome(), deduplicated.outcome());
    }

    /// Each applied destruction awards exactly one point to each of the
    /// other teams, so score totals track destroyed flags exactly.
    #[test]
    fn scores_are_conserved(
        indices in prop::collection::vec(0usize..ALL_LANDMARKS.len(), 0..24),
    ) {
        let mut tracker = three_way();
        for index in indices {
            let (landmark, owner) = ALL_LANDMARKS[index];
            tracker.apply(&MatchEvent::landmark_destroyed(landmark, owner));
        }

        let destroyed: usize = tracker.teams().iter().map(|t| t.destroyed_count()).sum();
        let total: u32 = scores(&tracker).iter().sum();
        prop_assert_eq!(total as usize, (3 - 1) * destroyed);
    }

    /// Once a winner is declared, no later event of any kind moves it.
    #[test]
    fn declared_winner_is_stable(
        indices in prop::collection::vec(0usize..ALL_LANDMARKS.len(), 0..24),
        samples in prop::collection::vec((0u32..100, 0u32..100), 0..8),
    ) {
        let mut tracker = three_way();

        // Force a resolution: teams 0 and 1 lose everything.
        for (landmark, owner) in &ALL_LANDMARKS[..4] {
            tracker.apply(&MatchEvent::landmark_destroyed(*landmark, *owner));
        }
        let outcome = tracker.outcome().cloned();
        prop_assert!(outcome.is_some());

        for index in indices {
            let (landmark, owner) = ALL_LANDMARKS[index];
            tracker.apply(&MatchEvent::landmark_destroyed(landmark, owner));
        }
        for (buildings, units) in samples {
            tracker.apply(&MatchEvent::tick([PopulationSample::new(AI, buildings, units)]));
        }

        prop_assert_eq!(tracker.outcome(), outcome.as_ref());
    }

    /// With both peaks at or below their floors, no current counts can
    /// produce a surrender recommendation.
    #[test]
    fn surrender_respects_floors(
        threshold in 1u32..=100,
        peak_buildings in 0u32..=10,
        peak_units in 0u32..=50,
        current_buildings in 0u32..100,
        current_units in 0u32..100,
    ) {
        let config = SurrenderConfig::new(threshold)
            .with_min_buildings_floor(10)
            .with_min_units_floor(50);

        prop_assert!(!config.recommends(
            peak_buildings,
            current_buildings,
            peak_units,
            current_units,
        ));
    }
}
