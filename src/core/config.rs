//! Tracker configuration types.
//!
//! The host integration layer configures the tracker once at match
//! initialization by providing:
//! - `SurrenderConfig`: thresholds for the AI surrender heuristic
//! - `TrackerConfig`: surrender settings plus housing bookkeeping
//!
//! The tracker never hardcodes game data - which entity category counts
//! as population housing, and how much cap each house grants, come from
//! the host.

use serde::{Deserialize, Serialize};

/// Entity category identifier. The host defines what categories exist.
///
/// The tracker doesn't interpret these beyond equality - it only compares
/// event categories against the configured housing category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityCategory(pub u16);

impl EntityCategory {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Thresholds for the AI surrender heuristic.
///
/// An AI is recommended to surrender when its current strength has
/// collapsed below `threshold_percent` of its own peak, provided that
/// peak was ever meaningful (above the floor). The floors prevent false
/// triggers early in a match while peak counts are still near zero.
///
/// `threshold_percent == 0` disables the heuristic entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurrenderConfig {
    /// Percentage of peak strength below which a collapse is recognized.
    /// Zero disables surrender recommendations.
    pub threshold_percent: u32,

    /// Peak building count must exceed this for the building test to arm.
    pub min_buildings_floor: u32,

    /// Peak unit count must exceed this for the unit test to arm.
    pub min_units_floor: u32,
}

impl SurrenderConfig {
    /// Create a config with the given collapse threshold and zero floors.
    #[must_use]
    pub const fn new(threshold_percent: u32) -> Self {
        Self {
            threshold_percent,
            min_buildings_floor: 0,
            min_units_floor: 0,
        }
    }

    /// A config that never recommends surrender.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(0)
    }

    /// Set the peak-buildings floor (builder pattern).
    #[must_use]
    pub const fn with_min_buildings_floor(mut self, floor: u32) -> Self {
        self.min_buildings_floor = floor;
        self
    }

    /// Set the peak-units floor (builder pattern).
    #[must_use]
    pub const fn with_min_units_floor(mut self, floor: u32) -> Self {
        self.min_units_floor = floor;
        self
    }

    /// Is the heuristic switched off?
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.threshold_percent == 0
    }

    /// Evaluate the heuristic against a participant's counters.
    ///
    /// Recommends surrender iff either resource has collapsed below
    /// `threshold_percent` of its peak while that peak sits above its
    /// floor. Comparison is done by cross-multiplication, so no precision
    /// is lost to integer division of the floor value.
    #[must_use]
    pub fn recommends(
        &self,
        most_buildings: u32,
        current_buildings: u32,
        most_units: u32,
        current_units: u32,
    ) -> bool {
        if self.is_disabled() {
            return false;
        }

        let threshold = u64::from(self.threshold_percent);

        // current < peak * threshold / 100, without truncation.
        let buildings_collapsed =
            u64::from(current_buildings) * 100 < u64::from(most_buildings) * threshold;
        let units_collapsed =
            u64::from(current_units) * 100 < u64::from(most_units) * threshold;

        (buildings_collapsed && most_buildings > self.min_buildings_floor)
            || (units_collapsed && most_units > self.min_units_floor)
    }
}

impl Default for SurrenderConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Complete tracker configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// AI surrender thresholds.
    pub surrender: SurrenderConfig,

    /// The entity category the host uses for population housing.
    pub housing_category: EntityCategory,

    /// Population cap granted per finished house. The same amount is
    /// removed when a house is destroyed.
    pub housing_population: u32,
}

impl TrackerConfig {
    /// Create a config with surrender disabled and no housing category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set surrender thresholds (builder pattern).
    #[must_use]
    pub const fn with_surrender(mut self, surrender: SurrenderConfig) -> Self {
        self.surrender = surrender;
        self
    }

    /// Set the housing category and per-house cap amount (builder pattern).
    #[must_use]
    pub const fn with_housing(mut self, category: EntityCategory, population: u32) -> Self {
        self.housing_category = category;
        self.housing_population = population;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            surrender: SurrenderConfig::disabled(),
            housing_category: EntityCategory::new(0),
            housing_population: 0,
        }
    }
}
