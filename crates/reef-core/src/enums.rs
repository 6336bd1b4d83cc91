//! Trait enums, severities and rule identifiers.
//!
//! Trait enums serialize the way the species-traits dataset spells them
//! (`semi-aggressive`, `filter-feeder`); everything produced by the analysis
//! (severities, rule ids) uses `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Broad livestock category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fish,
    Coral,
    Invertebrate,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Coral => "coral",
            Self::Invertebrate => "invertebrate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WaterType / TankWaterType
// ---------------------------------------------------------------------------

/// Water type a species can be kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WaterType {
    Saltwater,
    Freshwater,
    Both,
}

impl WaterType {
    /// Whether a species of this water type can live in a tank of `tank`.
    #[must_use]
    pub fn admits(self, tank: TankWaterType) -> bool {
        match self {
            Self::Both => true,
            Self::Saltwater => tank == TankWaterType::Saltwater,
            Self::Freshwater => tank == TankWaterType::Freshwater,
        }
    }

    /// Whether this record should be listed under a `tank` water-type filter.
    #[must_use]
    pub fn matches_filter(self, filter: Self) -> bool {
        self == Self::Both || self == filter
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saltwater => "saltwater",
            Self::Freshwater => "freshwater",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water type of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TankWaterType {
    Saltwater,
    Freshwater,
    Brackish,
}

impl TankWaterType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saltwater => "saltwater",
            Self::Freshwater => "freshwater",
            Self::Brackish => "brackish",
        }
    }
}

impl fmt::Display for TankWaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Temperament
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Temperament {
    Peaceful,
    SemiAggressive,
    Aggressive,
}

impl Temperament {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Peaceful => "peaceful",
            Self::SemiAggressive => "semi-aggressive",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReefSafety
// ---------------------------------------------------------------------------

/// Whether a species leaves corals alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReefSafety {
    Yes,
    Caution,
    No,
}

impl ReefSafety {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Caution => "caution",
            Self::No => "no",
        }
    }
}

impl fmt::Display for ReefSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Diet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
    FilterFeeder,
    Corallivore,
}

impl Diet {
    /// Carnivores and omnivores will eat tankmates that fit in their mouth.
    #[must_use]
    pub const fn eats_tankmates(self) -> bool {
        matches!(self, Self::Carnivore | Self::Omnivore)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Herbivore => "herbivore",
            Self::Carnivore => "carnivore",
            Self::Omnivore => "omnivore",
            Self::FilterFeeder => "filter-feeder",
            Self::Corallivore => "corallivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SizeClass
// ---------------------------------------------------------------------------

/// Adult size class, ordered `tiny < small < medium < large < xlarge`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl SizeClass {
    /// Position on the five-level scale, starting at 0 for `tiny`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Tiny => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
            Self::Xlarge => 4,
        }
    }

    /// Absolute number of size steps between two classes.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchLevel
// ---------------------------------------------------------------------------

/// How specific a trait record's match key is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Species,
    #[default]
    Genus,
    Family,
}

impl MatchLevel {
    /// Lower ranks are tried first during resolution.
    #[must_use]
    pub const fn specificity_rank(self) -> u8 {
        match self {
            Self::Species => 0,
            Self::Genus => 1,
            Self::Family => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Genus => "genus",
            Self::Family => "family",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Outcome level of a finding or a whole report.
///
/// ```text
/// compatible < caution < incompatible
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Compatible,
    Caution,
    Incompatible,
}

impl Severity {
    /// Worst severity of a sequence; `Compatible` when empty.
    pub fn worst<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        levels.into_iter().max().unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::Caution => "caution",
            Self::Incompatible => "incompatible",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RuleId
// ---------------------------------------------------------------------------

/// Identifier of the rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    AggressionConflict,
    ReefSafety,
    TankTooSmall,
    WaterTypeMismatch,
    PredatorPrey,
    SizeDisparity,
    SpecificConflict,
    TerritorialDuplicates,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AggressionConflict => "aggression_conflict",
            Self::ReefSafety => "reef_safety",
            Self::TankTooSmall => "tank_too_small",
            Self::WaterTypeMismatch => "water_type_mismatch",
            Self::PredatorPrey => "predator_prey",
            Self::SizeDisparity => "size_disparity",
            Self::SpecificConflict => "specific_conflict",
            Self::TerritorialDuplicates => "territorial_duplicates",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
