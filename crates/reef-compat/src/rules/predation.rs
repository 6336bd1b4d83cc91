//! Predator/prey detection from prey tags.
//!
//! The tag vocabulary is closed: `small_fish`, `small_shrimp`, `small_crabs`
//! and `snails`. Unrecognized tags never match.

use reef_core::entities::{CompatibilityResult, ResolvedEntity, SpeciesTraits};
use reef_core::enums::{Category, RuleId, Severity, SizeClass};

use super::keys;

/// A recognized prey tag and the tankmates it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreyTag {
    /// Fish no larger than `small`.
    SmallFish,
    /// Invertebrates no larger than `small`.
    SmallShrimp,
    /// Invertebrates no larger than `small`.
    SmallCrabs,
    /// Invertebrates no larger than `medium`.
    Snails,
}

impl PreyTag {
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "small_fish" => Some(Self::SmallFish),
            "small_shrimp" => Some(Self::SmallShrimp),
            "small_crabs" => Some(Self::SmallCrabs),
            "snails" => Some(Self::Snails),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallFish => "small_fish",
            Self::SmallShrimp => "small_shrimp",
            Self::SmallCrabs => "small_crabs",
            Self::Snails => "snails",
        }
    }

    /// Whether `prey` falls under this tag.
    #[must_use]
    pub fn matches(self, prey: &ResolvedEntity) -> bool {
        let (category, largest) = match self {
            Self::SmallFish => (Category::Fish, SizeClass::Small),
            Self::SmallShrimp | Self::SmallCrabs => (Category::Invertebrate, SizeClass::Small),
            Self::Snails => (Category::Invertebrate, SizeClass::Medium),
        };
        prey.traits.category == category && prey.traits.size_class <= largest
    }
}

/// Tags of `traits` outside the known vocabulary.
#[must_use]
pub fn unknown_prey_tags(traits: &SpeciesTraits) -> Vec<&str> {
    traits
        .predator_of
        .iter()
        .map(String::as_str)
        .filter(|raw| PreyTag::parse(raw).is_none())
        .collect()
}

/// First of `predator`'s tags that covers `prey`.
fn first_prey_tag(predator: &ResolvedEntity, prey: &ResolvedEntity) -> Option<PreyTag> {
    predator
        .traits
        .predator_of
        .iter()
        .find_map(|raw| PreyTag::parse(raw).filter(|tag| tag.matches(prey)))
}

/// At most one finding per pair: `a`'s tags against `b`, then `b`'s against
/// `a`. When both hunt each other the pair is oriented by trait id and name
/// so the finding does not depend on argument order.
#[must_use]
pub fn predator_prey(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    let (predator, prey, tag) = match (first_prey_tag(a, b), first_prey_tag(b, a)) {
        (Some(tag), None) => (a, b, tag),
        (None, Some(tag)) => (b, a, tag),
        (Some(forward), Some(backward)) => {
            if (&a.traits.id, a.name()) <= (&b.traits.id, b.name()) {
                (a, b, forward)
            } else {
                (b, a, backward)
            }
        }
        (None, None) => return None,
    };

    Some(
        CompatibilityResult::pair(
            Severity::Incompatible,
            RuleId::PredatorPrey,
            keys::PREDATOR_PREY,
            predator.name(),
            prey.name(),
        )
        .param("predator", predator.name())
        .param("prey", prey.name())
        .param("tag", tag.as_str()),
    )
}
