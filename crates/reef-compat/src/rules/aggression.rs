//! Temperament clashes between fish.

use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{Category, RuleId, Severity, Temperament};

use super::keys;

/// Aggressive vs peaceful is incompatible, aggressive vs semi-aggressive is
/// a caution. Only applies when both sides are fish; the aggressive side is
/// always named first.
#[must_use]
pub fn aggression_conflict(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    if a.traits.category != Category::Fish || b.traits.category != Category::Fish {
        return None;
    }

    let (aggressor, target) = match (a.traits.temperament, b.traits.temperament) {
        (Temperament::Aggressive, other) if other != Temperament::Aggressive => (a, b),
        (other, Temperament::Aggressive) if other != Temperament::Aggressive => (b, a),
        _ => return None,
    };

    let (level, key) = match target.traits.temperament {
        Temperament::Peaceful => (Severity::Incompatible, keys::AGGRESSION_INCOMPATIBLE),
        _ => (Severity::Caution, keys::AGGRESSION_CAUTION),
    };

    Some(
        CompatibilityResult::pair(
            level,
            RuleId::AggressionConflict,
            key,
            aggressor.name(),
            target.name(),
        )
        .param("aggressor", aggressor.name())
        .param("target", target.name()),
    )
}
