//! Coral safety of non-coral tankmates.
//!
//! The check is directional (grazer first, coral second) and the pair
//! tables run it both ways, so a coral with a coral-nipping fish yields
//! exactly one finding whichever order the pair arrives in.

use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{Category, Diet, ReefSafety, RuleId, Severity};

use super::keys;

/// `grazer` is the non-coral side, `coral` the coral side.
#[must_use]
pub fn reef_safety(grazer: &ResolvedEntity, coral: &ResolvedEntity) -> Option<CompatibilityResult> {
    if coral.traits.category != Category::Coral || grazer.traits.category == Category::Coral {
        return None;
    }

    let (level, key) = if grazer.traits.diet == Diet::Corallivore {
        (Severity::Incompatible, keys::REEF_CORALLIVORE)
    } else {
        match grazer.traits.reef_safe {
            ReefSafety::No => (Severity::Incompatible, keys::REEF_UNSAFE),
            ReefSafety::Caution => (Severity::Caution, keys::REEF_CAUTION),
            ReefSafety::Yes => return None,
        }
    };

    Some(
        CompatibilityResult::pair(level, RuleId::ReefSafety, key, grazer.name(), coral.name())
            .param("species", grazer.name())
            .param("coral", coral.name()),
    )
}

#[must_use]
pub fn reef_safety_forward(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    reef_safety(a, b)
}

#[must_use]
pub fn reef_safety_reverse(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    reef_safety(b, a)
}
