//! The fixed rule set.
//!
//! Every rule is a pure function returning zero or one finding. Rules of the
//! same arity share one signature and are invoked from the ordered tables
//! below, so the evaluation order (and with it the order of findings) never
//! changes between calls.

pub mod aggression;
pub mod predation;
pub mod reef;
pub mod size;
pub mod specific;
pub mod tank;
pub mod territorial;

use reef_core::entities::{CompatibilityResult, ResolvedEntity, TankProfile};

/// Check of one entity against the tank.
pub type EntityRule = fn(&ResolvedEntity, &TankProfile) -> Option<CompatibilityResult>;

/// Check of an unordered pair; the finding carries the direction.
pub type PairRule = fn(&ResolvedEntity, &ResolvedEntity) -> Option<CompatibilityResult>;

/// Per-entity rules for a full-tank check.
pub const TANK_ENTITY_RULES: &[EntityRule] = &[tank::tank_size, tank::water_type];

/// Per-entity rules for a candidate joining an existing tank.
pub const CANDIDATE_ENTITY_RULES: &[EntityRule] = &[tank::water_type, tank::tank_size];

/// Pairwise rules, in evaluation order.
pub const PAIR_RULES: &[PairRule] = &[
    aggression::aggression_conflict,
    reef::reef_safety_forward,
    reef::reef_safety_reverse,
    predation::predator_prey,
    size::size_disparity,
    specific::specific_conflict,
];

/// Message keys handed to the external translator.
pub mod keys {
    pub const AGGRESSION_INCOMPATIBLE: &str = "compat.aggression.incompatible";
    pub const AGGRESSION_CAUTION: &str = "compat.aggression.caution";
    pub const REEF_CORALLIVORE: &str = "compat.reef.corallivore";
    pub const REEF_UNSAFE: &str = "compat.reef.unsafe";
    pub const REEF_CAUTION: &str = "compat.reef.caution";
    pub const TANK_TOO_SMALL: &str = "compat.tank_too_small";
    pub const WATER_TYPE_MISMATCH: &str = "compat.water_type_mismatch";
    pub const PREDATOR_PREY: &str = "compat.predator_prey";
    pub const SIZE_DISPARITY: &str = "compat.size_disparity";
    pub const SPECIFIC_FRAGILE_TANKMATE: &str = "compat.specific.fragile_tankmate";
    pub const SPECIFIC_CORAL_WARFARE: &str = "compat.specific.coral_warfare";
    pub const TERRITORIAL_SINGLE_MALE: &str = "compat.territorial.single_male";
    pub const TERRITORIAL_DUPLICATES: &str = "compat.territorial.duplicates";
}

/// Entity checks for every entity, in `rules` order.
#[must_use]
pub fn entity_findings(
    entity: &ResolvedEntity,
    tank: &TankProfile,
    rules: &[EntityRule],
) -> Vec<CompatibilityResult> {
    rules.iter().filter_map(|rule| rule(entity, tank)).collect()
}

/// Every pairwise rule over one pair, in [`PAIR_RULES`] order.
#[must_use]
pub fn pair_findings(a: &ResolvedEntity, b: &ResolvedEntity) -> Vec<CompatibilityResult> {
    PAIR_RULES.iter().filter_map(|rule| rule(a, b)).collect()
}
