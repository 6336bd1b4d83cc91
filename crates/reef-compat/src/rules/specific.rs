//! Hand-maintained conflicts keyed by trait id.
//!
//! Each entry names one trait id and a predicate over the other side of the
//! pair. The table is consulted with either side as the keyed one; entries
//! are tried in order and the first hit wins, so the result does not depend
//! on which side was passed first.

use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{Category, RuleId, Severity, Temperament};

use super::keys;

/// One row of the conflict table.
#[derive(Debug, Clone, Copy)]
pub struct SpecificConflict {
    pub trait_id: &'static str,
    pub level: Severity,
    pub description_key: &'static str,
    /// Whether the non-keyed side is named first (it is the threat).
    pub other_first: bool,
    pub applies_to: fn(keyed: &ResolvedEntity, other: &ResolvedEntity) -> bool,
}

fn non_peaceful_fish(_keyed: &ResolvedEntity, other: &ResolvedEntity) -> bool {
    other.traits.category == Category::Fish && other.traits.temperament != Temperament::Peaceful
}

fn other_coral(keyed: &ResolvedEntity, other: &ResolvedEntity) -> bool {
    other.traits.category == Category::Coral && other.traits.id != keyed.traits.id
}

pub const SPECIFIC_CONFLICTS: &[SpecificConflict] = &[
    // Seahorses are outcompeted and harassed by anything but peaceful fish.
    SpecificConflict {
        trait_id: "hippocampus",
        level: Severity::Incompatible,
        description_key: keys::SPECIFIC_FRAGILE_TANKMATE,
        other_first: true,
        applies_to: non_peaceful_fish,
    },
    // Long sweeper tentacles sting any neighbouring coral.
    SpecificConflict {
        trait_id: "galaxea",
        level: Severity::Caution,
        description_key: keys::SPECIFIC_CORAL_WARFARE,
        other_first: false,
        applies_to: other_coral,
    },
    SpecificConflict {
        trait_id: "euphyllia",
        level: Severity::Caution,
        description_key: keys::SPECIFIC_CORAL_WARFARE,
        other_first: false,
        applies_to: other_coral,
    },
];

fn hit(
    conflict: &SpecificConflict,
    keyed: &ResolvedEntity,
    other: &ResolvedEntity,
) -> Option<CompatibilityResult> {
    if keyed.traits.id != conflict.trait_id || !(conflict.applies_to)(keyed, other) {
        return None;
    }
    let (first, second) = if conflict.other_first {
        (other, keyed)
    } else {
        (keyed, other)
    };
    Some(
        CompatibilityResult::pair(
            conflict.level,
            RuleId::SpecificConflict,
            conflict.description_key,
            first.name(),
            second.name(),
        )
        .param("speciesA", first.name())
        .param("speciesB", second.name()),
    )
}

#[must_use]
pub fn specific_conflict(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    SPECIFIC_CONFLICTS
        .iter()
        .find_map(|conflict| hit(conflict, a, b).or_else(|| hit(conflict, b, a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{coral, entity, fish};
    use pretty_assertions::assert_eq;
    use reef_core::enums::SizeClass;

    fn seahorse() -> ResolvedEntity {
        entity("Seahorse", |t| t.id = "hippocampus".into())
    }

    fn keyed_coral(name: &str, id: &str) -> ResolvedEntity {
        let mut c = coral(name);
        c.traits.id = id.to_string();
        c
    }

    #[test]
    fn seahorse_conflict_is_symmetric() {
        let damsel = fish("Damsel", Temperament::SemiAggressive, SizeClass::Small);
        let one = specific_conflict(&seahorse(), &damsel).expect("conflict");
        let two = specific_conflict(&damsel, &seahorse()).expect("conflict");
        assert_eq!(one, two);
        assert_eq!(one.level, Severity::Incompatible);
        assert_eq!(one.species_a, "Damsel");
        assert_eq!(one.species_b.as_deref(), Some("Seahorse"));
    }

    #[test]
    fn seahorse_with_peaceful_fish_is_fine() {
        let goby = fish("Goby", Temperament::Peaceful, SizeClass::Small);
        assert!(specific_conflict(&seahorse(), &goby).is_none());
    }

    #[test]
    fn sweeper_coral_against_other_coral() {
        let galaxea = keyed_coral("Galaxy coral", "galaxea");
        let zoa = coral("Zoanthid");
        let one = specific_conflict(&galaxea, &zoa).expect("coral warfare");
        let two = specific_conflict(&zoa, &galaxea).expect("coral warfare");
        assert_eq!(one, two);
        assert_eq!(one.level, Severity::Caution);
        assert_eq!(one.species_a, "Galaxy coral");
    }

    #[test]
    fn two_keyed_corals_resolve_by_table_order() {
        let galaxea = keyed_coral("Galaxy coral", "galaxea");
        let torch = keyed_coral("Torch coral", "euphyllia");
        let one = specific_conflict(&galaxea, &torch).expect("conflict");
        let two = specific_conflict(&torch, &galaxea).expect("conflict");
        assert_eq!(one, two);
        assert_eq!(one.species_a, "Galaxy coral");
    }

    #[test]
    fn same_species_frags_do_not_fight() {
        let a = keyed_coral("Galaxy coral A", "galaxea");
        let b = keyed_coral("Galaxy coral B", "galaxea");
        assert!(specific_conflict(&a, &b).is_none());
    }

    #[test]
    fn sweeper_coral_ignores_fish() {
        let galaxea = keyed_coral("Galaxy coral", "galaxea");
        let goby = fish("Goby", Temperament::Aggressive, SizeClass::Small);
        assert!(specific_conflict(&galaxea, &goby).is_none());
    }
}
