//! Group rule: several of one territorial kind in the same tank.

use std::collections::HashMap;

use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{RuleId, Severity};

use super::keys;

/// Trait ids for which any second individual is incompatible.
pub const SINGLE_MALE_IDS: &[&str] = &["betta"];

/// One finding per territorial, group-conflicting trait id whose summed
/// quantity exceeds one. Groups appear in first-seen order.
#[must_use]
pub fn territorial_duplicates(entities: &[ResolvedEntity]) -> Vec<CompatibilityResult> {
    let mut order: Vec<&ResolvedEntity> = Vec::new();
    let mut totals: HashMap<&str, u64> = HashMap::new();

    for entity in entities {
        let total = totals.entry(entity.traits.id.as_str()).or_insert_with(|| {
            order.push(entity);
            0
        });
        *total += u64::from(entity.entry.quantity);
    }

    order
        .into_iter()
        .filter_map(|first| {
            let traits = &first.traits;
            let count = totals.get(traits.id.as_str()).copied().unwrap_or_default();
            if !(traits.territorial && traits.max_group_conflict && count > 1) {
                return None;
            }

            let (level, key) = if SINGLE_MALE_IDS.contains(&traits.id.as_str()) {
                (Severity::Incompatible, keys::TERRITORIAL_SINGLE_MALE)
            } else {
                (Severity::Caution, keys::TERRITORIAL_DUPLICATES)
            };

            Some(
                CompatibilityResult::single(
                    level,
                    RuleId::TerritorialDuplicates,
                    key,
                    traits.common_group_name.as_str(),
                )
                .param("species", &traits.common_group_name)
                .param("count", count),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entity;
    use pretty_assertions::assert_eq;

    fn dwarf_angel(name: &str, quantity: u32) -> ResolvedEntity {
        let mut e = entity(name, |t| {
            t.id = "centropyge".into();
            t.common_group_name = "Dwarf Angelfish".into();
            t.territorial = true;
            t.max_group_conflict = true;
        });
        e.entry.quantity = quantity;
        e
    }

    #[test]
    fn three_singletons_make_one_finding() {
        let group = vec![
            dwarf_angel("Flame Angel", 1),
            dwarf_angel("Coral Beauty", 1),
            dwarf_angel("Potter's Angel", 1),
        ];
        let findings = territorial_duplicates(&group);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Severity::Caution);
        assert_eq!(findings[0].species_a, "Dwarf Angelfish");
        assert_eq!(findings[0].description_params["count"], "3");
    }

    #[test]
    fn quantity_counts_toward_group() {
        let findings = territorial_duplicates(&[dwarf_angel("Flame Angel", 2)]);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn single_individual_is_fine() {
        assert!(territorial_duplicates(&[dwarf_angel("Flame Angel", 1)]).is_empty());
    }

    #[test]
    fn needs_both_flags() {
        let mut only_territorial = dwarf_angel("Flame Angel", 3);
        only_territorial.traits.max_group_conflict = false;
        assert!(territorial_duplicates(&[only_territorial]).is_empty());
    }

    #[test]
    fn bettas_are_always_incompatible() {
        let betta = |name: &str| {
            entity(name, |t| {
                t.id = "betta".into();
                t.common_group_name = "Bettas".into();
                t.territorial = true;
                t.max_group_conflict = true;
            })
        };
        let findings = territorial_duplicates(&[betta("Blue Betta"), betta("Red Betta")]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Severity::Incompatible);
        assert_eq!(findings[0].description_key, keys::TERRITORIAL_SINGLE_MALE);
    }
}
