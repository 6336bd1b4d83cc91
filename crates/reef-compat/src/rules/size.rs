//! Size disparity between a hungry large tankmate and a small one.

use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{RuleId, Severity};

use super::keys;

/// Minimum number of size steps between the two for the rule to apply.
pub const SIZE_GAP: u8 = 3;

/// Caution when the larger side is at least [`SIZE_GAP`] classes bigger and
/// eats meat; the larger side is named first.
#[must_use]
pub fn size_disparity(a: &ResolvedEntity, b: &ResolvedEntity) -> Option<CompatibilityResult> {
    let gap = a.traits.size_class.distance(b.traits.size_class);
    if gap < SIZE_GAP {
        return None;
    }

    let (larger, smaller) = if a.traits.size_class > b.traits.size_class {
        (a, b)
    } else {
        (b, a)
    };
    if !larger.traits.diet.eats_tankmates() {
        return None;
    }

    Some(
        CompatibilityResult::pair(
            Severity::Caution,
            RuleId::SizeDisparity,
            keys::SIZE_DISPARITY,
            larger.name(),
            smaller.name(),
        )
        .param("larger", larger.name())
        .param("smaller", smaller.name()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entity, fish};
    use pretty_assertions::assert_eq;
    use reef_core::enums::{Diet, SizeClass, Temperament};
    use rstest::rstest;

    #[rstest]
    #[case(SizeClass::Xlarge, SizeClass::Small, true)]
    #[case(SizeClass::Large, SizeClass::Tiny, true)]
    #[case(SizeClass::Large, SizeClass::Small, false)]
    #[case(SizeClass::Medium, SizeClass::Tiny, false)]
    fn gap_threshold(#[case] big: SizeClass, #[case] small: SizeClass, #[case] fires: bool) {
        let a = fish("Grouper", Temperament::Peaceful, big);
        let b = fish("Chromis", Temperament::Peaceful, small);
        assert_eq!(size_disparity(&a, &b).is_some(), fires);
    }

    #[test]
    fn larger_named_first_regardless_of_order() {
        let a = fish("Grouper", Temperament::Peaceful, SizeClass::Xlarge);
        let b = fish("Chromis", Temperament::Peaceful, SizeClass::Tiny);
        let one = size_disparity(&a, &b).expect("disparity");
        let two = size_disparity(&b, &a).expect("disparity");
        assert_eq!(one, two);
        assert_eq!(one.species_a, "Grouper");
        assert_eq!(one.level, Severity::Caution);
    }

    #[test]
    fn herbivores_are_not_a_threat() {
        let tang = entity("Tang", |t| {
            t.size_class = SizeClass::Xlarge;
            t.diet = Diet::Herbivore;
        });
        let goby = fish("Goby", Temperament::Peaceful, SizeClass::Tiny);
        assert!(size_disparity(&tang, &goby).is_none());
    }
}
