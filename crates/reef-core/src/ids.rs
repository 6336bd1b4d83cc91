//! Trait id slugs.
//!
//! A trait record without an explicit id is keyed by a URL-safe slug of its
//! match key: lowercase, every run of characters outside `[a-z0-9]` collapsed
//! to a single `_`, leading and trailing `_` removed.

/// Build the slug id for a `genusOrFamily` match key.
#[must_use]
pub fn trait_slug(genus_or_family: &str) -> String {
    let mut slug = String::with_capacity(genus_or_family.len());
    let mut pending_separator = false;

    for ch in genus_or_family.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::trait_slug;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Amphiprion", "amphiprion")]
    #[case("Amphiprion ocellaris", "amphiprion_ocellaris")]
    #[case("  Pomacentridae (damsels) ", "pomacentridae_damsels")]
    #[case("Betta--splendens", "betta_splendens")]
    #[case("Acanthurus/Zebrasoma", "acanthurus_zebrasoma")]
    fn slugs_match_key(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trait_slug(input), expected);
    }

    #[test]
    fn slug_of_symbols_is_empty() {
        assert_eq!(trait_slug("--- ***"), "");
    }
}
