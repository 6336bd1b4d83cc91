//! Name-to-trait resolution.
//!
//! Records are ordered once, at index construction, by specificity
//! (species, then genus, then family) and, within one level, by longest match
//! key first. Resolution is then a linear scan returning the first record
//! whose lowercased key is a prefix of the trimmed, lowercased name, so a
//! species-level record always shadows the genus record it extends.

use reef_core::entities::SpeciesTraits;
use reef_core::enums::{Category, WaterType};
use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::error::CompatError;

/// Immutable, specificity-ordered trait catalogue.
#[derive(Debug, Clone, Default)]
pub struct TraitIndex {
    /// Records in resolution order.
    traits: Vec<SpeciesTraits>,
    /// Lowercased, trimmed match keys, parallel to `traits`.
    keys: Vec<String>,
}

/// Catalogue listing filter. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitFilter {
    pub category: Option<Category>,
    pub water_type: Option<WaterType>,
    pub search: Option<String>,
}

impl TraitIndex {
    #[must_use]
    pub fn new(mut traits: Vec<SpeciesTraits>) -> Self {
        // Stable: equal level and key length keep dataset order.
        traits.sort_by_key(|t| {
            (
                t.match_level.specificity_rank(),
                std::cmp::Reverse(t.genus_or_family.trim().len()),
            )
        });
        let keys = traits
            .iter()
            .map(|t| t.genus_or_family.trim().to_lowercase())
            .collect();
        Self { traits, keys }
    }

    /// Load, validate and index a species-traits file.
    ///
    /// # Errors
    ///
    /// See [`dataset::load_traits`].
    pub fn from_path(path: &std::path::Path) -> Result<Self, CompatError> {
        dataset::load_traits(path).map(Self::new)
    }

    /// Resolve a free-text species name. `None` means "unknown species".
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&SpeciesTraits> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.keys
            .iter()
            .position(|key| !key.is_empty() && normalized.starts_with(key.as_str()))
            .map(|idx| &self.traits[idx])
    }

    /// Exact id lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SpeciesTraits> {
        self.traits.iter().find(|t| t.id == id)
    }

    /// Filtered listing sorted by match key.
    #[must_use]
    pub fn list(&self, filter: &TraitFilter) -> Vec<&SpeciesTraits> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&SpeciesTraits> = self
            .traits
            .iter()
            .filter(|t| filter.category.is_none_or(|c| t.category == c))
            .filter(|t| filter.water_type.is_none_or(|w| t.water_type.matches_filter(w)))
            .filter(|t| {
                search.as_deref().is_none_or(|q| {
                    t.genus_or_family.to_lowercase().contains(q)
                        || t.common_group_name.to_lowercase().contains(q)
                        || t.id.to_lowercase().contains(q)
                })
            })
            .collect();

        matches.sort_by(|a, b| a.genus_or_family.cmp(&b.genus_or_family));
        matches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Records in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesTraits> {
        self.traits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::traits;
    use pretty_assertions::assert_eq;
    use reef_core::enums::MatchLevel;

    fn index() -> TraitIndex {
        let mut coral = traits("acropora", "Acropora", MatchLevel::Genus);
        coral.category = Category::Coral;
        let mut fresh = traits("betta", "Betta", MatchLevel::Genus);
        fresh.water_type = WaterType::Freshwater;
        TraitIndex::new(vec![
            traits("pomacentridae", "Pomacentridae", MatchLevel::Family),
            traits("centropyge", "Centropyge", MatchLevel::Genus),
            traits("centropyge_loricula", "Centropyge loricula", MatchLevel::Species),
            coral,
            fresh,
        ])
    }

    #[test]
    fn species_record_shadows_genus() {
        let index = index();
        assert_eq!(
            index.resolve("Centropyge loricula").map(|t| t.id.as_str()),
            Some("centropyge_loricula")
        );
        assert_eq!(
            index.resolve("Centropyge bispinosa").map(|t| t.id.as_str()),
            Some("centropyge")
        );
    }

    #[test]
    fn species_record_wins_even_when_listed_last() {
        let index = TraitIndex::new(vec![
            traits("centropyge", "Centropyge", MatchLevel::Genus),
            traits("centropyge_loricula", "Centropyge loricula", MatchLevel::Species),
        ]);
        assert_eq!(
            index.resolve("centropyge loricula").map(|t| t.id.as_str()),
            Some("centropyge_loricula")
        );
    }

    #[test]
    fn resolution_is_case_and_whitespace_insensitive() {
        let index = index();
        assert_eq!(
            index.resolve("  ACROPORA millepora ").map(|t| t.id.as_str()),
            Some("acropora")
        );
    }

    #[test]
    fn family_key_is_a_fallback() {
        let index = index();
        assert_eq!(
            index.resolve("Pomacentridae sp.").map(|t| t.id.as_str()),
            Some("pomacentridae")
        );
    }

    #[test]
    fn unknown_and_blank_names_are_none() {
        let index = index();
        assert!(index.resolve("Octopus vulgaris").is_none());
        assert!(index.resolve("   ").is_none());
    }

    #[test]
    fn list_filters_and_sorts() {
        let index = index();
        let corals = index.list(&TraitFilter {
            category: Some(Category::Coral),
            ..TraitFilter::default()
        });
        assert_eq!(corals.len(), 1);

        let all: Vec<&str> = index
            .list(&TraitFilter::default())
            .iter()
            .map(|t| t.genus_or_family.as_str())
            .collect();
        assert_eq!(
            all,
            vec![
                "Acropora",
                "Betta",
                "Centropyge",
                "Centropyge loricula",
                "Pomacentridae"
            ]
        );

        let freshwater = index.list(&TraitFilter {
            water_type: Some(WaterType::Freshwater),
            ..TraitFilter::default()
        });
        assert_eq!(freshwater.len(), 1);
        assert_eq!(freshwater[0].id, "betta");

        let searched = index.list(&TraitFilter {
            search: Some("LORICULA".into()),
            ..TraitFilter::default()
        });
        assert_eq!(searched.len(), 1);
    }

    #[test]
    fn both_water_type_records_match_any_filter() {
        let mut euryhaline = traits("monodactylus", "Monodactylus", MatchLevel::Genus);
        euryhaline.water_type = WaterType::Both;
        let index = TraitIndex::new(vec![euryhaline]);
        let listed = index.list(&TraitFilter {
            water_type: Some(WaterType::Freshwater),
            ..TraitFilter::default()
        });
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn get_by_id() {
        let index = index();
        assert!(index.get("betta").is_some());
        assert!(index.get("Betta").is_none());
    }
}
