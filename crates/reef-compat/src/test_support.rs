//! Builders shared by the unit tests of this crate.

use reef_core::entities::{LivestockEntry, ResolvedEntity, SpeciesTraits};
use reef_core::enums::{Category, Diet, MatchLevel, ReefSafety, SizeClass, Temperament, WaterType};

/// Peaceful, reef-safe, small saltwater fish; tests override what they need.
pub fn traits(id: &str, key: &str, level: MatchLevel) -> SpeciesTraits {
    SpeciesTraits {
        id: id.to_string(),
        genus_or_family: key.to_string(),
        match_level: level,
        common_group_name: key.to_string(),
        category: Category::Fish,
        water_type: WaterType::Saltwater,
        temperament: Temperament::Peaceful,
        reef_safe: ReefSafety::Yes,
        min_tank_size_liters: 40.0,
        diet: Diet::Omnivore,
        size_class: SizeClass::Small,
        territorial: false,
        max_group_conflict: false,
        predator_of: Vec::new(),
    }
}

/// Resolved entity named `name` whose traits are tweaked by `edit`.
pub fn entity(name: &str, edit: impl FnOnce(&mut SpeciesTraits)) -> ResolvedEntity {
    let mut record = traits(&name.to_lowercase().replace(' ', "_"), name, MatchLevel::Genus);
    edit(&mut record);
    let entry = LivestockEntry::new(name, record.category);
    ResolvedEntity::new(entry, record)
}

pub fn fish(name: &str, temperament: Temperament, size: SizeClass) -> ResolvedEntity {
    entity(name, |t| {
        t.temperament = temperament;
        t.size_class = size;
    })
}

pub fn coral(name: &str) -> ResolvedEntity {
    entity(name, |t| {
        t.category = Category::Coral;
        t.diet = Diet::FilterFeeder;
    })
}
