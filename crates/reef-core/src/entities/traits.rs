use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Diet, MatchLevel, ReefSafety, SizeClass, Temperament, WaterType};

/// Canonical husbandry profile for a species, genus or family.
///
/// `genus_or_family` is the match key: a livestock name resolves to this
/// record when the lowercased name starts with the lowercased key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesTraits {
    /// Slug id; generated from `genus_or_family` when the dataset omits it.
    #[serde(default)]
    pub id: String,
    pub genus_or_family: String,
    #[serde(default)]
    pub match_level: MatchLevel,
    pub common_group_name: String,
    pub category: Category,
    pub water_type: WaterType,
    pub temperament: Temperament,
    pub reef_safe: ReefSafety,
    pub min_tank_size_liters: f64,
    pub diet: Diet,
    pub size_class: SizeClass,
    #[serde(default)]
    pub territorial: bool,
    /// Several of this kind in one tank fight each other.
    #[serde(default)]
    pub max_group_conflict: bool,
    /// Opaque prey tags such as `small_fish` or `snails`.
    #[serde(default)]
    pub predator_of: Vec<String>,
}
