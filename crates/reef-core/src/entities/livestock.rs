use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SpeciesTraits;
use crate::enums::{Category, TankWaterType};

const ALIVE: &str = "alive";

const fn default_quantity() -> u32 {
    1
}

/// One line of a tank's livestock list, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LivestockEntry {
    /// Free-text scientific name, used for trait lookup.
    pub species_name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    pub category: Category,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Life status; anything other than `alive` (or absent) is ignored.
    #[serde(default)]
    pub status: Option<String>,
}

impl LivestockEntry {
    #[must_use]
    pub fn new(species_name: impl Into<String>, category: Category) -> Self {
        Self {
            species_name: species_name.into(),
            common_name: None,
            category,
            quantity: 1,
            status: None,
        }
    }

    #[must_use]
    pub fn with_common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = Some(common_name.into());
        self
    }

    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Whether this entry takes part in the analysis.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| status.trim().eq_ignore_ascii_case(ALIVE))
    }

    /// Common name when present and non-blank, else the species name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.common_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.species_name,
        }
    }
}

/// A livestock entry joined to the trait record it resolved to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    pub entry: LivestockEntry,
    pub traits: SpeciesTraits,
    pub display_name: String,
}

impl ResolvedEntity {
    #[must_use]
    pub fn new(entry: LivestockEntry, traits: SpeciesTraits) -> Self {
        let display_name = entry.display_name().to_string();
        Self {
            entry,
            traits,
            display_name,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.display_name
    }
}

/// Tank context for the per-entity rules.
///
/// A non-positive volume or a missing water type means "unknown" and
/// suppresses the corresponding rule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TankProfile {
    #[serde(default)]
    pub volume_liters: f64,
    #[serde(default)]
    pub water_type: Option<TankWaterType>,
}

impl TankProfile {
    #[must_use]
    pub const fn new(volume_liters: f64, water_type: Option<TankWaterType>) -> Self {
        Self {
            volume_liters,
            water_type,
        }
    }

    /// Volume when known.
    #[must_use]
    pub fn known_volume(&self) -> Option<f64> {
        (self.volume_liters > 0.0).then_some(self.volume_liters)
    }
}
