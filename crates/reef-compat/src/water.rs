//! Water-type admission check for adding one species to a tank.
//!
//! Unknown species are let through: the check only rejects what the trait
//! dataset positively says cannot live in the tank's water.

use reef_core::enums::{TankWaterType, WaterType};
use serde::{Deserialize, Serialize};

use crate::resolver::TraitIndex;

/// A species whose water type the tank cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterTypeMismatch {
    pub species_name: String,
    pub species_water: WaterType,
    pub tank_water: TankWaterType,
}

/// `None` when the species may be added (or is unknown), else the mismatch.
#[must_use]
pub fn check_species_water_type(
    index: &TraitIndex,
    species_name: &str,
    tank_water: Option<TankWaterType>,
) -> Option<WaterTypeMismatch> {
    let tank_water = tank_water?;
    let traits = index.resolve(species_name)?;
    if traits.water_type.admits(tank_water) {
        return None;
    }

    Some(WaterTypeMismatch {
        species_name: species_name.to_string(),
        species_water: traits.water_type,
        tank_water,
    })
}
