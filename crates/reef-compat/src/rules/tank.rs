//! Per-entity checks against the tank itself.

use reef_core::entities::{CompatibilityResult, ResolvedEntity, TankProfile};
use reef_core::enums::{RuleId, Severity};

use super::keys;

/// Tank smaller than the species' minimum. Skipped when the volume is unknown.
#[must_use]
pub fn tank_size(entity: &ResolvedEntity, tank: &TankProfile) -> Option<CompatibilityResult> {
    let actual = tank.known_volume()?;
    let required = entity.traits.min_tank_size_liters;
    if actual >= required {
        return None;
    }

    Some(
        CompatibilityResult::single(
            Severity::Incompatible,
            RuleId::TankTooSmall,
            keys::TANK_TOO_SMALL,
            entity.name(),
        )
        .param("species", entity.name())
        .param("required", required)
        .param("actual", actual),
    )
}

/// Species that cannot live in the tank's water. Skipped when the tank's
/// water type is unknown.
#[must_use]
pub fn water_type(entity: &ResolvedEntity, tank: &TankProfile) -> Option<CompatibilityResult> {
    let tank_water = tank.water_type?;
    let species_water = entity.traits.water_type;
    if species_water.admits(tank_water) {
        return None;
    }

    Some(
        CompatibilityResult::single(
            Severity::Incompatible,
            RuleId::WaterTypeMismatch,
            keys::WATER_TYPE_MISMATCH,
            entity.name(),
        )
        .param("species", entity.name())
        .param("speciesWater", species_water)
        .param("tankWater", tank_water),
    )
}
