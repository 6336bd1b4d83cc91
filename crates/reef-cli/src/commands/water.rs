use reef_compat::water::{WaterTypeMismatch, check_species_water_type};
use reef_core::enums::TankWaterType;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WaterArgs;
use crate::commands::shared::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WaterCheck {
    species_name: String,
    tank_water: TankWaterType,
    admitted: bool,
    mismatch: Option<WaterTypeMismatch>,
}

/// Handle `reefc water`.
pub fn handle(args: &WaterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tank_water: TankWaterType = parse_enum(&args.tank_water_type, "tank water type")?;
    let mismatch = check_species_water_type(ctx.index, &args.species, Some(tank_water));
    output(
        &WaterCheck {
            species_name: args.species.clone(),
            tank_water,
            admitted: mismatch.is_none(),
            mismatch,
        },
        flags.format,
    )
}
