use reef_core::entities::{CompatibilityReport, CompatibilityResult, LivestockEntry, SpeciesTraits};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `reefc schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}

fn schema(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::SpeciesTraits => schema_for!(SpeciesTraits),
        SchemaType::LivestockEntry => schema_for!(LivestockEntry),
        SchemaType::Finding => schema_for!(CompatibilityResult),
        SchemaType::Report => schema_for!(CompatibilityReport),
    }
}
