use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Evaluate every livestock entry of a tank against the others.
    Check(CheckArgs),
    /// Evaluate one new species against an existing tank.
    Candidate(CandidateArgs),
    /// Build and lay out the "who threatens whom" graph of a tank.
    Graph(GraphArgs),
    /// Species-traits catalogue.
    Traits {
        #[command(subcommand)]
        action: TraitsCommands,
    },
    /// Check whether a species can live in a tank's water type.
    Water(WaterArgs),
    /// Dump JSON schema for a public type.
    Schema(SchemaArgs),
}

/// Arguments for `reefc check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Tank description (JSON with volumeLiters, waterType, livestock).
    pub tank: String,
}

/// Arguments for `reefc candidate`.
#[derive(Clone, Debug, Args)]
pub struct CandidateArgs {
    /// Tank description of the existing livestock.
    pub tank: String,
    /// Scientific name of the species to add.
    pub species: String,
    #[arg(long)]
    pub common_name: Option<String>,
    /// fish, coral or invertebrate
    #[arg(long, default_value = "fish")]
    pub category: String,
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
}

/// Arguments for `reefc graph`.
#[derive(Clone, Debug, Args)]
pub struct GraphArgs {
    pub tank: String,
    /// Simulation steps (defaults to `layout.iterations`).
    #[arg(long)]
    pub iterations: Option<u32>,
    /// Jitter seed (defaults to `layout.seed`).
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,
}

/// Catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TraitsCommands {
    /// List trait records.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        water_type: Option<String>,
        /// Case-insensitive substring of genus/family, group name or id.
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a trait record by id.
    Get { id: String },
    /// Show which trait record a species name resolves to.
    Resolve { name: String },
}

/// Arguments for `reefc water`.
#[derive(Clone, Debug, Args)]
pub struct WaterArgs {
    pub species: String,
    /// saltwater, freshwater or brackish
    pub tank_water_type: String,
}

/// Arguments for `reefc schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Types with an exported JSON schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    SpeciesTraits,
    LivestockEntry,
    Finding,
    Report,
}
