//! Records flowing through a compatibility analysis.
//!
//! `SpeciesTraits` is the only long-lived record; everything else is built
//! fresh per analysis call. All structs derive `Serialize`, `Deserialize` and
//! `JsonSchema`, using the dataset's `camelCase` field spelling.

mod finding;
mod livestock;
mod report;
mod traits;

pub use finding::{CompatibilityResult, DedupKey};
pub use livestock::{LivestockEntry, ResolvedEntity, TankProfile};
pub use report::CompatibilityReport;
pub use traits::SpeciesTraits;
