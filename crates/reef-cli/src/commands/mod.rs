pub mod candidate;
pub mod check;
pub mod graph;
pub mod schema;
pub mod shared;
pub mod traits;
pub mod water;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => check::handle(args, ctx, flags),
        Commands::Candidate(args) => candidate::handle(args, ctx, flags),
        Commands::Graph(args) => graph::handle(args, ctx, flags),
        Commands::Traits { action } => traits::handle(action, ctx, flags),
        Commands::Water(args) => water::handle(args, ctx, flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
