use std::path::Path;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::input::TankFile;
use crate::output::output_report;

/// Handle `reefc check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tank = TankFile::read(Path::new(&args.tank))?;
    let report = ctx.evaluator().evaluate_tank(&tank.livestock, &tank.profile());
    output_report(&report, flags.format)
}
