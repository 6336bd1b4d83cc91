use std::path::Path;

use reef_core::entities::LivestockEntry;
use reef_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CandidateArgs;
use crate::commands::shared::parse_enum;
use crate::context::AppContext;
use crate::input::TankFile;
use crate::output::output_report;

/// Handle `reefc candidate`.
pub fn handle(args: &CandidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tank = TankFile::read(Path::new(&args.tank))?;
    let candidate = candidate_entry(args)?;
    let report = ctx
        .evaluator()
        .evaluate_with_candidate(&candidate, &tank.livestock, &tank.profile());
    output_report(&report, flags.format)
}

fn candidate_entry(args: &CandidateArgs) -> anyhow::Result<LivestockEntry> {
    if args.species.trim().is_empty() {
        anyhow::bail!("species name must not be empty");
    }
    let category: Category = parse_enum(&args.category, "category")?;
    let mut entry = LivestockEntry::new(args.species.trim(), category).with_quantity(args.quantity);
    if let Some(common_name) = &args.common_name {
        entry = entry.with_common_name(common_name.as_str());
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(species: &str, category: &str) -> CandidateArgs {
        CandidateArgs {
            tank: "tank.json".to_string(),
            species: species.to_string(),
            common_name: Some("Lion".to_string()),
            category: category.to_string(),
            quantity: 2,
        }
    }

    #[test]
    fn builds_entry_from_flags() {
        let entry = candidate_entry(&args(" Pterois volitans ", "fish")).expect("entry");
        assert_eq!(entry.species_name, "Pterois volitans");
        assert_eq!(entry.display_name(), "Lion");
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.category, Category::Fish);
    }

    #[test]
    fn rejects_bad_category_and_blank_species() {
        assert!(candidate_entry(&args("Pterois", "bird")).is_err());
        assert!(candidate_entry(&args("  ", "fish")).is_err());
    }
}
