use reef_compat::TraitFilter;
use reef_core::entities::SpeciesTraits;
use reef_core::errors::CoreError;
use serde::Serialize;

use crate::cli::{GlobalFlags, TraitsCommands};
use crate::commands::shared::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    name: &'a str,
    resolved: Option<&'a SpeciesTraits>,
}

/// Handle `reefc traits`.
pub fn handle(action: &TraitsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TraitsCommands::List {
            category,
            water_type,
            search,
        } => {
            let filter = TraitFilter {
                category: category
                    .as_deref()
                    .map(|raw| parse_enum(raw, "category"))
                    .transpose()?,
                water_type: water_type
                    .as_deref()
                    .map(|raw| parse_enum(raw, "water type"))
                    .transpose()?,
                search: search.clone(),
            };
            let rows = ctx.index.list(&filter);
            let limit = flags.limit.unwrap_or(ctx.config.general.default_limit);
            output(&first_rows(rows, limit)?, flags.format)
        }
        TraitsCommands::Get { id } => {
            let record = ctx.index.get(id).ok_or_else(|| CoreError::NotFound {
                entity_type: "species trait".to_string(),
                id: id.clone(),
            })?;
            output(record, flags.format)
        }
        TraitsCommands::Resolve { name } => {
            let resolved = ctx.index.resolve(name);
            if resolved.is_none() {
                tracing::debug!(%name, "no trait record matches");
            }
            output(&Resolved { name, resolved }, flags.format)
        }
    }
}

/// Keep at most `limit` rows.
fn first_rows<T>(mut rows: Vec<T>, limit: u32) -> anyhow::Result<Vec<T>> {
    rows.truncate(usize::try_from(limit)?);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_rows_truncates() {
        assert_eq!(first_rows(vec![1, 2, 3], 2).expect("fits"), vec![1, 2]);
        assert_eq!(first_rows(vec![1, 2], 5).expect("fits"), vec![1, 2]);
        assert!(first_rows(vec![1], 0).expect("fits").is_empty());
    }
}
