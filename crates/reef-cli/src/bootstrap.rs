use std::path::PathBuf;

use anyhow::Context;
use reef_compat::TraitIndex;
use reef_config::ReefConfig;

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<ReefConfig> {
    ReefConfig::load_with_dotenv().context("failed to load reefcompat configuration")
}

/// Load the species-traits dataset and install it as the process-wide index.
pub fn load_index(config: &ReefConfig, flags: &GlobalFlags) -> anyhow::Result<&'static TraitIndex> {
    let path = dataset_path(config, flags);
    let index = TraitIndex::from_path(&path)
        .with_context(|| format!("failed to load species traits from {}", path.display()))?;
    if index.is_empty() {
        tracing::warn!(path = %path.display(), "species-traits dataset is empty; every species will be unknown");
    }

    reef_compat::dataset::install_global(index).map_err(anyhow::Error::from)
}

fn dataset_path(config: &ReefConfig, flags: &GlobalFlags) -> PathBuf {
    flags
        .dataset
        .as_deref()
        .map_or_else(|| PathBuf::from(&config.dataset.path), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;

    fn flags(dataset: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            dataset: dataset.map(str::to_string),
        }
    }

    #[test]
    fn flag_overrides_configured_dataset() {
        let config = ReefConfig::default();
        assert_eq!(
            dataset_path(&config, &flags(Some("/tmp/custom.json"))),
            PathBuf::from("/tmp/custom.json")
        );
        assert_eq!(
            dataset_path(&config, &flags(None)),
            PathBuf::from("data/species-traits.json")
        );
    }
}
