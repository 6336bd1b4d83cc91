//! # reef-config
//!
//! Layered configuration loading for the reef compatibility tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REEFCOMPAT_*` prefix, `__` as separator)
//! 2. Project-level `.reefcompat/config.toml`
//! 3. User-level `~/.config/reefcompat/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REEFCOMPAT_LAYOUT__ITERATIONS` -> `layout.iterations`,
//! `REEFCOMPAT_DATASET__PATH` -> `dataset.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use reef_config::ReefConfig;
//!
//! let config = ReefConfig::load_with_dotenv().expect("config");
//! println!("traits: {}", config.dataset.path);
//! ```

mod dataset;
mod error;
mod general;
mod layout;

pub use dataset::DatasetConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use layout::LayoutConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "REEFCOMPAT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReefConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ReefConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or the merged
    /// layout section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".reefcompat/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reefcompat").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ReefConfig::default();
        assert_eq!(config.dataset.path, "data/species-traits.json");
        assert_eq!(config.layout.iterations, 200);
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: ReefConfig = ReefConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.layout.seed, 42);
    }
}
