//! Species-traits dataset location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("data/species-traits.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path of the species-traits JSON file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
