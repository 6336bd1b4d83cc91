//! Tank description files.

use std::path::Path;

use anyhow::Context;
use reef_core::entities::{LivestockEntry, TankProfile};
use reef_core::enums::TankWaterType;
use serde::Deserialize;

/// `{ "volumeLiters": 200, "waterType": "saltwater", "livestock": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankFile {
    #[serde(default)]
    pub volume_liters: Option<f64>,
    #[serde(default)]
    pub water_type: Option<TankWaterType>,
    #[serde(default)]
    pub livestock: Vec<LivestockEntry>,
}

impl TankFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tank file {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("invalid tank file {}", path.display()))
    }

    pub fn parse(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn profile(&self) -> TankProfile {
        TankProfile::new(self.volume_liters.unwrap_or_default(), self.water_type)
    }
}
