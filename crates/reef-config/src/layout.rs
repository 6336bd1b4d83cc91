//! Force-directed layout tuning.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_width() -> f64 {
    600.0
}
const fn default_height() -> f64 {
    400.0
}
const fn default_padding() -> f64 {
    40.0
}
const fn default_node_radius() -> f64 {
    24.0
}
const fn default_iterations() -> u32 {
    200
}
const fn default_seed() -> u64 {
    42
}
const fn default_repulsion() -> f64 {
    5000.0
}
const fn default_spring() -> f64 {
    0.02
}
const fn default_centering() -> f64 {
    0.01
}
const fn default_damping() -> f64 {
    0.85
}
const fn default_jitter() -> f64 {
    0.2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Simulation area width (excluding padding).
    #[serde(default = "default_width")]
    pub width: f64,

    /// Simulation area height (excluding padding).
    #[serde(default = "default_height")]
    pub height: f64,

    /// Offset added to every output position.
    #[serde(default = "default_padding")]
    pub padding: f64,

    #[serde(default = "default_node_radius")]
    pub node_radius: f64,

    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Seed for the initial angular jitter.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Inverse-square repulsion strength.
    #[serde(default = "default_repulsion")]
    pub repulsion: f64,

    /// Spring constant along edges.
    #[serde(default = "default_spring")]
    pub spring: f64,

    /// Pull toward the canvas centre.
    #[serde(default = "default_centering")]
    pub centering: f64,

    /// Velocity multiplier applied every iteration, in `(0, 1)`.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Maximum initial angular jitter in radians.
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            node_radius: default_node_radius(),
            iterations: default_iterations(),
            seed: default_seed(),
            repulsion: default_repulsion(),
            spring: default_spring(),
            centering: default_centering(),
            damping: default_damping(),
            jitter: default_jitter(),
        }
    }
}

impl LayoutConfig {
    /// Reject values the simulation cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0) {
            return Err(invalid("layout.width", "must be positive"));
        }
        if !(self.height > 0.0) {
            return Err(invalid("layout.height", "must be positive"));
        }
        if self.padding < 0.0 {
            return Err(invalid("layout.padding", "must not be negative"));
        }
        if self.node_radius < 0.0 {
            return Err(invalid("layout.node_radius", "must not be negative"));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(invalid("layout.damping", "must be between 0 and 1 (exclusive)"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.iterations, 200);
        assert!((config.width - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_damping_of_one() {
        let config = LayoutConfig {
            damping: 1.0,
            ..LayoutConfig::default()
        };
        let err = config.validate().expect_err("damping 1.0 must be rejected");
        assert!(err.to_string().contains("layout.damping"));
    }

    #[test]
    fn rejects_zero_width() {
        let config = LayoutConfig {
            width: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_height() {
        let config = LayoutConfig {
            height: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
