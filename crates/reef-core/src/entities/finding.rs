use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RuleId, Severity};

/// One rule's output for a single entity or an ordered pair of entities.
///
/// When `species_b` is `None` the finding concerns `species_a` alone
/// (tank size, water type, territorial group). Otherwise the pair is ordered
/// by direction: aggressor, larger or predator first.
///
/// Prose is never produced here: `description_key` plus
/// `description_params` are handed to an external message formatter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub level: Severity,
    pub rule: RuleId,
    pub description_key: String,
    #[serde(default)]
    pub description_params: BTreeMap<String, String>,
    pub species_a: String,
    #[serde(default)]
    pub species_b: Option<String>,
}

/// Composite identity used to drop repeated findings.
pub type DedupKey = (RuleId, String, String);

impl CompatibilityResult {
    /// Finding about a single entity.
    #[must_use]
    pub fn single(
        level: Severity,
        rule: RuleId,
        description_key: &str,
        species: impl Into<String>,
    ) -> Self {
        Self {
            level,
            rule,
            description_key: description_key.to_string(),
            description_params: BTreeMap::new(),
            species_a: species.into(),
            species_b: None,
        }
    }

    /// Directed finding about a pair, `primary` first.
    #[must_use]
    pub fn pair(
        level: Severity,
        rule: RuleId,
        description_key: &str,
        primary: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            species_b: Some(target.into()),
            ..Self::single(level, rule, description_key, primary)
        }
    }

    /// Attach one substitution parameter.
    #[must_use]
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.description_params
            .insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        (
            self.rule,
            self.species_a.clone(),
            self.species_b.clone().unwrap_or_default(),
        )
    }

    #[must_use]
    pub const fn is_pairwise(&self) -> bool {
        self.species_b.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_finding_has_no_target() {
        let finding = CompatibilityResult::single(
            Severity::Incompatible,
            RuleId::TankTooSmall,
            "compat.tank_too_small",
            "Yellow Tang",
        )
        .param("required", 380)
        .param("actual", 200);

        assert!(!finding.is_pairwise());
        assert_eq!(
            finding.dedup_key(),
            (RuleId::TankTooSmall, "Yellow Tang".to_string(), String::new())
        );
        assert_eq!(finding.description_params["required"], "380");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let finding = CompatibilityResult::pair(
            Severity::Caution,
            RuleId::SizeDisparity,
            "compat.size_disparity",
            "Lionfish",
            "Goby",
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["speciesA"], "Lionfish");
        assert_eq!(json["speciesB"], "Goby");
        assert_eq!(json["rule"], "size_disparity");
        assert_eq!(json["level"], "caution");
        assert_eq!(json["descriptionKey"], "compat.size_disparity");
    }
}
