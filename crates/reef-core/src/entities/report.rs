use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CompatibilityResult;
use crate::enums::Severity;

/// Deduplicated, severity-ranked outcome of one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub overall_level: Severity,
    pub results: Vec<CompatibilityResult>,
    /// Species names that matched no trait record, first-seen order.
    pub unknown_species: Vec<String>,
}

impl CompatibilityReport {
    /// Build a report from raw findings in evaluation order.
    ///
    /// Findings sharing `(rule, species_a, species_b)` keep only their first
    /// occurrence; unknown names are deduplicated the same way.
    #[must_use]
    pub fn from_findings(findings: Vec<CompatibilityResult>, unknown_species: Vec<String>) -> Self {
        let mut seen = HashSet::with_capacity(findings.len());
        let results: Vec<CompatibilityResult> = findings
            .into_iter()
            .filter(|finding| seen.insert(finding.dedup_key()))
            .collect();

        let mut seen_names = HashSet::with_capacity(unknown_species.len());
        let unknown_species = unknown_species
            .into_iter()
            .filter(|name| seen_names.insert(name.clone()))
            .collect();

        Self {
            overall_level: Severity::worst(results.iter().map(|r| r.level)),
            results,
            unknown_species,
        }
    }

    /// Combine two reports, `self` first, re-applying deduplication.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut findings = self.results;
        findings.extend(other.results);
        let mut unknown = self.unknown_species;
        unknown.extend(other.unknown_species);
        Self::from_findings(findings, unknown)
    }

    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.overall_level == Severity::Compatible
    }
}
