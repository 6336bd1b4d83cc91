//! Evaluation engine: resolution, rule sequencing and report assembly.
//!
//! Full-tank order: per-entity rules for every entity, then every pair
//! `(i, j)` with `i < j`, then the group rule. Candidate order: per-entity
//! rules for the candidate, then the candidate paired with each existing
//! entity, then the group rule over existing plus candidate.

use reef_core::entities::{
    CompatibilityReport, CompatibilityResult, LivestockEntry, ResolvedEntity, TankProfile,
};

use crate::resolver::TraitIndex;
use crate::rules::{self, territorial::territorial_duplicates};

/// Entries split into resolved entities and unknown species names.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub resolved: Vec<ResolvedEntity>,
    pub unknown: Vec<String>,
}

/// Runs the rule set against a trait index.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    index: &'a TraitIndex,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(index: &'a TraitIndex) -> Self {
        Self { index }
    }

    /// Resolve every alive entry; entries with another status are dropped.
    #[must_use]
    pub fn resolve(&self, entries: &[LivestockEntry]) -> Resolution {
        let mut resolution = Resolution::default();
        for entry in entries.iter().filter(|e| e.is_alive()) {
            match self.index.resolve(&entry.species_name) {
                Some(traits) => resolution
                    .resolved
                    .push(ResolvedEntity::new(entry.clone(), traits.clone())),
                None => {
                    tracing::trace!(species = %entry.species_name, "no trait record matches");
                    resolution.unknown.push(entry.species_name.clone());
                }
            }
        }
        resolution
    }

    /// Evaluate a whole tank against itself.
    #[must_use]
    pub fn evaluate_tank(
        &self,
        entries: &[LivestockEntry],
        tank: &TankProfile,
    ) -> CompatibilityReport {
        let resolution = self.resolve(entries);
        let findings = tank_findings(&resolution.resolved, tank);
        let report = CompatibilityReport::from_findings(findings, resolution.unknown);
        tracing::debug!(
            entries = entries.len(),
            resolved = resolution.resolved.len(),
            findings = report.results.len(),
            overall = %report.overall_level,
            "evaluated tank"
        );
        report
    }

    /// Evaluate one new entry against an existing tank.
    ///
    /// An unresolvable candidate is reported as unknown; only the group rule
    /// over the existing livestock runs in that case. A candidate that is not
    /// alive takes no part at all.
    #[must_use]
    pub fn evaluate_candidate(
        &self,
        candidate: &LivestockEntry,
        existing: &[LivestockEntry],
        tank: &TankProfile,
    ) -> CompatibilityReport {
        let mut resolution = self.resolve(existing);
        let findings = if candidate.is_alive() {
            match self.index.resolve(&candidate.species_name) {
                Some(traits) => {
                    let candidate = ResolvedEntity::new(candidate.clone(), traits.clone());
                    candidate_findings(&candidate, &resolution.resolved, tank)
                }
                None => {
                    resolution.unknown.insert(0, candidate.species_name.clone());
                    territorial_duplicates(&resolution.resolved)
                }
            }
        } else {
            territorial_duplicates(&resolution.resolved)
        };

        let report = CompatibilityReport::from_findings(findings, resolution.unknown);
        tracing::debug!(
            candidate = %candidate.species_name,
            existing = existing.len(),
            findings = report.results.len(),
            overall = %report.overall_level,
            "evaluated candidate"
        );
        report
    }

    /// Candidate check merged with the full-tank check of existing plus
    /// candidate. Findings both paths produce appear once.
    #[must_use]
    pub fn evaluate_with_candidate(
        &self,
        candidate: &LivestockEntry,
        existing: &[LivestockEntry],
        tank: &TankProfile,
    ) -> CompatibilityReport {
        let inline = self.evaluate_candidate(candidate, existing, tank);
        let mut combined = existing.to_vec();
        combined.push(candidate.clone());
        inline.merge(self.evaluate_tank(&combined, tank))
    }
}

/// Raw findings for an already resolved tank, in full-tank order.
#[must_use]
pub fn tank_findings(entities: &[ResolvedEntity], tank: &TankProfile) -> Vec<CompatibilityResult> {
    let mut findings: Vec<CompatibilityResult> = entities
        .iter()
        .flat_map(|entity| rules::entity_findings(entity, tank, rules::TANK_ENTITY_RULES))
        .collect();
    findings.extend(pairwise_findings(entities));
    findings.extend(territorial_duplicates(entities));
    findings
}

/// Raw findings for an already resolved candidate, in candidate order.
#[must_use]
pub fn candidate_findings(
    candidate: &ResolvedEntity,
    existing: &[ResolvedEntity],
    tank: &TankProfile,
) -> Vec<CompatibilityResult> {
    let mut findings = rules::entity_findings(candidate, tank, rules::CANDIDATE_ENTITY_RULES);
    for other in existing {
        findings.extend(rules::pair_findings(candidate, other));
    }

    let mut group = existing.to_vec();
    group.push(candidate.clone());
    findings.extend(territorial_duplicates(&group));
    findings
}

/// Pairwise findings over every unordered pair `(i, j)`, `i < j`.
#[must_use]
pub fn pairwise_findings(entities: &[ResolvedEntity]) -> Vec<CompatibilityResult> {
    let mut findings = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            findings.extend(rules::pair_findings(a, b));
        }
    }
    findings
}
