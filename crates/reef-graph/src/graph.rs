//! Threat graph over resolved livestock.
//!
//! Edges come from the pairwise rules only. Per-entity and group findings
//! have no second endpoint and never become edges.

use std::collections::HashMap;
use std::fmt;

use reef_compat::rules::pair_findings;
use reef_core::entities::{CompatibilityResult, ResolvedEntity};
use reef_core::enums::{Category, RuleId, Severity};
use rustworkx_core::connectivity::connected_components;
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EdgeKind
// ---------------------------------------------------------------------------

/// Displayed edge type. Declaration order is priority order, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Caution,
    Incompatible,
    PredatorPrey,
}

impl EdgeKind {
    /// Classification of a single finding.
    #[must_use]
    pub fn classify(finding: &CompatibilityResult) -> Self {
        if finding.rule == RuleId::PredatorPrey {
            Self::PredatorPrey
        } else if finding.level == Severity::Incompatible {
            Self::Incompatible
        } else {
            Self::Caution
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Caution => "caution",
            Self::Incompatible => "incompatible",
            Self::PredatorPrey => "predator_prey",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

/// "Threat → target" between two node indices, merged over every finding
/// for that ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub source: usize,
    pub target: usize,
    pub kind: EdgeKind,
    pub findings: Vec<CompatibilityResult>,
}

impl DirectedEdge {
    /// Endpoints as a `(source, target)` pair.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

/// Build merged, directed edges for every pair of `entities`.
///
/// A finding points from the entity whose name is its primary name. Edges
/// appear in order of first finding.
#[must_use]
pub fn build_edges(entities: &[ResolvedEntity]) -> Vec<DirectedEdge> {
    let mut edges: Vec<DirectedEdge> = Vec::new();
    let mut slots: HashMap<(usize, usize), usize> = HashMap::new();

    for (i, a) in entities.iter().enumerate() {
        for (offset, b) in entities[i + 1..].iter().enumerate() {
            let j = i + 1 + offset;
            for finding in pair_findings(a, b) {
                let ends = orient(&finding, (i, a), (j, b));
                let kind = EdgeKind::classify(&finding);
                match slots.get(&ends) {
                    Some(&slot) => {
                        let edge = &mut edges[slot];
                        edge.kind = edge.kind.max(kind);
                        edge.findings.push(finding);
                    }
                    None => {
                        slots.insert(ends, edges.len());
                        edges.push(DirectedEdge {
                            source: ends.0,
                            target: ends.1,
                            kind,
                            findings: vec![finding],
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(nodes = entities.len(), edges = edges.len(), "built threat edges");
    edges
}

fn orient(
    finding: &CompatibilityResult,
    (i, a): (usize, &ResolvedEntity),
    (j, b): (usize, &ResolvedEntity),
) -> (usize, usize) {
    if finding.species_a == a.name() {
        (i, j)
    } else if finding.species_a == b.name() {
        (j, i)
    } else {
        (i, j)
    }
}

// ---------------------------------------------------------------------------
// ThreatGraph
// ---------------------------------------------------------------------------

/// Node payload: what the visualization shows for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub name: String,
    pub trait_id: String,
    pub category: Category,
}

/// Per-node degree counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDegree {
    pub name: String,
    pub threatens: usize,
    pub threatened_by: usize,
}

/// Aggregate figures for a threat graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub components: usize,
    pub has_cycles: bool,
    pub degrees: Vec<NodeDegree>,
}

/// Nodes plus merged edges, indexed like the entity list they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<DirectedEdge>,
}

impl ThreatGraph {
    #[must_use]
    pub fn build(entities: &[ResolvedEntity]) -> Self {
        let nodes = entities
            .iter()
            .map(|entity| GraphNode {
                name: entity.name().to_string(),
                trait_id: entity.traits.id.clone(),
                category: entity.traits.category,
            })
            .collect();
        Self {
            nodes,
            edges: build_edges(entities),
        }
    }

    /// Node categories, in node order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.nodes.iter().map(|node| node.category).collect()
    }

    /// Edge endpoints, in edge order.
    #[must_use]
    pub fn endpoints(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(DirectedEdge::endpoints).collect()
    }

    fn digraph(&self) -> DiGraph<usize, EdgeKind> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<NodeIndex> = (0..self.nodes.len()).map(|i| graph.add_node(i)).collect();
        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (indices.get(edge.source), indices.get(edge.target))
            {
                graph.add_edge(from, to, edge.kind);
            }
        }
        graph
    }

    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        let graph = self.digraph();
        let degrees = graph
            .node_indices()
            .map(|idx| NodeDegree {
                name: self.nodes[graph[idx]].name.clone(),
                threatens: graph.edges_directed(idx, Direction::Outgoing).count(),
                threatened_by: graph.edges_directed(idx, Direction::Incoming).count(),
            })
            .collect();

        GraphSummary {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            components: connected_components(&graph).len(),
            has_cycles: toposort(&graph, None).is_err(),
            degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reef_core::entities::{LivestockEntry, SpeciesTraits};
    use reef_core::enums::{Diet, MatchLevel, ReefSafety, SizeClass, Temperament, WaterType};

    fn entity(name: &str, edit: impl FnOnce(&mut SpeciesTraits)) -> ResolvedEntity {
        let mut traits = SpeciesTraits {
            id: name.to_lowercase(),
            genus_or_family: name.to_string(),
            match_level: MatchLevel::Genus,
            common_group_name: name.to_string(),
            category: Category::Fish,
            water_type: WaterType::Saltwater,
            temperament: Temperament::Peaceful,
            reef_safe: ReefSafety::Yes,
            min_tank_size_liters: 40.0,
            diet: Diet::Herbivore,
            size_class: SizeClass::Small,
            territorial: false,
            max_group_conflict: false,
            predator_of: Vec::new(),
        };
        edit(&mut traits);
        ResolvedEntity::new(LivestockEntry::new(name, traits.category), traits)
    }

    #[test]
    fn priority_order() {
        assert!(EdgeKind::PredatorPrey > EdgeKind::Incompatible);
        assert!(EdgeKind::Incompatible > EdgeKind::Caution);
    }

    #[test]
    fn quiet_pair_has_no_edge() {
        let graph = ThreatGraph::build(&[entity("Calm", |_| {}), entity("Still", |_| {})]);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.summary().components, 2);
    }

    #[test]
    fn edge_points_from_later_entity_when_it_is_the_threat() {
        let entities = vec![
            entity("Meek", |_| {}),
            entity("Brute", |t| t.temperament = Temperament::Aggressive),
        ];
        let edges = build_edges(&entities);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].endpoints(), (1, 0));
        assert_eq!(edges[0].kind, EdgeKind::Incompatible);
    }

    #[test]
    fn summary_counts_degrees() {
        let graph = ThreatGraph::build(&[
            entity("Brute", |t| t.temperament = Temperament::Aggressive),
            entity("Meek", |_| {}),
            entity("Shy", |_| {}),
        ]);
        let summary = graph.summary();
        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 2);
        assert_eq!(summary.components, 1);
        assert!(!summary.has_cycles);
        assert_eq!(summary.degrees[0].threatens, 2);
        assert_eq!(summary.degrees[1].threatened_by, 1);
    }
}
