//! # reef-graph
//!
//! "Who threatens whom": directed, typed edges built from the pairwise
//! compatibility rules, plus a small force-directed layout for drawing them.
//!
//! The layout only looks at node and edge counts; it knows nothing about the
//! rules that produced the edges.

pub mod graph;
pub mod layout;

pub use graph::{
    DirectedEdge, EdgeKind, GraphNode, GraphSummary, NodeDegree, ThreatGraph, build_edges,
};
pub use layout::{Canvas, ForceParams, Position, RandomSource, SeededRandom, SimNode, layout};
