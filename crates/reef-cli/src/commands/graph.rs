use std::path::Path;

use reef_config::LayoutConfig;
use reef_graph::{Canvas, ForceParams, Position, SeededRandom, ThreatGraph};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GraphArgs;
use crate::context::AppContext;
use crate::input::TankFile;
use crate::output::output_sections;

/// One drawn node.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeView<'a> {
    index: usize,
    name: &'a str,
    trait_id: &'a str,
    category: reef_core::enums::Category,
    x: f64,
    y: f64,
}

/// One drawn edge, findings reduced to their rules.
#[derive(Debug, Serialize)]
struct EdgeView {
    source: usize,
    target: usize,
    kind: reef_graph::EdgeKind,
    rules: Vec<String>,
}

/// Handle `reefc graph`.
pub fn handle(args: &GraphArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tank = TankFile::read(Path::new(&args.tank))?;
    let layout = effective_layout(&ctx.config.layout, args)?;

    let resolution = ctx.evaluator().resolve(&tank.livestock);
    let graph = ThreatGraph::build(&resolution.resolved);
    let positions = reef_graph::layout(
        &graph.categories(),
        &graph.endpoints(),
        &canvas(&layout),
        &force_params(&layout),
        &mut SeededRandom::new(layout.seed),
    );

    let nodes = node_views(&graph, &positions);
    let edges: Vec<EdgeView> = graph
        .edges
        .iter()
        .map(|edge| EdgeView {
            source: edge.source,
            target: edge.target,
            kind: edge.kind,
            rules: edge.findings.iter().map(|f| f.rule.to_string()).collect(),
        })
        .collect();

    output_sections(
        &[
            ("nodes", serde_json::to_value(&nodes)?),
            ("edges", serde_json::to_value(&edges)?),
            ("summary", serde_json::to_value(graph.summary())?),
            ("unknownSpecies", serde_json::to_value(&resolution.unknown)?),
        ],
        flags.format,
    )
}

fn effective_layout(base: &LayoutConfig, args: &GraphArgs) -> anyhow::Result<LayoutConfig> {
    let mut layout = base.clone();
    if let Some(iterations) = args.iterations {
        layout.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        layout.seed = seed;
    }
    if let Some(width) = args.width {
        layout.width = width;
    }
    if let Some(height) = args.height {
        layout.height = height;
    }
    layout.validate()?;
    Ok(layout)
}

const fn canvas(layout: &LayoutConfig) -> Canvas {
    Canvas {
        width: layout.width,
        height: layout.height,
        padding: layout.padding,
        node_radius: layout.node_radius,
    }
}

const fn force_params(layout: &LayoutConfig) -> ForceParams {
    ForceParams {
        iterations: layout.iterations,
        repulsion: layout.repulsion,
        spring: layout.spring,
        centering: layout.centering,
        damping: layout.damping,
        jitter: layout.jitter,
    }
}

fn node_views<'a>(graph: &'a ThreatGraph, positions: &[Position]) -> Vec<NodeView<'a>> {
    graph
        .nodes
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (node, position))| NodeView {
            index,
            name: &node.name,
            trait_id: &node.trait_id,
            category: node.category,
            x: position.x,
            y: position.y,
        })
        .collect()
}
