//! Force-directed layout for small threat graphs.
//!
//! Nodes start evenly spaced on a circle around the canvas centre, nudged by a
//! small random angle. Each iteration applies all-pairs inverse-square
//! repulsion, springs along edges, a weak pull toward the centre, then damped
//! velocity integration and clamping to `[node_radius, dim - node_radius]`.
//! All forces are scaled by a cooling factor that falls linearly from 1 to 0.
//!
//! Cost is O(n² · iterations); fine for tens of nodes.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reef_core::enums::Category;
use serde::{Deserialize, Serialize};

/// Share of the shorter canvas side used for the initial circle radius and
/// the ideal spring length.
const SPREAD: f64 = 0.3;

/// Distances below this are treated as this when computing repulsion.
const MIN_DISTANCE: f64 = 1.0;

/// Source of uniform samples in `[0, 1)` for the initial jitter.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// [`RandomSource`] backed by a seeded `StdRng`: same seed, same layout.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Drawing area. Positions are computed inside `width × height` and then
/// shifted by `padding` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub node_radius: f64,
}

impl Canvas {
    fn centre(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn spread(&self) -> f64 {
        SPREAD * self.width.min(self.height)
    }
}

/// Simulation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceParams {
    pub iterations: u32,
    pub repulsion: f64,
    pub spring: f64,
    pub centering: f64,
    /// Velocity multiplier per iteration, in `(0, 1)`.
    pub damping: f64,
    /// Maximum initial angular offset, in radians.
    pub jitter: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            iterations: 200,
            repulsion: 5000.0,
            spring: 0.02,
            centering: 0.01,
            damping: 0.85,
            jitter: 0.2,
        }
    }
}

/// Working state of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimNode {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub category: Category,
}

/// Final node position in padded canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Lay out one node per entry of `categories`.
///
/// `edges` holds `(source, target)` node indices; pairs pointing outside the
/// node list are ignored. The result is indexed like `categories`.
pub fn layout(
    categories: &[Category],
    edges: &[(usize, usize)],
    canvas: &Canvas,
    params: &ForceParams,
    rng: &mut impl RandomSource,
) -> Vec<Position> {
    let mut nodes = initial_nodes(categories, canvas, params.jitter, rng);
    simulate(&mut nodes, edges, canvas, params);
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        iterations = params.iterations,
        "laid out threat graph"
    );

    nodes
        .iter()
        .map(|node| Position {
            x: node.x + canvas.padding,
            y: node.y + canvas.padding,
        })
        .collect()
}

/// Even circle placement with a random angular nudge, already clamped.
pub fn initial_nodes(
    categories: &[Category],
    canvas: &Canvas,
    jitter: f64,
    rng: &mut impl RandomSource,
) -> Vec<SimNode> {
    let (cx, cy) = canvas.centre();
    let radius = canvas.spread();
    #[allow(clippy::cast_precision_loss)]
    let count = categories.len().max(1) as f64;

    categories
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            #[allow(clippy::cast_precision_loss)]
            let base = TAU * i as f64 / count;
            let angle = base + (rng.next_f64() - 0.5) * jitter;
            SimNode {
                x: clamp_axis(radius.mul_add(angle.cos(), cx), canvas.node_radius, canvas.width),
                y: clamp_axis(radius.mul_add(angle.sin(), cy), canvas.node_radius, canvas.height),
                vx: 0.0,
                vy: 0.0,
                category,
            }
        })
        .collect()
}

/// Run `params.iterations` steps in place. Zero iterations leaves the nodes
/// where they are.
pub fn simulate(nodes: &mut [SimNode], edges: &[(usize, usize)], canvas: &Canvas, params: &ForceParams) {
    let n = nodes.len();
    let (cx, cy) = canvas.centre();
    let ideal = canvas.spread();
    let links: Vec<(usize, usize)> = edges
        .iter()
        .copied()
        .filter(|&(s, t)| s < n && t < n && s != t)
        .collect();
    let mut force = vec![(0.0_f64, 0.0_f64); n];

    for step in 0..params.iterations {
        let cooling = 1.0 - f64::from(step) / f64::from(params.iterations);
        force.iter_mut().for_each(|f| *f = (0.0, 0.0));

        for i in 0..n {
            for j in i + 1..n {
                let dx = nodes[i].x - nodes[j].x;
                let dy = nodes[i].y - nodes[j].y;
                let dist = dx.hypot(dy).max(MIN_DISTANCE);
                let push = params.repulsion / (dist * dist) * cooling;
                let (ux, uy) = (dx / dist, dy / dist);
                force[i].0 += push * ux;
                force[i].1 += push * uy;
                force[j].0 -= push * ux;
                force[j].1 -= push * uy;
            }
        }

        for &(s, t) in &links {
            let dx = nodes[t].x - nodes[s].x;
            let dy = nodes[t].y - nodes[s].y;
            let dist = dx.hypot(dy);
            if dist <= f64::EPSILON {
                continue;
            }
            let pull = params.spring * (dist - ideal) * cooling;
            let (ux, uy) = (dx / dist, dy / dist);
            force[s].0 += pull * ux;
            force[s].1 += pull * uy;
            force[t].0 -= pull * ux;
            force[t].1 -= pull * uy;
        }

        for (node, f) in nodes.iter_mut().zip(&force) {
            let fx = (cx - node.x).mul_add(params.centering * cooling, f.0);
            let fy = (cy - node.y).mul_add(params.centering * cooling, f.1);
            node.vx = (node.vx + fx) * params.damping;
            node.vy = (node.vy + fy) * params.damping;
            node.x = clamp_axis(node.x + node.vx, canvas.node_radius, canvas.width);
            node.y = clamp_axis(node.y + node.vy, canvas.node_radius, canvas.height);
        }
    }
}

/// Clamp into `[radius, dim - radius]`; a canvas too small for one node pins
/// the coordinate to the middle.
fn clamp_axis(value: f64, radius: f64, dim: f64) -> f64 {
    let (lo, hi) = (radius, dim - radius);
    if lo > hi {
        return dim / 2.0;
    }
    if value.is_nan() {
        return (lo + hi) / 2.0;
    }
    value.clamp(lo, hi)
}
