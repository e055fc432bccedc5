//! Deterministic force-free layout.
//!
//! Nodes are placed on a circle around the canvas center with the entry
//! node anchored above it; collisions are resolved by spiralling the
//! candidate outward a bounded number of times. No randomness anywhere, so
//! a fixed node sequence always produces the same positions.

use indexmap::IndexMap;
use std::f64::consts::PI;

pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 80.0;
pub const CENTER_X: f64 = 2000.0;
pub const CENTER_Y: f64 = 2000.0;

const ENTRY_OFFSET: f64 = 400.0;
const MAX_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Footprint diagonal scaled up 20% for breathing room.
fn min_distance() -> f64 {
    (NODE_WIDTH * NODE_WIDTH + NODE_HEIGHT * NODE_HEIGHT).sqrt() * 1.2
}

/// Compute a position for every node, entry node first.
///
/// The returned map is in placement order. Overlap avoidance is
/// best-effort: after the spiral attempt cap, the last candidate is
/// accepted regardless.
pub fn compute_layout<'a, I>(nodes: I, entry: &str) -> IndexMap<String, Point>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&str> = nodes.into_iter().collect();
    if let Some(idx) = order.iter().position(|n| *n == entry) {
        let entry_node = order.remove(idx);
        order.insert(0, entry_node);
    }

    let total = order.len();
    let mut positions: IndexMap<String, Point> = IndexMap::new();

    for (index, node) in order.into_iter().enumerate() {
        let base = initial_position(index, total);
        let placed: Vec<Point> = positions.values().copied().collect();
        positions.insert(node.to_string(), adjust_position(base, &placed));
    }

    positions
}

/// First node sits at the anchor above the canvas center; the rest are
/// spread at equal angular steps around a circle, starting from the bottom.
fn initial_position(index: usize, total: usize) -> Point {
    if index == 0 {
        return Point {
            x: CENTER_X,
            y: CENTER_Y - ENTRY_OFFSET,
        };
    }

    let radius = if total <= 10 { 400.0 } else { 600.0 };
    let angle = 2.0 * PI * (index - 1) as f64 / (total - 1) as f64 - PI / 2.0;

    Point {
        x: CENTER_X + radius * angle.cos(),
        y: CENTER_Y + radius * angle.sin(),
    }
}

/// Axis-aligned bounding-box test, deliberately not a Euclidean one.
fn overlaps(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < NODE_WIDTH * 1.2 && (a.y - b.y).abs() < NODE_HEIGHT * 1.2
}

/// Spiral outward from the original candidate until it clears every placed
/// node or the attempt cap is reached.
fn adjust_position(base: Point, placed: &[Point]) -> Point {
    let mut candidate = base;

    for attempt in 0..MAX_ATTEMPTS {
        if !placed.iter().any(|p| overlaps(candidate, *p)) {
            return candidate;
        }

        let angle = 2.0 * PI * f64::from(attempt) / 20.0;
        let radius = f64::from(attempt / 20 + 1) * min_distance();
        candidate = Point {
            x: base.x + radius * angle.cos(),
            y: base.y + radius * angle.sin(),
        };
    }

    candidate
}
