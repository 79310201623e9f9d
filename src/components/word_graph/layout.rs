//! Node positioning: initial placement, force relaxation, circle and the two
//! section-aware layouts.
//!
//! All functions work in world coordinates around [`LayoutConfig::center`].
//! They are pure so they can run (and be tested) without a canvas.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Deserialize;

use crate::vocab::{WordGraph, WordKind};

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

/// Which arrangement the graph is shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutKind {
	#[default]
	Force,
	Circle,
	Sections,
	Grouped,
}

impl LayoutKind {
	/// Layout the toggle button switches to.
	pub fn next(self) -> Self {
		match self {
			LayoutKind::Force => LayoutKind::Circle,
			LayoutKind::Circle => LayoutKind::Sections,
			LayoutKind::Sections => LayoutKind::Grouped,
			LayoutKind::Grouped => LayoutKind::Force,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			LayoutKind::Force => "Force-Layout",
			LayoutKind::Circle => "Kreis-Layout",
			LayoutKind::Sections => "Abschnitt-Kreise",
			LayoutKind::Grouped => "Abschnitt-Spalten",
		}
	}
}

/// Tunables for every layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// World-space point every layout centers on.
	pub center: (f64, f64),
	pub iterations: usize,
	/// Numerator of the inverse-square repulsion.
	pub repulsion: f64,
	/// Nodes further apart than this do not repel.
	pub repulsion_range: f64,
	/// Fraction of the distance to the center covered per iteration.
	pub center_pull: f64,
	/// Spring stiffness along edges.
	pub attraction: f64,
	/// Rest length of an edge spring.
	pub spring_length: f64,
	/// Share of each force applied to a node per step.
	pub step: f64,
	pub circle_min_radius: f64,
	pub circle_radius_per_node: f64,
	pub circle_max_radius: f64,
	/// Radius of the circle section anchors sit on.
	pub section_radius: f64,
	/// Arc length per member on a section ring.
	pub member_spacing: f64,
	pub member_min_radius: f64,
	/// Horizontal gap between grouped columns.
	pub column_gap: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			center: (400.0, 300.0),
			iterations: 30,
			repulsion: 100.0,
			repulsion_range: 150.0,
			center_pull: 0.02,
			attraction: 0.1,
			spring_length: 100.0,
			step: 0.5,
			circle_min_radius: 150.0,
			circle_radius_per_node: 5.0,
			circle_max_radius: 250.0,
			section_radius: 260.0,
			member_spacing: 56.0,
			member_min_radius: 50.0,
			column_gap: 80.0,
		}
	}
}

impl LayoutConfig {
	pub fn center(&self) -> Point {
		Point::new(self.center.0, self.center.1)
	}
}

/// Deterministic value in `[0, 1)` for a seed.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// Starting positions: verbs top-left, phrases top-right, nouns bottom-left,
/// jittered inside a 300 x 300 region.
pub fn initial_positions(graph: &WordGraph) -> Vec<Point> {
	graph
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let (x0, y0) = match node.kind {
				WordKind::Verb => (50.0, 50.0),
				WordKind::Phrase => (450.0, 50.0),
				WordKind::Noun => (50.0, 300.0),
			};
			let seed = i as f64 + 1.0;
			Point::new(
				x0 + pseudo_random(seed * 1.1) * 300.0,
				y0 + pseudo_random(seed * 2.3) * 300.0,
			)
		})
		.collect()
}

/// Relax `positions` in place: inverse-square repulsion between nearby nodes,
/// a pull toward the center, then springs along the edges.
pub fn force_layout(positions: &mut [Point], edges: &[(usize, usize)], config: &LayoutConfig) {
	let center = config.center();
	let n = positions.len();

	for _ in 0..config.iterations {
		for i in 0..n {
			for j in 0..n {
				if i == j {
					continue;
				}
				let (dx, dy) = (
					positions[i].x - positions[j].x,
					positions[i].y - positions[j].y,
				);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist > 0.0 && dist < config.repulsion_range {
					let force = config.repulsion / (dist * dist);
					positions[i].x += dx / dist * force * config.step;
					positions[i].y += dy / dist * force * config.step;
				}
			}

			positions[i].x += (center.x - positions[i].x) * config.center_pull;
			positions[i].y += (center.y - positions[i].y) * config.center_pull;
		}

		for &(src, tgt) in edges {
			let (dx, dy) = (
				positions[tgt].x - positions[src].x,
				positions[tgt].y - positions[src].y,
			);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist > 0.0 {
				let force = (dist - config.spring_length) * config.attraction;
				let (fx, fy) = (dx / dist * force * config.step, dy / dist * force * config.step);
				positions[src].x += fx;
				positions[src].y += fy;
				positions[tgt].x -= fx;
				positions[tgt].y -= fy;
			}
		}
	}
}

/// All nodes evenly on one circle, in graph order.
pub fn circle_layout(count: usize, config: &LayoutConfig) -> Vec<Point> {
	if count == 0 {
		return Vec::new();
	}
	let center = config.center();
	let radius = (config.circle_min_radius + count as f64 * config.circle_radius_per_node)
		.min(config.circle_max_radius);
	let step = TAU / count as f64;

	(0..count)
		.map(|i| {
			let angle = i as f64 * step;
			Point::new(
				center.x + radius * angle.cos(),
				center.y + radius * angle.sin(),
			)
		})
		.collect()
}

/// Node indices per section, in graph order.
fn partition(graph: &WordGraph) -> Vec<Vec<usize>> {
	let mut groups = vec![Vec::new(); graph.sections.len()];
	for (i, node) in graph.nodes.iter().enumerate() {
		groups[node.section].push(i);
	}
	groups
}

/// Ring radius for `members` nodes around one anchor.
fn ring_radius(members: usize, config: &LayoutConfig) -> f64 {
	(config.member_spacing * members as f64 / TAU).max(config.member_min_radius)
}

/// Section anchors on a circle (starting at the top), members on a ring
/// around their anchor. Sections without words get no anchor slot.
pub fn section_layout(graph: &WordGraph, config: &LayoutConfig) -> Vec<Point> {
	let center = config.center();
	let groups: Vec<_> = partition(graph)
		.into_iter()
		.filter(|g| !g.is_empty())
		.collect();
	let mut positions = vec![center; graph.nodes.len()];

	let anchor_radius = if groups.len() > 1 {
		let widest = groups
			.iter()
			.map(|g| ring_radius(g.len(), config))
			.fold(0.0, f64::max);
		// keep neighbouring rings from overlapping
		let min_for_rings = (widest + config.member_spacing / 2.0) / (TAU / groups.len() as f64 / 2.0).sin().max(0.1);
		config.section_radius.max(min_for_rings.min(config.section_radius * 3.0))
	} else {
		0.0
	};

	for (s, members) in groups.iter().enumerate() {
		let angle = s as f64 * TAU / groups.len() as f64 - FRAC_PI_2;
		let anchor = Point::new(
			center.x + anchor_radius * angle.cos(),
			center.y + anchor_radius * angle.sin(),
		);
		if members.len() == 1 {
			positions[members[0]] = anchor;
			continue;
		}
		let radius = ring_radius(members.len(), config);
		for (m, &idx) in members.iter().enumerate() {
			let a = m as f64 * TAU / members.len() as f64 - FRAC_PI_2;
			positions[idx] = Point::new(anchor.x + radius * a.cos(), anchor.y + radius * a.sin());
		}
	}
	positions
}

/// Section anchors in one row centered on the center, members in a grid
/// inside their section's column.
pub fn grouped_layout(graph: &WordGraph, config: &LayoutConfig) -> Vec<Point> {
	let center = config.center();
	let groups: Vec<_> = partition(graph)
		.into_iter()
		.filter(|g| !g.is_empty())
		.collect();
	let mut positions = vec![center; graph.nodes.len()];

	let grid_cols = |n: usize| (n as f64).sqrt().ceil().max(1.0) as usize;
	let widest = groups.iter().map(|g| grid_cols(g.len())).max().unwrap_or(1);
	let column_width = widest as f64 * config.member_spacing + config.column_gap;
	let first_x = center.x - (groups.len().saturating_sub(1)) as f64 * column_width / 2.0;

	for (s, members) in groups.iter().enumerate() {
		let anchor = Point::new(first_x + s as f64 * column_width, center.y);
		let cols = grid_cols(members.len());
		let rows = members.len().div_ceil(cols);
		for (m, &idx) in members.iter().enumerate() {
			let (col, row) = (m % cols, m / cols);
			positions[idx] = Point::new(
				anchor.x + (col as f64 - (cols - 1) as f64 / 2.0) * config.member_spacing,
				anchor.y + (row as f64 - (rows - 1) as f64 / 2.0) * config.member_spacing,
			);
		}
	}
	positions
}

/// Target positions of `kind`, starting from `current` where the layout is
/// iterative.
pub fn apply_layout(
	kind: LayoutKind,
	graph: &WordGraph,
	current: &[Point],
	config: &LayoutConfig,
) -> Vec<Point> {
	match kind {
		LayoutKind::Force => {
			let mut positions = current.to_vec();
			force_layout(&mut positions, &graph.edges, config);
			positions
		}
		LayoutKind::Circle => circle_layout(graph.nodes.len(), config),
		LayoutKind::Sections => section_layout(graph, config),
		LayoutKind::Grouped => grouped_layout(graph, config),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vocab::ThemeData;
	use serde_json::json;

	fn graph(sections: &[usize], edges: &[(usize, usize)]) -> WordGraph {
		let mut n = 0;
		let mut sec = serde_json::Map::new();
		for (s, &count) in sections.iter().enumerate() {
			let mut words = serde_json::Map::new();
			for _ in 0..count {
				let related: Vec<String> = edges
					.iter()
					.filter(|(a, _)| *a == n)
					.map(|(_, b)| format!("w{b}"))
					.collect();
				let kind = if n % 3 == 0 { "verb" } else { "der" };
				words.insert(
					format!("w{n}"),
					json!({ "title": format!("Wort{n}"), "article": kind, "connections": { "related": related } }),
				);
				n += 1;
			}
			sec.insert(format!("s{s}"), json!({ "words": words }));
		}
		let data: ThemeData = serde_json::from_value(json!({ "sections": sec })).unwrap();
		WordGraph::build("test", &data)
	}

	#[test]
	fn initial_positions_stay_in_kind_regions() {
		let g = graph(&[9], &[]);
		for (p, node) in initial_positions(&g).iter().zip(&g.nodes) {
			let (x0, y0) = match node.kind {
				WordKind::Verb => (50.0, 50.0),
				WordKind::Phrase => (450.0, 50.0),
				WordKind::Noun => (50.0, 300.0),
			};
			assert!(p.x >= x0 && p.x < x0 + 300.0, "{p:?}");
			assert!(p.y >= y0 && p.y < y0 + 300.0, "{p:?}");
		}
		assert_eq!(initial_positions(&g), initial_positions(&g));
	}

	#[test]
	fn force_layout_pulls_linked_nodes_toward_spring_length() {
		let config = LayoutConfig::default();
		let mut positions = vec![Point::new(100.0, 300.0), Point::new(700.0, 300.0)];
		let before = positions[0].distance(positions[1]);
		force_layout(&mut positions, &[(0, 1)], &config);
		let after = positions[0].distance(positions[1]);
		assert!(after < before);
		assert!((after - config.spring_length).abs() < 60.0, "{after}");
		assert!(positions.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
	}

	#[test]
	fn force_layout_separates_close_nodes() {
		let config = LayoutConfig {
			center_pull: 0.0,
			..LayoutConfig::default()
		};
		let mut positions = vec![Point::new(400.0, 300.0), Point::new(401.0, 300.0)];
		force_layout(&mut positions, &[], &config);
		assert!(positions[0].distance(positions[1]) > 5.0);
	}

	fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
		assert_eq!(actual.len(), expected.len());
		for (p, &(x, y)) in actual.iter().zip(expected) {
			assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?} != ({x}, {y})");
		}
	}

	#[test]
	fn force_step_repulsion_cutoff_and_in_place_updates() {
		let config = LayoutConfig {
			iterations: 1,
			..LayoutConfig::default()
		};
		// 150 apart: the first node only feels the center pull; the second
		// already sees the moved first node at 148.5 and is pushed away
		let mut positions = vec![Point::new(325.0, 300.0), Point::new(475.0, 300.0)];
		force_layout(&mut positions, &[], &config);
		assert_points(&positions, &[(326.5, 300.0), (473.50222199548796, 300.0)]);
	}

	#[test]
	fn force_step_applies_springs_in_edge_order() {
		let config = LayoutConfig {
			iterations: 1,
			..LayoutConfig::default()
		};
		let mut positions = vec![
			Point::new(400.0, 300.0),
			Point::new(400.0, 400.0),
			Point::new(600.0, 300.0),
		];
		force_layout(&mut positions, &[(0, 2), (1, 2)], &config);
		assert_points(
			&positions,
			&[
				(404.8000000015625, 299.99522),
				(405.1104756257293, 395.385379313458),
				(586.0895243727082, 302.61940020637724),
			],
		);
	}

	#[test]
	fn force_layout_handles_empty_and_coincident() {
		let config = LayoutConfig::default();
		force_layout(&mut [], &[], &config);
		let mut same = vec![Point::new(10.0, 10.0); 2];
		force_layout(&mut same, &[(0, 1)], &config);
		assert!(same.iter().all(|p| p.x.is_finite()));
	}

	#[test]
	fn circle_radius_grows_then_caps() {
		let config = LayoutConfig::default();
		let three = circle_layout(3, &config);
		assert!((three[0].x - (400.0 + 165.0)).abs() < 1e-9);
		assert!((three[0].y - 300.0).abs() < 1e-9);
		let many = circle_layout(40, &config);
		for p in &many {
			assert!((p.distance(config.center()) - 250.0).abs() < 1e-9);
		}
		assert!(circle_layout(0, &config).is_empty());
	}

	#[test]
	fn single_section_rings_the_center() {
		let config = LayoutConfig::default();
		let g = graph(&[6], &[]);
		let positions = section_layout(&g, &config);
		let r = ring_radius(6, &config);
		for p in &positions {
			assert!((p.distance(config.center()) - r).abs() < 1e-9);
		}
	}

	#[test]
	fn sections_cluster_around_distinct_anchors() {
		let config = LayoutConfig::default();
		let g = graph(&[4, 4, 1], &[]);
		let positions = section_layout(&g, &config);
		let centroid = |range: std::ops::Range<usize>| {
			let n = range.len() as f64;
			let (sx, sy) = range.fold((0.0, 0.0), |(x, y), i| (x + positions[i].x, y + positions[i].y));
			Point::new(sx / n, sy / n)
		};
		let (a, b, c) = (centroid(0..4), centroid(4..8), centroid(8..9));
		assert!(a.distance(b) > 2.0 * ring_radius(4, &config));
		assert!(b.distance(c) > ring_radius(4, &config));
		// first anchor sits straight above the center
		assert!((a.x - 400.0).abs() < 1e-6 && a.y < 300.0);
	}

	#[test]
	fn grouped_columns_do_not_overlap() {
		let config = LayoutConfig::default();
		let g = graph(&[5, 2], &[]);
		let positions = grouped_layout(&g, &config);
		let max_first = positions[..5].iter().map(|p| p.x).fold(f64::MIN, f64::max);
		let min_second = positions[5..].iter().map(|p| p.x).fold(f64::MAX, f64::min);
		assert!(min_second - max_first >= config.column_gap);
		let mean_y = positions.iter().map(|p| p.y).sum::<f64>() / positions.len() as f64;
		assert!((mean_y - 300.0).abs() < config.member_spacing);
	}

	#[test]
	fn layout_cycle_visits_every_kind() {
		let mut kind = LayoutKind::Force;
		let mut seen = Vec::new();
		for _ in 0..4 {
			seen.push(kind);
			kind = kind.next();
		}
		assert_eq!(kind, LayoutKind::Force);
		assert_eq!(seen.len(), 4);
		assert!(seen.contains(&LayoutKind::Grouped));
	}

	#[test]
	fn apply_layout_keeps_node_count() {
		let config = LayoutConfig::default();
		let g = graph(&[3, 2], &[(0, 3), (1, 4)]);
		let start = initial_positions(&g);
		for kind in [LayoutKind::Force, LayoutKind::Circle, LayoutKind::Sections, LayoutKind::Grouped] {
			assert_eq!(apply_layout(kind, &g, &start, &config).len(), 5);
		}
	}
}
