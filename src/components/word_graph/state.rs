//! Graph view state and interaction tracking.
//!
//! Holds the word positions and their layout targets, the pan/zoom transform,
//! drag and pan gestures, hover highlight intensities and the current
//! selection. The animation loop calls [`WordGraphState::tick`] every frame.

use std::collections::{HashMap, HashSet};

use super::layout::{LayoutConfig, LayoutKind, Point, apply_layout, initial_positions};
use super::scale::{ScaleConfig, ScaledValues};
use super::style::{Color, GraphStyle};
use crate::vocab::WordGraph;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;
/// Pointer travel (screen pixels) below which a press on a node is a click.
const CLICK_TOLERANCE: f64 = 4.0;
/// Speed nodes ease toward their layout targets with.
const SETTLE_SPEED: f64 = 8.0;

/// Per-node display data derived from the graph and the style.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: String,
	pub fill: Color,
	pub border: Color,
}

/// Pan and zoom transform: `screen = world * k + (x, y)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Point,
	/// Set once the pointer left the click tolerance.
	pub moved: bool,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Smooth hover highlight with per-node intensities.
///
/// Each node has an intensity in `0.0..=1.0` that eases toward 1 while the
/// node is the hovered node or one of its neighbors, and decays afterwards.
/// Only edges touching the hovered node light up.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered_node: Option<usize>,
	/// Last hovered node; kept while its neighborhood fades out.
	center: Option<usize>,
	target_set: HashSet<usize>,
	node_intensity: HashMap<usize, f64>,
	cached_max: f64,
}

impl HighlightState {
	pub fn set_hover(&mut self, node: Option<usize>, graph: &WordGraph) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.target_set.clear();
		if let Some(idx) = node {
			self.center = Some(idx);
			self.target_set.insert(idx);
			self.target_set.extend(graph.neighbors(idx));
		}
	}

	/// Exponential smoothing: `value += (target - value) * (1 - e^(-speed * dt))`.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let intensity = self.node_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		let mut new_max: f64 = 0.0;
		self.node_intensity.retain(|idx, intensity| {
			if !self.target_set.contains(idx) {
				*intensity *= fade_out_decay;
			}
			new_max = new_max.max(*intensity);
			*intensity > 0.005
		});
		self.cached_max = new_max;
	}

	pub fn node_intensity(&self, idx: usize) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the endpoint intensities for edges of the hovered
	/// node, zero for every other edge.
	pub fn edge_intensity(&self, a: usize, b: usize) -> f64 {
		match self.center {
			Some(c) if c == a || c == b => (self.node_intensity(a) * self.node_intensity(b)).sqrt(),
			_ => 0.0,
		}
	}

	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Selected word and the countdown of its edge highlight.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
	pub node: Option<usize>,
	/// Seconds the selection's edges stay highlighted.
	pub edge_highlight_remaining: f64,
}

impl SelectionState {
	pub fn edge_highlighted(&self, a: usize, b: usize) -> bool {
		self.edge_highlight_remaining > 0.0 && self.node.is_some_and(|n| n == a || n == b)
	}
}

/// Everything the renderer and the event handlers operate on.
pub struct WordGraphState {
	pub graph: WordGraph,
	pub nodes: Vec<NodeInfo>,
	/// Drawn positions.
	pub positions: Vec<Point>,
	/// Positions the current layout wants; `positions` ease toward these.
	pub targets: Vec<Point>,
	pub layout: LayoutKind,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub selection: SelectionState,
	pub width: f64,
	pub height: f64,
	layout_config: LayoutConfig,
	highlight_seconds: f64,
}

impl WordGraphState {
	pub fn new(
		graph: WordGraph,
		layout: LayoutKind,
		width: f64,
		height: f64,
		style: &GraphStyle,
		layout_config: LayoutConfig,
		highlight_seconds: f64,
	) -> Self {
		let center = layout_config.center();
		let mut state = Self {
			graph: WordGraph::default(),
			nodes: Vec::new(),
			positions: Vec::new(),
			targets: Vec::new(),
			layout,
			transform: ViewTransform {
				x: width / 2.0 - center.x,
				y: height / 2.0 - center.y,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			selection: SelectionState::default(),
			width,
			height,
			layout_config,
			highlight_seconds,
		};
		state.set_graph(graph, style);
		state
	}

	/// Replace the graph: fresh initial placement, current layout applied,
	/// selection and hover cleared.
	pub fn set_graph(&mut self, graph: WordGraph, style: &GraphStyle) {
		self.nodes = graph
			.nodes
			.iter()
			.map(|node| NodeInfo {
				label: crate::vocab::format::node_label(&node.word.title),
				fill: style.section_color(
					node.section,
					graph.sections[node.section].color.as_deref(),
				),
				border: style.node.kind_color(node.kind),
			})
			.collect();
		self.graph = graph;
		self.drag = DragState::default();
		self.pan.active = false;
		self.highlight.clear();
		self.selection = SelectionState::default();
		self.positions = initial_positions(&self.graph);
		self.targets = apply_layout(self.layout, &self.graph, &self.positions, &self.layout_config);
	}

	/// Placement from scratch followed by the force layout.
	pub fn reset(&mut self) {
		self.layout = LayoutKind::Force;
		self.positions = initial_positions(&self.graph);
		self.targets = apply_layout(self.layout, &self.graph, &self.positions, &self.layout_config);
	}

	/// Switch layout; the force layout relaxes from the current targets.
	pub fn set_layout(&mut self, kind: LayoutKind) {
		self.layout = kind;
		self.targets = apply_layout(kind, &self.graph, &self.targets, &self.layout_config);
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let point = Point::new(gx, gy);
		self.positions
			.iter()
			.rposition(|p| p.distance(point) < scale.hit_radius)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		self.highlight.set_hover(node, &self.graph);
	}

	/// Select by word id; unknown ids clear the selection.
	pub fn select(&mut self, id: Option<&str>) -> Option<usize> {
		let node = id.and_then(|id| self.graph.node_index(id));
		self.selection = SelectionState {
			node,
			edge_highlight_remaining: if node.is_some() {
				self.highlight_seconds
			} else {
				0.0
			},
		};
		node
	}

	/// Pan so the node's layout target ends up in the middle of the canvas.
	pub fn center_on(&mut self, idx: usize) {
		let Some(p) = self.targets.get(idx) else {
			return;
		};
		self.transform.x = self.width / 2.0 - p.x * self.transform.k;
		self.transform.y = self.height / 2.0 - p.y * self.transform.k;
	}

	/// Zoom around a screen point; `delta_y > 0` zooms out.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Pointer pressed: start dragging the node under it, or panning.
	pub fn pointer_down(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		if let Some(idx) = self.node_at_position(sx, sy, config) {
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: sx,
				start_y: sy,
				node_start: self.positions[idx],
				moved: false,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		if !self.drag.active {
			let hovered = self.node_at_position(sx, sy, config);
			self.set_hover(hovered);
		}

		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (dx, dy) = (sx - self.drag.start_x, sy - self.drag.start_y);
			if !self.drag.moved && (dx * dx + dy * dy).sqrt() < CLICK_TOLERANCE {
				return;
			}
			self.drag.moved = true;
			let p = Point::new(
				self.drag.node_start.x + dx / self.transform.k,
				self.drag.node_start.y + dy / self.transform.k,
			);
			self.positions[idx] = p;
			self.targets[idx] = p;
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Pointer released. Returns the id of a node that was clicked (pressed
	/// and released without dragging).
	pub fn pointer_up(&mut self) -> Option<String> {
		let clicked = match (&self.drag, self.drag.node_idx) {
			(drag, Some(idx)) if drag.active && !drag.moved => {
				Some(self.graph.nodes[idx].id.clone())
			}
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn pointer_leave(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.set_hover(None);
	}

	pub fn tick(&mut self, dt: f64) {
		let settle = 1.0 - (-SETTLE_SPEED * dt).exp();
		for (p, t) in self.positions.iter_mut().zip(&self.targets) {
			p.x += (t.x - p.x) * settle;
			p.y += (t.y - p.y) * settle;
		}
		self.highlight.tick(dt);
		self.selection.edge_highlight_remaining =
			(self.selection.edge_highlight_remaining - dt).max(0.0);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vocab::ThemeData;
	use serde_json::json;

	fn state() -> WordGraphState {
		let data: ThemeData = serde_json::from_value(json!({
			"sections": {
				"a": { "words": {
					"zug": { "id": "zug", "title": "der Zug", "article": "der",
						"connections": { "related": ["bahnhof"] } },
					"bahnhof": { "id": "bahnhof", "title": "der Bahnhof", "article": "der" },
					"fahren": { "id": "fahren", "title": "fahren", "article": "verb" }
				} }
			}
		}))
		.unwrap();
		WordGraphState::new(
			WordGraph::build("test", &data),
			LayoutKind::Circle,
			800.0,
			600.0,
			&GraphStyle::default(),
			LayoutConfig::default(),
			3.0,
		)
	}

	fn settle(s: &mut WordGraphState) {
		for _ in 0..200 {
			s.tick(0.016);
		}
	}

	#[test]
	fn world_center_maps_to_canvas_center() {
		let s = state();
		assert_eq!(s.screen_to_graph(400.0, 300.0), (400.0, 300.0));
		let s = WordGraphState::new(
			s.graph.clone(),
			LayoutKind::Force,
			1000.0,
			800.0,
			&GraphStyle::default(),
			LayoutConfig::default(),
			3.0,
		);
		assert_eq!(s.screen_to_graph(500.0, 400.0), (400.0, 300.0));
	}

	#[test]
	fn positions_ease_to_targets() {
		let mut s = state();
		assert_ne!(s.positions, s.targets);
		settle(&mut s);
		for (p, t) in s.positions.iter().zip(&s.targets) {
			assert!(p.distance(*t) < 0.01);
		}
	}

	#[test]
	fn click_selects_and_drag_does_not() {
		let config = ScaleConfig::default();
		let mut s = state();
		settle(&mut s);
		let p = s.positions[1];
		s.pointer_down(p.x, p.y, &config);
		assert_eq!(s.pointer_up().as_deref(), Some("bahnhof"));

		s.pointer_down(p.x, p.y, &config);
		s.pointer_move(p.x + 50.0, p.y, &config);
		assert_eq!(s.pointer_up(), None);
		assert!((s.positions[1].x - (p.x + 50.0)).abs() < 1e-9);
		assert_eq!(s.targets[1], s.positions[1]);
	}

	#[test]
	fn background_drag_pans() {
		let config = ScaleConfig::default();
		let mut s = state();
		settle(&mut s);
		s.pointer_down(5.0, 5.0, &config);
		s.pointer_move(25.0, 15.0, &config);
		assert_eq!(s.pointer_up(), None);
		assert_eq!((s.transform.x, s.transform.y), (20.0, 10.0));
	}

	#[test]
	fn zoom_keeps_cursor_point_and_clamps() {
		let mut s = state();
		let before = s.screen_to_graph(123.0, 45.0);
		s.zoom_at(123.0, 45.0, -1.0);
		let after = s.screen_to_graph(123.0, 45.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
		assert!((s.transform.k - 1.1).abs() < 1e-9);
		for _ in 0..100 {
			s.zoom_at(0.0, 0.0, 1.0);
		}
		assert!((s.transform.k - MIN_ZOOM).abs() < 1e-9);
	}

	#[test]
	fn selection_highlights_edges_for_a_while() {
		let mut s = state();
		assert_eq!(s.select(Some("zug")), Some(0));
		assert!(s.selection.edge_highlighted(0, 1));
		assert!(!s.selection.edge_highlighted(1, 2));
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(!s.selection.edge_highlighted(0, 1));
		assert_eq!(s.selection.node, Some(0));
		assert_eq!(s.select(Some("nichts")), None);
		assert_eq!(s.selection.node, None);
	}

	#[test]
	fn hover_highlights_neighbors_then_fades() {
		let mut s = state();
		s.set_hover(Some(0));
		for _ in 0..30 {
			s.tick(0.016);
		}
		assert!(s.highlight.node_intensity(1) > 0.9);
		assert_eq!(s.highlight.node_intensity(2), 0.0);
		assert!(s.highlight.edge_intensity(0, 1) > 0.9);
		s.set_hover(None);
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert_eq!(s.highlight.max_intensity(), 0.0);
	}

	#[test]
	fn only_edges_of_the_hovered_node_light_up() {
		let data: ThemeData = serde_json::from_value(json!({
			"sections": { "a": { "words": {
				"zug": { "title": "der Zug", "connections": { "related": ["bahnhof", "gleis"] } },
				"bahnhof": { "title": "der Bahnhof", "connections": { "related": ["gleis"] } },
				"gleis": { "title": "das Gleis" }
			} } }
		}))
		.unwrap();
		let graph = WordGraph::build("test", &data);
		let mut highlight = HighlightState::default();
		highlight.set_hover(Some(0), &graph);
		for _ in 0..30 {
			highlight.tick(0.016);
		}
		assert!(highlight.node_intensity(1) > 0.9 && highlight.node_intensity(2) > 0.9);
		assert!(highlight.edge_intensity(0, 1) > 0.9);
		assert!(highlight.edge_intensity(2, 0) > 0.9);
		assert_eq!(highlight.edge_intensity(1, 2), 0.0);

		highlight.set_hover(None, &graph);
		highlight.tick(0.016);
		assert!(highlight.edge_intensity(0, 1) > 0.0);
		assert_eq!(highlight.edge_intensity(1, 2), 0.0);
	}

	#[test]
	fn reloading_the_same_graph_rebuilds_positions() {
		let config = ScaleConfig::default();
		let mut s = state();
		settle(&mut s);
		let p = s.positions[1];
		s.pointer_down(p.x, p.y, &config);
		s.pointer_move(p.x + 80.0, p.y, &config);
		s.pointer_up();
		assert_eq!(s.targets[1].x, p.x + 80.0);

		let graph = s.graph.clone();
		s.set_graph(graph, &GraphStyle::default());
		settle(&mut s);
		assert!(s.positions[1].distance(p) < 0.01);
	}

	#[test]
	fn center_on_moves_target_to_canvas_middle() {
		let mut s = state();
		s.zoom_at(0.0, 0.0, -1.0);
		s.center_on(2);
		let t = s.targets[2];
		let sx = t.x * s.transform.k + s.transform.x;
		let sy = t.y * s.transform.k + s.transform.y;
		assert!((sx - 400.0).abs() < 1e-9 && (sy - 300.0).abs() < 1e-9);
	}

	#[test]
	fn new_graph_clears_selection_and_reset_returns_to_force() {
		let mut s = state();
		s.select(Some("zug"));
		let graph = s.graph.clone();
		s.set_graph(graph, &GraphStyle::default());
		assert_eq!(s.selection.node, None);
		s.reset();
		assert_eq!(s.layout, LayoutKind::Force);
		assert_eq!(s.targets.len(), 3);
	}
}
