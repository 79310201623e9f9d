//! Canvas rendering for the word graph.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edges, highlighted edges last (world space)
//! 3. Nodes with labels, the selected and hovered ones on top

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::Point;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::WordGraphState;
use super::style::{Color, GraphStyle};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &WordGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	style: &GraphStyle,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, style);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, style);
	draw_nodes(state, ctx, &scale, style);

	ctx.restore();
}

fn draw_background(state: &WordGraphState, ctx: &CanvasRenderingContext2d, style: &GraphStyle) {
	let gradient = if style.background.use_gradient {
		ctx.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.8,
		)
		.ok()
	} else {
		None
	};

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &style.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &style.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&style.background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Emphasis of an edge in `0..=1`: selection flash or hover neighborhood.
fn edge_emphasis(state: &WordGraphState, a: usize, b: usize) -> f64 {
	let hover = smooth_step(state.highlight.edge_intensity(a, b));
	if state.selection.edge_highlighted(a, b) {
		// fade out during the last half second
		let flash = (state.selection.edge_highlight_remaining / 0.5).min(1.0);
		hover.max(smooth_step(flash))
	} else {
		hover
	}
}

fn draw_edges(
	state: &WordGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	style: &GraphStyle,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let mut emphasized = Vec::new();

	for &(a, b) in &state.graph.edges {
		let t = edge_emphasis(state, a, b);
		if t > 0.01 {
			emphasized.push((a, b, t));
			continue;
		}
		let alpha = style.edge.color.a * (1.0 - 0.6 * max_t);
		ctx.set_stroke_style_str(&style.edge.color.with_alpha(alpha).to_css());
		ctx.set_line_width(scale.edge_line_width);
		stroke_line(ctx, state.positions[a], state.positions[b]);
	}

	for (a, b, t) in emphasized {
		let base = style.edge.color;
		let hi = style.edge.highlight_color;
		let color = Color::rgba(
			lerp_u8(base.r, hi.r, t),
			lerp_u8(base.g, hi.g, t),
			lerp_u8(base.b, hi.b, t),
			base.a + (hi.a - base.a) * t,
		);
		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(
			scale.edge_line_width + (scale.edge_highlight_width - scale.edge_line_width) * t,
		);
		stroke_line(ctx, state.positions[a], state.positions[b]);
	}
}

fn lerp_u8(from: u8, to: u8, t: f64) -> u8 {
	(from as f64 + (to as f64 - from as f64) * t.clamp(0.0, 1.0)).round() as u8
}

fn stroke_line(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
}

fn draw_nodes(
	state: &WordGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	style: &GraphStyle,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let selected = state.selection.node;
	let hovered = state.highlight.hovered_node;

	// Pass 1: plain nodes, dimmed while something is hovered
	for idx in 0..state.positions.len() {
		if Some(idx) == selected || state.highlight.node_intensity(idx) > 0.001 {
			continue;
		}
		let alpha = 1.0 - 0.6 * max_t;
		draw_node(state, ctx, scale, style, idx, scale.node_radius, alpha);
	}

	// Pass 2: hover neighborhood on top
	for idx in 0..state.positions.len() {
		let t = state.highlight.node_intensity(idx);
		if Some(idx) == selected || t <= 0.001 {
			continue;
		}
		let eased = smooth_step(t);
		let dim = 1.0 - 0.6 * max_t;
		let radius = if Some(idx) == hovered {
			scale.node_radius + (scale.hovered_radius - scale.node_radius) * eased
		} else {
			scale.node_radius
		};
		draw_node(state, ctx, scale, style, idx, radius, dim + (1.0 - dim) * eased);
	}

	// Pass 3: selected node with its ring
	if let Some(idx) = selected {
		let radius = scale.selected_radius;
		draw_node(state, ctx, scale, style, idx, radius, 1.0);

		let p = state.positions[idx];
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius + scale.ring_offset, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&style.node.ring_color.to_css());
		ctx.set_line_width(scale.ring_width);
		ctx.stroke();
	}
}

fn draw_node(
	state: &WordGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	style: &GraphStyle,
	idx: usize,
	radius: f64,
	alpha: f64,
) {
	let p = state.positions[idx];
	let info = &state.nodes[idx];

	ctx.set_global_alpha(alpha);

	let gradient = if style.node.use_gradient {
		ctx.create_radial_gradient(
			p.x - radius * 0.3,
			p.y - radius * 0.3,
			0.0,
			p.x,
			p.y,
			radius,
		)
		.ok()
	} else {
		None
	};

	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &info.fill.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &info.fill.to_css());
			let _ = gradient.add_color_stop(1.0, &info.fill.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&info.fill.to_css()),
	}
	ctx.fill();

	ctx.set_stroke_style_str(&info.border.to_css());
	ctx.set_line_width(scale.border_width);
	ctx.stroke();

	let label_alpha = alpha * scale.label_alpha;
	if label_alpha > 0.05 {
		ctx.set_global_alpha(label_alpha);
		ctx.set_fill_style_str(&style.node.label_color.to_css());
		ctx.set_font(&scale.label_font);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&info.label, p.x, p.y);
	}

	ctx.set_global_alpha(1.0);
}
