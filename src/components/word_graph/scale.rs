//! Zoom-dependent sizes for the word graph.
//!
//! Word nodes are drawn in world space: a node is 22 units wide at any zoom
//! and simply looks bigger when zoomed in. Strokes and rings stay readable by
//! using screen-space or clamped widths instead.
//!
//! # Scaling behaviors
//!
//! - [`ScaleBehavior::World`]: constant world size.
//! - [`ScaleBehavior::Screen`]: constant pixel size; divides by `k`.
//! - [`ScaleBehavior::Clamped`]: world size bounded by min/max pixel sizes.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for a base value at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Defines how alpha scales with zoom level.
#[derive(Clone, Debug)]
pub enum AlphaBehavior {
	/// Constant alpha regardless of zoom.
	Constant,
	/// Zero at `zero_alpha_k`, fully visible from `full_alpha_k` on.
	Fade {
		zero_alpha_k: f64,
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Resting radius in world units.
	pub radius: f64,
	/// Radius while the pointer is over the node.
	pub hovered_radius: f64,
	/// Radius of the selected node.
	pub selected_radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius, measured like `radius`.
	pub hit_radius: f64,
	/// Label font size in world units.
	pub label_size: f64,
	pub label_alpha_behavior: AlphaBehavior,
	/// Kind-colored border width in screen pixels.
	pub border_width: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in world units.
	pub line_width: f64,
	/// Width multiplier of highlighted edges.
	pub highlight_width: f64,
	pub width_behavior: ScaleBehavior,
}

#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width of the selection ring in screen pixels.
	pub width: f64,
	/// Gap between node edge and ring in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 22.0,
				hovered_radius: 26.0,
				selected_radius: 28.0,
				radius_behavior: ScaleBehavior::World,
				hit_radius: 22.0,
				label_size: 10.0,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.25,
					full_alpha_k: 0.5,
				},
				border_width: 2.0,
			},
			edge: EdgeScaleConfig {
				line_width: 2.0,
				highlight_width: 2.0,
				width_behavior: ScaleBehavior::Clamped {
					min_screen: 1.0,
					max_screen: 6.0,
				},
			},
			ring: RingScaleConfig {
				width: 2.0,
				offset: 3.0,
			},
		}
	}
}

/// Scale values for one zoom level, computed once per frame.
/// All sizes are world-space.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub node_radius: f64,
	pub hovered_radius: f64,
	pub selected_radius: f64,
	pub hit_radius: f64,
	/// Canvas font string, e.g. `"bold 10px sans-serif"`.
	pub label_font: String,
	pub label_alpha: f64,
	pub border_width: f64,
	pub edge_line_width: f64,
	pub edge_highlight_width: f64,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node = &config.node;
		let radius = |r: f64| node.radius_behavior.apply(r, k);
		let edge_line_width = config.edge.width_behavior.apply(config.edge.line_width, k);

		Self {
			node_radius: radius(node.radius),
			hovered_radius: radius(node.hovered_radius),
			selected_radius: radius(node.selected_radius),
			hit_radius: radius(node.hit_radius),
			label_font: format!("bold {}px sans-serif", node.label_size),
			label_alpha: node.label_alpha_behavior.apply(k),
			border_width: node.border_width / k,
			edge_line_width,
			edge_highlight_width: edge_line_width * config.edge.highlight_width,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn behaviors() {
		assert_eq!(ScaleBehavior::World.apply(22.0, 4.0), 22.0);
		assert_eq!(ScaleBehavior::Screen.apply(2.0, 4.0), 0.5);
		let clamped = ScaleBehavior::Clamped {
			min_screen: 1.0,
			max_screen: 6.0,
		};
		// 2 world units at k=0.1 would be 0.2px, raised to 1px
		assert!((clamped.apply(2.0, 0.1) - 10.0).abs() < 1e-9);
		assert!((clamped.apply(2.0, 10.0) - 0.6).abs() < 1e-9);
		assert_eq!(clamped.apply(2.0, 1.0), 2.0);
	}

	#[test]
	fn label_fade() {
		let fade = AlphaBehavior::Fade {
			zero_alpha_k: 0.25,
			full_alpha_k: 0.5,
		};
		assert_eq!(fade.apply(0.1), 0.0);
		assert!((fade.apply(0.375) - 0.5).abs() < 1e-9);
		assert_eq!(fade.apply(2.0), 1.0);
		assert_eq!(AlphaBehavior::Constant.apply(0.1), 1.0);
	}

	#[test]
	fn default_radii_order() {
		let s = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert!(s.node_radius < s.hovered_radius && s.hovered_radius < s.selected_radius);
		assert_eq!(s.hit_radius, 22.0);
		assert_eq!(s.label_alpha, 1.0);
	}
}
