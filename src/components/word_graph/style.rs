//! Colors and visual presets for the word graph.

use crate::vocab::WordKind;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Parses `#RRGGBB`, `#RGB` and `rgb()`/`rgba()` notation.
	pub fn parse(text: &str) -> Option<Self> {
		let text = text.trim();
		if let Some(hex) = text.strip_prefix('#') {
			let channel = |s: &str| u8::from_str_radix(s, 16).ok();
			return match hex.len() {
				6 => Some(Color::rgb(
					channel(hex.get(0..2)?)?,
					channel(hex.get(2..4)?)?,
					channel(hex.get(4..6)?)?,
				)),
				3 => {
					let short = |i: usize| channel(hex.get(i..i + 1)?).map(|v| v * 17);
					Some(Color::rgb(short(0)?, short(1)?, short(2)?))
				}
				_ => None,
			};
		}

		let inner = text
			.strip_prefix("rgba(")
			.or_else(|| text.strip_prefix("rgb("))?
			.strip_suffix(')')?;
		let nums: Vec<&str> = inner.split(',').map(str::trim).collect();
		let a = match nums.get(3) {
			Some(s) => s.parse().ok()?,
			None => 1.0,
		};
		Some(Color::rgba(
			nums.first()?.parse().ok()?,
			nums.get(1)?.parse().ok()?,
			nums.get(2)?.parse().ok()?,
			a,
		))
	}
}

/// Section colors, cycled by section index.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Distinct category colors, readable on dark backgrounds.
	pub fn category() -> Self {
		Self {
			colors: vec![
				Color::rgb(31, 119, 180),  // Blue
				Color::rgb(255, 127, 14),  // Orange
				Color::rgb(44, 160, 44),   // Green
				Color::rgb(214, 39, 40),   // Red
				Color::rgb(148, 103, 189), // Purple
				Color::rgb(140, 86, 75),   // Brown
				Color::rgb(227, 119, 194), // Pink
				Color::rgb(188, 189, 34),  // Olive
				Color::rgb(23, 190, 207),  // Cyan
			],
		}
	}

	/// Soft pastel palette for light backgrounds.
	pub fn pastel() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 180, 190), // Dusty rose
				Color::rgb(180, 195, 205), // Powder blue
				Color::rgb(190, 200, 180), // Sage
				Color::rgb(205, 195, 180), // Cream
				Color::rgb(185, 190, 200), // Lavender gray
				Color::rgb(195, 185, 175), // Mushroom
				Color::rgb(180, 200, 195), // Seafoam
				Color::rgb(200, 190, 185), // Blush
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Center color of the radial gradient.
	pub color_secondary: Color,
	pub use_gradient: bool,
}

#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	/// Color of edges around the selected or hovered word.
	pub highlight_color: Color,
}

#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	pub label_color: Color,
	pub ring_color: Color,
	/// Border colors per word kind.
	pub noun: Color,
	pub verb: Color,
	pub phrase: Color,
}

impl NodeStyle {
	pub fn kind_color(&self, kind: WordKind) -> Color {
		match kind {
			WordKind::Noun => self.noun,
			WordKind::Verb => self.verb,
			WordKind::Phrase => self.phrase,
		}
	}
}

/// Complete visual style.
#[derive(Clone, Debug)]
pub struct GraphStyle {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub palette: NodePalette,
}

impl GraphStyle {
	/// Dark background with category colors (default)
	pub fn default_style() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.45),
				highlight_color: Color::rgba(255, 200, 80, 0.95),
			},
			node: NodeStyle {
				use_gradient: true,
				label_color: Color::rgba(255, 255, 255, 0.95),
				ring_color: Color::rgb(255, 200, 80),
				noun: Color::rgb(100, 181, 246),
				verb: Color::rgb(239, 83, 80),
				phrase: Color::rgb(102, 187, 106),
			},
			palette: NodePalette::category(),
		}
	}

	/// Light paper-like style
	pub fn paper() -> Self {
		Self {
			name: "paper",
			background: BackgroundStyle {
				color: Color::rgb(248, 246, 240),
				color_secondary: Color::rgb(248, 246, 240),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgba(90, 100, 110, 0.35),
				highlight_color: Color::rgba(230, 120, 20, 0.9),
			},
			node: NodeStyle {
				use_gradient: false,
				label_color: Color::rgb(30, 30, 30),
				ring_color: Color::rgb(230, 120, 20),
				noun: Color::rgb(30, 90, 160),
				verb: Color::rgb(180, 40, 40),
				phrase: Color::rgb(40, 130, 60),
			},
			palette: NodePalette::pastel(),
		}
	}

	/// Preset by configuration name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_style()),
			"paper" => Some(Self::paper()),
			_ => None,
		}
	}

	/// Fill color of a section: its own color when valid, the palette otherwise.
	pub fn section_color(&self, index: usize, own: Option<&str>) -> Color {
		own.and_then(Color::parse)
			.unwrap_or_else(|| self.palette.get(index))
	}
}

impl Default for GraphStyle {
	fn default() -> Self {
		Self::default_style()
	}
}
