//! Viewer configuration.
//!
//! Read from an optional `<script id="lexikon-config" type="application/json">`
//! element in the host page. Every field has a default, so the element may be
//! missing or specify only what it wants to change.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::word_graph::LayoutConfig;

/// Id of the script element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "lexikon-config";

/// An entry of the theme dropdown.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ThemeEntry {
	/// Resource name, `<data_path>/<name>.json`.
	pub name: String,
	/// Dropdown text.
	pub label: String,
}

impl ThemeEntry {
	fn new(name: &str, label: &str) -> Self {
		Self {
			name: name.to_string(),
			label: label.to_string(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Directory (relative to the page) holding the theme files.
	pub data_path: String,
	/// Theme shown on startup and used as fallback when a load fails.
	pub default_theme: String,
	pub themes: Vec<ThemeEntry>,
	/// Visual style preset name (`default` or `paper`).
	pub style: String,
	/// Minimum query length before search selects anything.
	pub search_min_chars: usize,
	/// How long edges of a newly selected word stay highlighted.
	pub highlight_seconds: f64,
	pub layout: LayoutConfig,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			data_path: "data".to_string(),
			default_theme: "reise".to_string(),
			themes: vec![
				ThemeEntry::new("reise", "Reise"),
				ThemeEntry::new("essen", "Essen & Trinken"),
			],
			style: "default".to_string(),
			search_min_chars: 2,
			highlight_seconds: 3.0,
			layout: LayoutConfig::default(),
		}
	}
}

impl ViewerConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	pub fn theme_url(&self, name: &str) -> String {
		let base = self.data_path.trim_end_matches('/');
		if base.is_empty() {
			format!("{name}.json")
		} else {
			format!("{base}/{name}.json")
		}
	}
}

/// Load the configuration from the page, falling back to defaults.
pub fn load_viewer_config() -> ViewerConfig {
	let Some(text) = config_element_text() else {
		return ViewerConfig::default();
	};

	match ViewerConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"lexikon-graph: config loaded, {} themes, default {:?}",
				config.themes.len(),
				config.default_theme
			);
			config
		}
		Err(e) => {
			warn!("lexikon-graph: invalid config, using defaults: {}", e);
			ViewerConfig::default()
		}
	}
}

fn config_element_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
