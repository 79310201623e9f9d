//! Fetches theme files over HTTP and builds their graphs.

use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use super::graph::WordGraph;
use super::types::ThemeData;
use crate::config::ViewerConfig;
use crate::error::ThemeError;

fn js_reason(value: &wasm_bindgen::JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch and parse `<data_path>/<name>.json`.
pub async fn fetch_theme(config: &ViewerConfig, name: &str) -> Result<ThemeData, ThemeError> {
	let url = config.theme_url(name);
	let window: Window = web_sys::window().ok_or(ThemeError::NoWindow)?;

	let promise: js_sys::Promise = window.fetch_with_str(&url);
	let response: Response = JsFuture::from(promise)
		.await
		.and_then(|value| value.dyn_into())
		.map_err(|e| ThemeError::Fetch {
			url: url.clone(),
			reason: js_reason(&e),
		})?;

	if !response.ok() {
		return Err(ThemeError::Status {
			url,
			status: response.status(),
		});
	}

	let body_err = |e: wasm_bindgen::JsValue| ThemeError::Body {
		url: url.clone(),
		reason: js_reason(&e),
	};
	let text = JsFuture::from(response.text().map_err(body_err)?)
		.await
		.map_err(body_err)?
		.as_string()
		.ok_or_else(|| ThemeError::Body {
			url: url.clone(),
			reason: "body is not text".to_string(),
		})?;

	ThemeData::from_json(&text)
}

/// Theme to try after `failed` could not be loaded: the configured default,
/// unless that is what failed.
fn fallback_theme<'a>(config: &'a ViewerConfig, failed: &str) -> Option<&'a str> {
	(failed != config.default_theme).then_some(config.default_theme.as_str())
}

/// Load a theme and build its graph.
///
/// When a theme other than the configured default fails, the user is told
/// and the default theme is loaded instead.
pub async fn load_theme(config: &ViewerConfig, name: &str) -> Result<WordGraph, ThemeError> {
	let err = match fetch_theme(config, name).await {
		Ok(data) => {
			info!("lexikon-graph: Thema \"{}\" geladen", name);
			return Ok(WordGraph::build(name, &data));
		}
		Err(e) => e,
	};
	error!("lexikon-graph: Fehler beim Laden des Themas \"{}\": {}", name, err);

	let Some(fallback) = fallback_theme(config, name) else {
		return Err(err);
	};
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&format!(
			"Thema \"{name}\" nicht gefunden. Lade Standard-Thema."
		));
	}
	let data = fetch_theme(config, fallback).await?;
	info!("lexikon-graph: Thema \"{}\" geladen", fallback);
	Ok(WordGraph::build(fallback, &data))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn other_themes_fall_back_to_default() {
		let config = ViewerConfig::default();
		assert_eq!(fallback_theme(&config, "essen"), Some("reise"));
		assert_eq!(fallback_theme(&config, "reise"), None);

		let config = ViewerConfig {
			default_theme: "essen".to_string(),
			..ViewerConfig::default()
		};
		assert_eq!(fallback_theme(&config, "reise"), Some("essen"));
		assert_eq!(fallback_theme(&config, "essen"), None);
	}
}
