//! Errors raised while loading vocabulary themes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
	#[error("no browser window available")]
	NoWindow,
	#[error("request for {url} failed: {reason}")]
	Fetch { url: String, reason: String },
	#[error("{url} answered with HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("could not read response body of {url}: {reason}")]
	Body { url: String, reason: String },
	#[error("invalid theme file: {0}")]
	Parse(#[from] serde_json::Error),
}
