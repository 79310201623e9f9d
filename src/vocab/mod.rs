//! Vocabulary themes: file format, graph extraction, loading and display text.

pub mod format;
mod graph;
mod loader;
mod types;

pub use graph::{SectionInfo, WordGraph, WordKind, WordNode};
pub use loader::{fetch_theme, load_theme};
pub use types::{Connections, Section, ThemeData, ThemeMetadata, VerbManagement, Word};
