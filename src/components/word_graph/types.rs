//! Values exchanged between the canvas component and the surrounding panels.

/// What caused a word to be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOrigin {
	/// Click on the node in the canvas.
	Canvas,
	/// Search hit; the view is centered on the word.
	Search,
	/// Related-word button in the details panel.
	Related,
}

/// The selected word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
	pub id: String,
	pub origin: SelectionOrigin,
}

impl Selection {
	pub fn new(id: impl Into<String>, origin: SelectionOrigin) -> Self {
		Self {
			id: id.into(),
			origin,
		}
	}
}
