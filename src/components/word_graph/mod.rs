//! Word graph visualization component.
//!
//! Renders a vocabulary theme on an HTML canvas with:
//! - Force, circle and two section-aware layouts with animated transitions
//! - Click selection with a timed edge highlight
//! - Pan, zoom and node dragging
//! - Hover highlight of a word's neighborhood
//!
//! # Example
//!
//! ```ignore
//! let selection = RwSignal::new(None);
//! view! {
//!     <WordGraphCanvas
//!         data=graph
//!         layout=layout
//!         selection=selection
//!         reset=reset
//!         config=ViewerConfig::default()
//!         fullscreen=true
//!     />
//! }
//! ```

mod component;
pub mod layout;
mod render;
pub mod scale;
mod state;
pub mod style;
mod types;

pub use component::WordGraphCanvas;
pub use layout::{LayoutConfig, LayoutKind, Point};
pub use style::GraphStyle;
pub use types::{Selection, SelectionOrigin};
