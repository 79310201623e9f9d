mod details;
mod legend;
mod toolbar;
pub mod word_graph;

pub use details::WordDetails;
pub use legend::GraphLegend;
pub use toolbar::Toolbar;
pub use word_graph::WordGraphCanvas;
