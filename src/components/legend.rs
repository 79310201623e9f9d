//! Legend and counts overlay.

use leptos::prelude::*;

use crate::components::word_graph::GraphStyle;
use crate::vocab::{WordGraph, WordKind};

/// Sections with their fill color and word count, then the border colors of
/// the word kinds.
#[component]
pub fn GraphLegend(#[prop(into)] graph: Signal<WordGraph>, style: GraphStyle) -> impl IntoView {
	let kinds = WordKind::ALL
		.into_iter()
		.map(|kind| {
			let swatch = format!(
				"border: 3px solid {}",
				style.node.kind_color(kind).to_css_rgb()
			);
			view! {
				<div class="legend-item">
					<span class="legend-swatch kind" style=swatch></span>
					<span>{kind.label()}</span>
				</div>
			}
		})
		.collect_view();

	let sections = move || {
		graph.with(|g| {
			g.sections
				.iter()
				.enumerate()
				.map(|(idx, section)| {
					let swatch = format!(
						"background-color: {}",
						style.section_color(idx, section.color.as_deref()).to_css_rgb()
					);
					view! {
						<div class="legend-item">
							<span class="legend-swatch" style=swatch></span>
							<span>{section.title.clone()}</span>
							<span class="legend-count">{format!("({})", section.word_count)}</span>
						</div>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="graph-legend">
			<h3>"Abschnitte"</h3>
			<div class="legend-list">{sections}</div>
			<h3>"Wortarten"</h3>
			<div class="legend-list">{kinds}</div>
		</div>
	}
}
