//! lexikon-graph: Interactive vocabulary graph for German learning themes.
//!
//! This crate provides a WASM viewer that loads a theme file, shows its words
//! as a graph linked by their related words, and describes the selected word
//! in a side panel. Layouts, pan/zoom, search and theme switching run entirely
//! in the browser.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod config;
pub mod error;
pub mod vocab;

use components::word_graph::{GraphStyle, LayoutKind, Selection, SelectionOrigin};
use components::{GraphLegend, Toolbar, WordDetails, WordGraphCanvas};
use config::load_viewer_config;
use vocab::{WordGraph, format, load_theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("lexikon-graph: logging initialized");
}

/// Main application component.
/// Loads the configured default theme and wires the toolbar, canvas, legend
/// and details panel together.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_viewer_config();
	let style = GraphStyle::by_name(&config.style).unwrap_or_else(|| {
		warn!("lexikon-graph: unknown style {:?}, using default", config.style);
		GraphStyle::default()
	});

	let graph = RwSignal::new(WordGraph::default());
	let layout = RwSignal::new(LayoutKind::default());
	let selection = RwSignal::new(None::<Selection>);
	let reset = RwSignal::new(0u32);
	let theme_choice = RwSignal::new(config.default_theme.clone());
	let load_error = RwSignal::new(None::<String>);
	let loading = RwSignal::new(false);

	let load_config = config.clone();
	let on_load = Callback::new(move |name: String| {
		let config = load_config.clone();
		loading.set(true);
		spawn_local(async move {
			match load_theme(&config, &name).await {
				Ok(loaded) => {
					theme_choice.set(loaded.name.clone());
					selection.set(None);
					load_error.set(None);
					graph.set(loaded);
				}
				Err(e) => load_error.set(Some(e.to_string())),
			}
			loading.set(false);
		});
	});
	on_load.run(config.default_theme.clone());

	let min_chars = config.search_min_chars;
	let on_search = Callback::new(move |query: String| {
		let hit = graph.with_untracked(|g| {
			g.search(&query, min_chars)
				.map(|idx| g.nodes[idx].id.clone())
		});
		if let Some(id) = hit {
			selection.set(Some(Selection::new(id, SelectionOrigin::Search)));
		}
	});

	let on_reset = Callback::new(move |_: ()| {
		layout.set(LayoutKind::Force);
		reset.update(|n| *n = n.wrapping_add(1));
	});

	let themes = config.themes.clone();

	view! {
		<Html attr:lang="de" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Lexikon Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<WordGraphCanvas
				data=graph
				layout=layout
				selection=selection
				reset=reset
				config=config
				fullscreen=true
			/>
			<header class="graph-overlay">
				<h1>{move || graph.with(format::theme_heading)}</h1>
				<p class="graph-stats">
					<span>{move || graph.with(format::node_count)}</span>
					" · "
					<span>{move || graph.with(format::edge_count)}</span>
				</p>
				<Toolbar
					themes=themes
					theme_choice=theme_choice
					layout=layout
					loading=loading
					on_load=on_load
					on_reset=on_reset
					on_search=on_search
				/>
				{move || {
					load_error
						.get()
						.map(|message| view! { <div class="error-banner">{message}</div> })
				}}
			</header>
			<GraphLegend graph=graph style=style />
			<WordDetails graph=graph selection=selection />
		</div>
	}
}
