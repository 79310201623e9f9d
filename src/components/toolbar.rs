//! Theme picker, layout switch, reset and search controls.

use leptos::prelude::*;
use log::info;

use crate::components::word_graph::LayoutKind;
use crate::config::ThemeEntry;

#[component]
pub fn Toolbar(
	themes: Vec<ThemeEntry>,
	theme_choice: RwSignal<String>,
	layout: RwSignal<LayoutKind>,
	#[prop(into)] loading: Signal<bool>,
	on_load: Callback<String>,
	on_reset: Callback<()>,
	on_search: Callback<String>,
) -> impl IntoView {
	let options = themes
		.into_iter()
		.map(|theme| {
			let name = theme.name.clone();
			view! {
				<option value=theme.name selected=move || theme_choice.get() == name>
					{theme.label}
				</option>
			}
		})
		.collect_view();

	view! {
		<div class="toolbar">
			<select
				class="theme-select"
				prop:value=move || theme_choice.get()
				on:change=move |ev| {
					let name = event_target_value(&ev);
					info!("lexikon-graph: Thema ausgewählt: {}", name);
					theme_choice.set(name);
				}
			>
				{options}
			</select>
			<button
				class="load-btn"
				disabled=move || loading.get()
				on:click=move |_| on_load.run(theme_choice.get_untracked())
			>
				"Thema laden"
			</button>
			<button class="layout-btn" on:click=move |_| layout.update(|kind| *kind = kind.next())>
				{move || layout.get().next().label()}
			</button>
			<button class="reset-btn" on:click=move |_| on_reset.run(())>
				"Zurücksetzen"
			</button>
			<input
				class="search-input"
				type="search"
				placeholder="Wort suchen..."
				on:input=move |ev| on_search.run(event_target_value(&ev))
			/>
		</div>
	}
}
