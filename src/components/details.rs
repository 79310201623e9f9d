//! Side panel describing the selected word.

use leptos::prelude::*;

use crate::components::word_graph::{Selection, SelectionOrigin};
use crate::vocab::format::{self, bullet};
use crate::vocab::{WordGraph, WordNode};

/// Tag list (`Synonyme`, `Antonyme`); omitted when empty.
fn tag_section(title: &'static str, items: Vec<String>, class: &'static str) -> Option<impl IntoView> {
	if items.is_empty() {
		return None;
	}
	Some(view! {
		<div class=format!("{class}-section")>
			<strong>{title}</strong>
			<br />
			{items
				.into_iter()
				.map(|item| view! { <span class=format!("tag {class}")>{item}</span>" " })
				.collect_view()}
		</div>
	})
}

/// Bulleted lines.
fn bullet_lines(items: &[String]) -> impl IntoView + use<> {
	items
		.iter()
		.map(|item| view! { {bullet(item)}<br /> })
		.collect_view()
}

/// Details of the selected word: translation, level, type, definition,
/// example, then synonyms, antonyms, related words, verb government,
/// phrases and context.
///
/// Related-word buttons select that word.
#[component]
pub fn WordDetails(
	#[prop(into)] graph: Signal<WordGraph>,
	selection: RwSignal<Option<Selection>>,
) -> impl IntoView {
	move || {
		let found = selection.get().and_then(|sel| {
			graph.with(|g| {
				let idx = g.node_index(&sel.id)?;
				let related: Vec<(String, String)> = g
					.related(idx)
					.into_iter()
					.map(|n| (n.id.clone(), n.word.title.clone()))
					.collect();
				Some((g.nodes[idx].clone(), related))
			})
		});

		match found {
			Some((node, related)) => word_view(node, related, selection).into_any(),
			None => view! {
				<aside class="word-details empty">
					<p>"Klicke auf ein Wort oder suche danach."</p>
				</aside>
			}
			.into_any(),
		}
	}
}

fn word_view(
	node: WordNode,
	related: Vec<(String, String)>,
	selection: RwSignal<Option<Selection>>,
) -> impl IntoView {
	let word = node.word;
	let type_label = format::type_label(&word);
	let level = format::level_line(&word);
	let example = format::quoted_example(&word);
	let verb = word.verb_management.clone().filter(|_| word.is_verb());
	let phrases = word.phrases.clone();
	let context = word.context.clone().filter(|c| !c.is_empty());
	let kind_class = format!("word-type {}", node.kind.css_class());

	let related_section = (!related.is_empty()).then(|| {
		view! {
			<div class="related-section">
				<strong>"Verwandte Wörter:"</strong>
				<br />
				{related
					.into_iter()
					.map(|(id, label)| {
						let title = format::related_tooltip(&label);
						view! {
							<button
								class="related-word-btn"
								title=title
								on:click=move |_| {
									selection.set(Some(Selection::new(id.clone(), SelectionOrigin::Related)))
								}
							>
								{label}
							</button>
						}
					})
					.collect_view()}
			</div>
		}
	});

	let verb_section = verb.map(|vm| {
		view! {
			<div class="verb-management">
				<strong>"Verwaltung:"</strong>
				<br />
				{(!vm.prepositions.is_empty())
					.then(|| {
						view! {
							<em>"Präpositionen:"</em>
							" "
							{vm.prepositions.join(", ")}
							<br />
						}
					})}
				{(!vm.cases.is_empty())
					.then(|| {
						view! {
							<em>"Kasus:"</em>
							" "
							{vm.cases.join(", ")}
							<br />
						}
					})}
				{(!vm.examples.is_empty())
					.then(|| {
						view! {
							<em>"Beispiele:"</em>
							<br />
							{bullet_lines(&vm.examples)}
						}
					})}
			</div>
		}
	});

	let phrases_section = (!phrases.is_empty()).then(|| {
		view! {
			<div class="phrases-section">
				<strong>"Phrasen:"</strong>
				<br />
				{bullet_lines(&phrases)}
			</div>
		}
	});

	let context_section = context.map(|text| {
		view! {
			<div class="context-section">
				<strong>"Kontext:"</strong>
				<br />
				<p>{text}</p>
			</div>
		}
	});

	view! {
		<aside class="word-details">
			<h2 class="word-title">{word.title.clone()}</h2>
			<p class="word-translation">{word.translation.clone()}</p>
			<div class="word-meta">
				<span class="word-level">{level}</span>
				<span class=kind_class>{type_label}</span>
			</div>
			<p class="word-definition">{word.definition.clone()}</p>
			<p class="word-example">{example}</p>
			<div class="connections">
				{tag_section("Synonyme:", word.synonyms.clone(), "synonym")}
				{tag_section("Antonyme:", word.antonyms.clone(), "antonym")}
				{related_section}
				{verb_section}
				{phrases_section}
				{context_section}
			</div>
		</aside>
	}
}
