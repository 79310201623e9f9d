//! Word graph extraction: nodes from section words, edges from `related` links.

use std::collections::{HashMap, HashSet};

use log::warn;

use super::format::strip_article;
use super::types::{ThemeData, Word};

/// Grammatical category used for coloring and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordKind {
	Noun,
	Verb,
	Phrase,
}

impl WordKind {
	pub const ALL: [WordKind; 3] = [WordKind::Noun, WordKind::Verb, WordKind::Phrase];

	pub fn of(word: &Word) -> Self {
		// The article's own space does not make a phrase (`der Koffer` is a
		// noun), and an empty phrase list counts as no phrases.
		if word.is_verb() {
			WordKind::Verb
		} else if strip_article(&word.title).contains(' ') || !word.phrases.is_empty() {
			WordKind::Phrase
		} else {
			WordKind::Noun
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			WordKind::Noun => "Nomen",
			WordKind::Verb => "Verb",
			WordKind::Phrase => "Wortgruppe",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			WordKind::Noun => "noun",
			WordKind::Verb => "verb",
			WordKind::Phrase => "phrase",
		}
	}
}

/// A word placed in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct WordNode {
	/// Resolved id (the file's `id`, or the entry key when absent).
	pub id: String,
	pub word: Word,
	pub kind: WordKind,
	/// Index into [`WordGraph::sections`].
	pub section: usize,
}

/// Per-section summary used for colors, layout partitioning and the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionInfo {
	pub id: String,
	pub title: String,
	pub color: Option<String>,
	pub word_count: usize,
}

/// Immutable graph of one loaded theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordGraph {
	/// Resource name the theme was loaded from (e.g. `reise`).
	pub name: String,
	/// Display title.
	pub title: String,
	pub sections: Vec<SectionInfo>,
	pub nodes: Vec<WordNode>,
	/// Undirected edges as node index pairs, in discovery order.
	pub edges: Vec<(usize, usize)>,
	index: HashMap<String, usize>,
}

impl WordGraph {
	pub fn build(name: &str, data: &ThemeData) -> Self {
		let mut sections = Vec::with_capacity(data.sections.len());
		let mut nodes = Vec::new();
		let mut index = HashMap::new();

		for (section_id, section) in &data.sections {
			let section_idx = sections.len();
			let mut word_count = 0;
			for (key, word) in &section.words {
				let id = if word.id.is_empty() {
					key.clone()
				} else {
					word.id.clone()
				};
				if index.contains_key(&id) {
					warn!("lexikon-graph: duplicate word id {id:?} in theme {name:?}, skipping");
					continue;
				}
				index.insert(id.clone(), nodes.len());
				nodes.push(WordNode {
					id,
					kind: WordKind::of(word),
					word: word.clone(),
					section: section_idx,
				});
				word_count += 1;
			}
			sections.push(SectionInfo {
				id: section_id.clone(),
				title: section.title.clone().unwrap_or_else(|| section_id.clone()),
				color: section.color.clone(),
				word_count,
			});
		}

		let mut edges = Vec::new();
		let mut seen = HashSet::new();
		for (src, node) in nodes.iter().enumerate() {
			for related in &node.word.connections.related {
				let Some(&tgt) = index.get(related) else {
					continue;
				};
				if src == tgt {
					continue;
				}
				if seen.insert((src.min(tgt), src.max(tgt))) {
					edges.push((src, tgt));
				}
			}
		}

		Self {
			name: name.to_string(),
			title: data.title_or(name).to_string(),
			sections,
			nodes,
			edges,
			index,
		}
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn node(&self, id: &str) -> Option<&WordNode> {
		self.node_index(id).map(|i| &self.nodes[i])
	}

	/// Nodes sharing an edge with `idx`.
	pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
		self.edges.iter().filter_map(move |&(a, b)| {
			if a == idx {
				Some(b)
			} else if b == idx {
				Some(a)
			} else {
				None
			}
		})
	}

	/// Related words of `idx` in the order its `related` list names them.
	/// Ids that do not resolve in this theme are dropped.
	pub fn related(&self, idx: usize) -> Vec<&WordNode> {
		self.nodes[idx]
			.word
			.connections
			.related
			.iter()
			.filter_map(|id| self.node(id))
			.collect()
	}

	/// First node whose title or translation contains `query`
	/// (case-insensitive). Queries shorter than `min_chars` find nothing.
	pub fn search(&self, query: &str, min_chars: usize) -> Option<usize> {
		let query = query.trim().to_lowercase();
		if query.chars().count() < min_chars.max(1) {
			return None;
		}
		self.nodes.iter().position(|n| {
			n.word.title.to_lowercase().contains(&query)
				|| n.word.translation.to_lowercase().contains(&query)
		})
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn sample() -> WordGraph {
		let data: ThemeData = serde_json::from_value(json!({
			"metadata": { "title": "Reise" },
			"sections": {
				"flughafen": {
					"title": "Am Flughafen",
					"color": "#1f77b4",
					"words": {
						"flug": {
							"id": "flug", "title": "der Flug", "article": "der",
							"translation": "flight",
							"connections": { "related": ["abfliegen", "koffer", "flug", "unbekannt"] }
						},
						"abfliegen": {
							"id": "abfliegen", "title": "abfliegen", "article": "verb",
							"translation": "to take off",
							"connections": { "related": ["flug"] }
						}
					}
				},
				"hotel": {
					"words": {
						"koffer": {
							"id": "koffer", "title": "der Koffer", "article": "der",
							"translation": "suitcase"
						},
						"gute_reise": { "title": "Gute Reise!", "translation": "have a nice trip" },
						"dup": { "id": "flug", "title": "der Flug (doppelt)" }
					}
				}
			}
		}))
		.unwrap();
		WordGraph::build("reise", &data)
	}

	#[test]
	fn nodes_follow_document_order_and_skip_duplicates() {
		let g = sample();
		let ids: Vec<_> = g.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["flug", "abfliegen", "koffer", "gute_reise"]);
		assert_eq!(g.sections[1].word_count, 2);
		assert_eq!(g.sections[1].title, "hotel");
		assert_eq!(g.title, "Reise");
	}

	#[test]
	fn kinds_ignore_the_article_space() {
		let g = sample();
		let kind = |id| g.node(id).unwrap().kind;
		assert_eq!(kind("flug"), WordKind::Noun);
		assert_eq!(kind("abfliegen"), WordKind::Verb);
		assert_eq!(kind("gute_reise"), WordKind::Phrase);
		assert_eq!(kind("koffer"), WordKind::Noun);

		let word = Word {
			title: "das Ticket".into(),
			article: Some("das".into()),
			..Word::default()
		};
		assert_eq!(WordKind::of(&word), WordKind::Noun);
		let word = Word {
			phrases: vec!["ein Ticket lösen".into()],
			..word
		};
		assert_eq!(WordKind::of(&word), WordKind::Phrase);
	}

	#[test]
	fn edges_are_deduplicated_and_resolved() {
		let g = sample();
		// flug-abfliegen listed from both ends, self link and unknown id dropped
		assert_eq!(g.edges, vec![(0, 1), (0, 2)]);
		let mut n: Vec<_> = g.neighbors(0).collect();
		n.sort();
		assert_eq!(n, [1, 2]);
		assert_eq!(g.neighbors(3).count(), 0);
	}

	#[test]
	fn related_keeps_list_order() {
		let g = sample();
		let related: Vec<_> = g.related(0).iter().map(|n| n.id.as_str()).collect();
		assert_eq!(related, ["abfliegen", "koffer", "flug"]);
	}

	#[test]
	fn search_matches_title_or_translation() {
		let g = sample();
		assert_eq!(g.search("KOFF", 2), Some(2));
		assert_eq!(g.search("  suitcase ", 2), Some(2));
		assert_eq!(g.search("flig", 2), Some(0));
		assert_eq!(g.search("k", 2), None);
		assert_eq!(g.search("zzz", 2), None);
	}

	#[test]
	fn missing_word_id_uses_entry_key() {
		let g = sample();
		assert!(g.node("gute_reise").is_some());
	}
}
