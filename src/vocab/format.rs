//! Display strings for node labels, the details panel and the header.

use super::graph::WordGraph;
use super::types::Word;

const ARTICLES: [&str; 3] = ["der", "die", "das"];
const LABEL_MAX_CHARS: usize = 12;
const LABEL_KEEP_CHARS: usize = 10;

/// Removes a leading `der`/`die`/`das` (any case) followed by whitespace.
pub fn strip_article(title: &str) -> &str {
	for article in ARTICLES {
		if let Some(head) = title.get(..article.len()) {
			let rest = &title[article.len()..];
			if head.eq_ignore_ascii_case(article) && rest.starts_with(char::is_whitespace) {
				return rest.trim_start();
			}
		}
	}
	title
}

/// Short label drawn inside a node.
pub fn node_label(title: &str) -> String {
	let text = strip_article(title);
	if text.chars().count() > LABEL_MAX_CHARS {
		let head: String = text.chars().take(LABEL_KEEP_CHARS).collect();
		format!("{head}...")
	} else {
		text.to_string()
	}
}

/// `Verb`, `Nomen (<article>)` or `Wortgruppe`.
pub fn type_label(word: &Word) -> String {
	match word.article.as_deref() {
		Some("verb") => "Verb".to_string(),
		Some(article) if !article.is_empty() => format!("Nomen ({article})"),
		_ => "Wortgruppe".to_string(),
	}
}

pub fn level_line(word: &Word) -> String {
	format!("Level: {}", word.level.as_deref().unwrap_or("-"))
}

pub fn quoted_example(word: &Word) -> String {
	if word.example.is_empty() {
		String::new()
	} else {
		format!("\"{}\"", word.example)
	}
}

pub fn related_tooltip(label: &str) -> String {
	format!("Zu \"{label}\" wechseln")
}

pub fn theme_heading(graph: &WordGraph) -> String {
	format!("Thema: {}", graph.title)
}

pub fn node_count(graph: &WordGraph) -> String {
	format!("{} Wörter", graph.nodes.len())
}

pub fn edge_count(graph: &WordGraph) -> String {
	format!("{} Verbindungen", graph.edges.len())
}

pub fn bullet(item: &str) -> String {
	format!("• {item}")
}
