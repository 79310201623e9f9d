//! Theme file structures as they appear in the JSON resources.
//!
//! `sections` and `words` are keyed collections. Both JSON objects and JSON
//! arrays are accepted; entries keep their document order either way.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::ThemeError;

/// Descriptive header of a theme file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ThemeMetadata {
	pub title: Option<String>,
	pub description: Option<String>,
	pub level: Option<String>,
}

/// Contents of one `<name>.json` theme file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ThemeData {
	#[serde(default)]
	pub metadata: Option<ThemeMetadata>,
	/// Sections in document order, keyed by section id.
	#[serde(default, deserialize_with = "keyed_entries")]
	pub sections: Vec<(String, Section)>,
}

impl ThemeData {
	pub fn from_json(text: &str) -> Result<Self, ThemeError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Display title: `metadata.title`, falling back to the theme name.
	pub fn title_or<'a>(&'a self, name: &'a str) -> &'a str {
		self.metadata
			.as_ref()
			.and_then(|m| m.title.as_deref())
			.unwrap_or(name)
	}
}

/// A titled group of words sharing a topic facet.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Section {
	#[serde(default)]
	pub title: Option<String>,
	/// Optional CSS color; the style palette is used otherwise.
	#[serde(default)]
	pub color: Option<String>,
	/// Words in document order, keyed by their object key.
	#[serde(default, deserialize_with = "keyed_entries")]
	pub words: Vec<(String, Word)>,
}

/// Links from a word to other words of the same theme.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Connections {
	#[serde(default, deserialize_with = "null_as_default")]
	pub related: Vec<String>,
}

/// Government of a verb: prepositions, cases and usage examples.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VerbManagement {
	#[serde(default, deserialize_with = "null_as_default")]
	pub prepositions: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub cases: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub examples: Vec<String>,
}

/// A single vocabulary entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Word {
	/// Empty when the file omits it; the builder then uses the entry key.
	#[serde(default, deserialize_with = "null_as_default")]
	pub id: String,
	pub title: String,
	/// `der`, `die`, `das`, `verb`, or absent for phrases.
	#[serde(default)]
	pub article: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub translation: String,
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub definition: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub example: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub synonyms: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub antonyms: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub connections: Connections,
	#[serde(default)]
	pub verb_management: Option<VerbManagement>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub phrases: Vec<String>,
	#[serde(default)]
	pub context: Option<String>,
}

impl Word {
	pub fn is_verb(&self) -> bool {
		self.article.as_deref() == Some("verb")
	}
}

/// Reads JSON `null` as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes either `{ "key": T, ... }` or `[T, ...]` into ordered
/// `(key, T)` pairs. Array entries are keyed by their index.
fn keyed_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	struct EntriesVisitor<T>(PhantomData<T>);

	impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
		type Value = Vec<(String, T)>;

		fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
			f.write_str("an object or an array")
		}

		fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
			let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
			while let Some((key, value)) = map.next_entry::<String, T>()? {
				out.push((key, value));
			}
			Ok(out)
		}

		fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
			let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
			while let Some(value) = seq.next_element::<T>()? {
				out.push((out.len().to_string(), value));
			}
			Ok(out)
		}

		fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
			Ok(Vec::new())
		}
	}

	deserializer.deserialize_any(EntriesVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn object_sections_keep_document_order() {
		let text = r#"{
			"metadata": { "title": "Reise" },
			"sections": {
				"zeta": { "title": "Z", "words": { "b": { "id": "b", "title": "B" } } },
				"alpha": { "title": "A", "words": { "a": { "id": "a", "title": "A" } } }
			}
		}"#;
		let data = ThemeData::from_json(text).unwrap();
		let ids: Vec<_> = data.sections.iter().map(|(id, _)| id.as_str()).collect();
		assert_eq!(ids, ["zeta", "alpha"]);
		assert_eq!(data.title_or("reise"), "Reise");
	}

	#[test]
	fn array_sections_are_keyed_by_index() {
		let value = json!({
			"sections": [
				{ "words": [ { "title": "der Koffer" }, { "title": "packen", "article": "verb" } ] }
			]
		});
		let data: ThemeData = serde_json::from_value(value).unwrap();
		assert_eq!(data.sections[0].0, "0");
		let words = &data.sections[0].1.words;
		assert_eq!(words[1].0, "1");
		assert!(words[1].1.is_verb());
		assert_eq!(data.title_or("reise"), "reise");
	}

	#[test]
	fn optional_word_fields_default() {
		let value = json!({ "title": "das Ticket" });
		let word: Word = serde_json::from_value(value).unwrap();
		assert!(word.id.is_empty());
		assert!(word.connections.related.is_empty());
		assert!(word.verb_management.is_none());
		assert!(!word.is_verb());
	}

	#[test]
	fn null_fields_read_as_empty() {
		let value = json!({
			"id": null,
			"title": "der Zug",
			"translation": null,
			"definition": null,
			"example": null,
			"synonyms": null,
			"antonyms": null,
			"phrases": null,
			"connections": { "related": null },
			"verb_management": { "prepositions": null, "cases": null, "examples": ["Ich fahre mit dem Zug."] }
		});
		let word: Word = serde_json::from_value(value).unwrap();
		assert!(word.id.is_empty());
		assert!(word.translation.is_empty() && word.definition.is_empty() && word.example.is_empty());
		assert!(word.synonyms.is_empty() && word.antonyms.is_empty() && word.phrases.is_empty());
		assert!(word.connections.related.is_empty());
		let vm = word.verb_management.unwrap();
		assert!(vm.prepositions.is_empty() && vm.cases.is_empty());
		assert_eq!(vm.examples.len(), 1);

		let word: Word =
			serde_json::from_value(json!({ "title": "abfahren", "connections": null })).unwrap();
		assert!(word.connections.related.is_empty());
	}

	#[test]
	fn null_words_are_empty() {
		let data: ThemeData =
			serde_json::from_value(json!({ "sections": { "s": { "words": null } } })).unwrap();
		assert!(data.sections[0].1.words.is_empty());
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = ThemeData::from_json("{ \"sections\": 42 }").unwrap_err();
		assert!(matches!(err, ThemeError::Parse(_)));
	}
}
