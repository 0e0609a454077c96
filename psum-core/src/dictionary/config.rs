use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display data of a custom dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMeta {
	pub label: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl DictionaryMeta {
	/// Trims both fields; a blank description is dropped.
	pub fn new(label: &str, description: Option<&str>) -> Self {
		Self {
			label: label.trim().to_owned(),
			description: description
				.map(str::trim)
				.filter(|d| !d.is_empty())
				.map(str::to_owned),
		}
	}
}

/// Exported user configuration of one language.
///
/// Wire format:
/// ```json
/// {
///   "dictionaries": { "latin": ["extra", "words"] },
///   "createdDictionaries": ["my_dictionary"],
///   "metadata": { "my_dictionary": { "label": "My dictionary" } }
/// }
/// ```
/// `dictionaries` only holds user-added words, never bundled ones.
/// An absent `createdDictionaries` leaves the existing index untouched on import.
/// `metadata` is optional; custom dictionaries without it are labelled by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigBlob {
	#[serde(default)]
	pub dictionaries: BTreeMap<String, Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_dictionaries: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub metadata: BTreeMap<String, DictionaryMeta>,
}

impl ConfigBlob {
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_camel_case_blob() {
		let blob = ConfigBlob::from_json(
			r#"{ "dictionaries": { "latin": ["amet"] }, "createdDictionaries": ["chats"] }"#,
		)
		.unwrap();
		assert_eq!(blob.dictionaries["latin"], vec!["amet".to_owned()]);
		assert_eq!(blob.created_dictionaries, Some(vec!["chats".to_owned()]));
	}

	#[test]
	fn missing_fields_default() {
		let blob = ConfigBlob::from_json("{}").unwrap();
		assert!(blob.dictionaries.is_empty());
		assert_eq!(blob.created_dictionaries, None);
	}

	#[test]
	fn pretty_output_uses_wire_names() {
		let blob = ConfigBlob {
			created_dictionaries: Some(vec![]),
			..ConfigBlob::default()
		};
		let text = blob.to_json_pretty().unwrap();
		assert!(text.contains("\"createdDictionaries\": []"));
		assert!(!text.contains("metadata"));
		assert_eq!(ConfigBlob::from_json(&text).unwrap(), blob);
	}

	#[test]
	fn reads_metadata() {
		let blob = ConfigBlob::from_json(
			r#"{ "metadata": { "chats": { "label": "Mes Chats", "description": "Félins" } } }"#,
		)
		.unwrap();
		assert_eq!(blob.metadata["chats"], DictionaryMeta::new(" Mes Chats ", Some("Félins")));
		assert_eq!(DictionaryMeta::new("A", Some("  ")).description, None);
	}

	#[test]
	fn rejects_wrong_shapes() {
		assert!(ConfigBlob::from_json(r#"{ "dictionaries": ["latin"] }"#).is_err());
		assert!(ConfigBlob::from_json("not json").is_err());
	}
}
