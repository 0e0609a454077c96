use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generator::capitalize_first;
use crate::io::{get_filename, list_files, normalize_folder, read_json};
use super::language::Language;
use super::resolver::{WordList, WordListResolver, merge_distinct, non_empty, selected_ids};

/// One dictionary file shipped with the application.
///
/// On disk: `{ "label": "Latin", "description": "...", "words": [...] }`,
/// only `words` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledDictionary {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub words: Vec<String>,
}

impl BundledDictionary {
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			label: None,
			description: None,
			words: words.into_iter().map(Into::into).collect(),
		}
	}

	/// Display label, falling back to the capitalized identifier.
	pub fn label_or(&self, id: &str) -> String {
		self.label.clone().unwrap_or_else(|| capitalize_first(id))
	}
}

/// Lookup table of every bundled dictionary, keyed by language then id.
///
/// Built once at startup (see `load`), then only read.
#[derive(Debug, Default, Clone)]
pub struct BundledDictionaries {
	entries: BTreeMap<Language, BTreeMap<String, BundledDictionary>>,
}

impl BundledDictionaries {
	/// Loads every `<dir>/<lang>/<id>.json` file.
	///
	/// # Behavior
	/// - Each supported language has its own sub-directory.
	/// - A missing language directory is skipped (warning logged).
	/// - The dictionary id is the file name without extension.
	///
	/// # Errors
	/// - `dir` is not a directory
	/// - A dictionary file cannot be read or is not valid JSON
	pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
		let folder = normalize_folder(dir.as_ref());
		if !folder.is_dir() {
			return Err(io::Error::new(
				io::ErrorKind::NotFound,
				format!("Expected a directory, got: {}", folder.display()),
			)
			.into());
		}

		let mut bundled = Self::default();
		for lang in Language::ALL {
			let lang_dir = folder.join(lang.as_str());
			if !lang_dir.is_dir() {
				log::warn!("no bundled dictionaries for '{lang}' in {}", folder.display());
				continue;
			}

			for file in list_files(&lang_dir, "json")? {
				let id = get_filename(&file)?;
				let dictionary: BundledDictionary = read_json(&file)
					.inspect_err(|e| log::error!("failed to load {}: {e}", file.display()))?;
				log::debug!("loaded dictionary {lang}/{id} ({} words)", dictionary.words.len());
				bundled.insert(lang, id, dictionary);
			}
		}

		log::info!("loaded {} bundled dictionaries from {}", bundled.len(), folder.display());
		Ok(bundled)
	}

	/// Builds the table from in-memory entries.
	pub fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (Language, String, BundledDictionary)>,
	{
		let mut bundled = Self::default();
		for (lang, id, dictionary) in entries {
			bundled.insert(lang, id, dictionary);
		}
		bundled
	}

	/// Adds or replaces a dictionary.
	pub fn insert(&mut self, lang: Language, id: impl Into<String>, dictionary: BundledDictionary) {
		self.entries.entry(lang).or_default().insert(id.into(), dictionary);
	}

	pub fn get(&self, lang: Language, id: &str) -> Option<&BundledDictionary> {
		self.entries.get(&lang)?.get(id)
	}

	pub fn contains(&self, lang: Language, id: &str) -> bool {
		self.get(lang, id).is_some()
	}

	/// Sorted identifiers available for `lang`.
	pub fn ids(&self, lang: Language) -> Vec<String> {
		self.entries
			.get(&lang)
			.map(|dictionaries| dictionaries.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// Total number of dictionaries across languages.
	pub fn len(&self) -> usize {
		self.entries.values().map(BTreeMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl WordListResolver for BundledDictionaries {
	/// Bundled words only. Unknown ids contribute nothing.
	fn resolve(&self, lang: Language, ids: &[String]) -> Result<WordList> {
		let sources: Vec<&[String]> = selected_ids(ids)?
			.into_iter()
			.filter_map(|id| self.get(lang, id))
			.map(|dictionary| dictionary.words.as_slice())
			.collect();
		non_empty(merge_distinct(sources))
	}
}
