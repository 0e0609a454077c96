use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::io::{read_json, write_json};
use super::config::DictionaryMeta;
use super::language::Language;

/// Storage for user-managed dictionary data.
///
/// # Responsibilities
/// - User-added words per `(language, id)`, bundled or custom dictionaries alike
/// - Label and description of custom dictionaries
/// - The per-language index of custom ("created") dictionary ids
///
/// Every write goes through `commit`, which applies a whole `Changes` set or
/// nothing. The generator never talks to a repository; only `DictionaryStore` does.
pub trait DictionaryRepository: Send {
	/// User-added words of a dictionary, `None` if nothing was ever stored.
	fn get(&self, lang: Language, id: &str) -> Result<Option<Vec<String>>>;

	/// Metadata of a custom dictionary, `None` if none was stored.
	fn get_meta(&self, lang: Language, id: &str) -> Result<Option<DictionaryMeta>>;

	/// Ids of custom dictionaries for `lang`, in creation order.
	fn list_created(&self, lang: Language) -> Result<Vec<String>>;

	/// Applies all of `changes` or, on error, none of them.
	fn commit(&mut self, changes: Changes) -> Result<()>;

	/// Replaces the user-added words of a dictionary.
	fn put(&mut self, lang: Language, id: &str, words: &[String]) -> Result<()> {
		self.commit(Changes::new().put_words(lang, id, words)?)
	}

	/// Forgets the user-added words of a dictionary.
	fn remove(&mut self, lang: Language, id: &str) -> Result<()> {
		self.commit(Changes::new().remove_words(lang, id))
	}

	/// Replaces the custom dictionary index for `lang`.
	fn set_created(&mut self, lang: Language, ids: &[String]) -> Result<()> {
		self.commit(Changes::new().set_created(lang, ids)?)
	}
}

/// Key holding the user-added words of a dictionary.
pub fn words_key(lang: Language, id: &str) -> String {
	format!("dictionary_{lang}_{id}")
}

/// Key holding the label and description of a custom dictionary.
pub fn meta_key(lang: Language, id: &str) -> String {
	format!("dictionary_meta_{lang}_{id}")
}

/// Key holding the custom dictionary index of a language.
pub fn created_key(lang: Language) -> String {
	format!("created_dictionaries_{lang}")
}

/// Pending writes, keyed like the repository (`None` removes the key).
///
/// A later change to the same key replaces an earlier one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Changes {
	entries: BTreeMap<String, Option<String>>,
}

impl Changes {
	pub fn new() -> Self {
		Self::default()
	}

	fn set<T: Serialize + ?Sized>(mut self, key: String, value: &T) -> Result<Self> {
		self.entries.insert(key, Some(serde_json::to_string(value)?));
		Ok(self)
	}

	fn unset(mut self, key: String) -> Self {
		self.entries.insert(key, None);
		self
	}

	pub fn put_words(self, lang: Language, id: &str, words: &[String]) -> Result<Self> {
		self.set(words_key(lang, id), words)
	}

	pub fn remove_words(self, lang: Language, id: &str) -> Self {
		self.unset(words_key(lang, id))
	}

	pub fn put_meta(self, lang: Language, id: &str, meta: &DictionaryMeta) -> Result<Self> {
		self.set(meta_key(lang, id), meta)
	}

	pub fn remove_meta(self, lang: Language, id: &str) -> Self {
		self.unset(meta_key(lang, id))
	}

	pub fn set_created(self, lang: Language, ids: &[String]) -> Result<Self> {
		self.set(created_key(lang), ids)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn into_entries(self) -> BTreeMap<String, Option<String>> {
		self.entries
	}
}

/// String key/value storage with JSON text values.
///
/// Any type implementing it is a `DictionaryRepository`, the key layout
/// being `words_key` / `meta_key` / `created_key`.
pub trait KeyValueStore: Send {
	fn get_item(&self, key: &str) -> Option<&str>;

	/// Sets (`Some`) or removes (`None`) every key, all or nothing.
	fn apply(&mut self, changes: BTreeMap<String, Option<String>>) -> Result<()>;

	fn set_item(&mut self, key: &str, value: String) -> Result<()> {
		self.apply(BTreeMap::from([(key.to_owned(), Some(value))]))
	}

	fn remove_item(&mut self, key: &str) -> Result<()> {
		self.apply(BTreeMap::from([(key.to_owned(), None)]))
	}
}

fn read_value<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
	T: DeserializeOwned,
	S: KeyValueStore + ?Sized,
{
	match store.get_item(key) {
		Some(value) => Ok(Some(serde_json::from_str(value)?)),
		None => Ok(None),
	}
}

fn apply_changes(entries: &mut BTreeMap<String, String>, changes: BTreeMap<String, Option<String>>) {
	for (key, value) in changes {
		match value {
			Some(value) => entries.insert(key, value),
			None => entries.remove(&key),
		};
	}
}

impl<S: KeyValueStore> DictionaryRepository for S {
	fn get(&self, lang: Language, id: &str) -> Result<Option<Vec<String>>> {
		read_value(self, &words_key(lang, id))
	}

	fn get_meta(&self, lang: Language, id: &str) -> Result<Option<DictionaryMeta>> {
		read_value(self, &meta_key(lang, id))
	}

	fn list_created(&self, lang: Language) -> Result<Vec<String>> {
		Ok(read_value(self, &created_key(lang))?.unwrap_or_default())
	}

	fn commit(&mut self, changes: Changes) -> Result<()> {
		if changes.is_empty() {
			return Ok(());
		}
		self.apply(changes.into_entries())
	}
}

/// Volatile repository, lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
	entries: BTreeMap<String, String>,
}

impl MemoryRepository {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryRepository {
	fn get_item(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	fn apply(&mut self, changes: BTreeMap<String, Option<String>>) -> Result<()> {
		apply_changes(&mut self.entries, changes);
		Ok(())
	}
}

/// Repository persisted as one JSON object (`{ key: value }`) on disk.
///
/// The whole file is loaded on `open` and rewritten after every mutation.
/// The in-memory copy only changes once the file was written.
/// A single process is expected to own the file.
#[derive(Debug)]
pub struct JsonFileRepository {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl JsonFileRepository {
	/// Opens `path`, starting empty if the file does not exist yet.
	///
	/// # Errors
	/// Returns an error if the file exists but cannot be read or parsed.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref().to_path_buf();
		let entries = if path.exists() {
			read_json(&path)?
		} else {
			log::info!("creating dictionary store at {}", path.display());
			BTreeMap::new()
		};
		Ok(Self { path, entries })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl KeyValueStore for JsonFileRepository {
	fn get_item(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	fn apply(&mut self, changes: BTreeMap<String, Option<String>>) -> Result<()> {
		let mut entries = self.entries.clone();
		apply_changes(&mut entries, changes);
		if entries == self.entries {
			return Ok(());
		}

		write_json(&self.path, &entries)
			.inspect_err(|e| log::error!("failed to write {}: {e}", self.path.display()))?;
		self.entries = entries;
		Ok(())
	}
}
