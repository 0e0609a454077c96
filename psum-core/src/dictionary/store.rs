use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::{PsumError, Result};
use super::bundled::BundledDictionaries;
use super::config::{ConfigBlob, DictionaryMeta};
use super::language::Language;
use super::repository::{Changes, DictionaryRepository, MemoryRepository};
use super::resolver::{WordList, WordListResolver, merge_distinct, non_empty, selected_ids};

/// Listing entry for one dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionarySummary {
	pub id: String,
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Distinct words, bundled and user-added.
	pub count: usize,
	/// `true` for dictionaries created by the user.
	pub custom: bool,
}

/// Bundled dictionaries merged with user data from a repository.
///
/// # Responsibilities
/// - Resolve dictionary selections into word lists (`WordListResolver`)
/// - Create, extend, shrink and delete user dictionaries
/// - Export and import user data as a `ConfigBlob`
///
/// # Invariants
/// - Bundled words are never modified
/// - Custom ids never collide with bundled ids of the same language
pub struct DictionaryStore {
	bundled: BundledDictionaries,
	repository: Box<dyn DictionaryRepository>,
}

impl DictionaryStore {
	pub fn new<R: DictionaryRepository + 'static>(bundled: BundledDictionaries, repository: R) -> Self {
		Self {
			bundled,
			repository: Box::new(repository),
		}
	}

	/// Store backed by a `MemoryRepository`.
	pub fn in_memory(bundled: BundledDictionaries) -> Self {
		Self::new(bundled, MemoryRepository::new())
	}

	pub fn bundled(&self) -> &BundledDictionaries {
		&self.bundled
	}

	fn is_custom(&self, lang: Language, id: &str) -> Result<bool> {
		Ok(self.repository.list_created(lang)?.iter().any(|created| created == id))
	}

	fn exists(&self, lang: Language, id: &str) -> Result<bool> {
		Ok(self.bundled.contains(lang, id) || self.is_custom(lang, id)?)
	}

	fn user_words(&self, lang: Language, id: &str) -> Result<Vec<String>> {
		Ok(self.repository.get(lang, id)?.unwrap_or_default())
	}

	/// Bundled then user-added words of one dictionary, without duplicates.
	fn merged_words(&self, lang: Language, id: &str) -> Result<WordList> {
		let user = self.user_words(lang, id)?;
		let bundled = self
			.bundled
			.get(lang, id)
			.map(|dictionary| dictionary.words.as_slice())
			.unwrap_or_default();
		Ok(merge_distinct([bundled, user.as_slice()]))
	}

	/// Words of one known dictionary.
	///
	/// # Errors
	/// `UnknownDictionary` if `id` is neither bundled nor custom.
	pub fn words(&self, lang: Language, id: &str) -> Result<WordList> {
		if !self.exists(lang, id)? {
			return Err(PsumError::UnknownDictionary(id.to_owned()));
		}
		self.merged_words(lang, id)
	}

	/// Every dictionary of `lang`, sorted by id.
	pub fn list(&self, lang: Language) -> Result<Vec<DictionarySummary>> {
		let mut summaries = Vec::new();

		for id in self.bundled.ids(lang) {
			let (label, description) = match self.bundled.get(lang, &id) {
				Some(dictionary) => (dictionary.label_or(&id), dictionary.description.clone()),
				None => (id.clone(), None),
			};
			summaries.push(DictionarySummary {
				count: self.merged_words(lang, &id)?.len(),
				id,
				label,
				description,
				custom: false,
			});
		}
		for id in self.repository.list_created(lang)? {
			if self.bundled.contains(lang, &id) {
				continue;
			}
			let meta = self.repository.get_meta(lang, &id)?;
			summaries.push(DictionarySummary {
				count: self.merged_words(lang, &id)?.len(),
				label: meta.as_ref().map(|m| m.label.clone()).unwrap_or_else(|| id.clone()),
				description: meta.and_then(|m| m.description),
				id,
				custom: true,
			});
		}

		summaries.sort_by(|a, b| a.id.cmp(&b.id));
		Ok(summaries)
	}

	/// Creates a custom dictionary.
	///
	/// # Parameters
	/// - `name`: display name, kept as the label; the id is derived from it
	///   with `slugify`
	/// - `description`: optional free text, blank is treated as absent
	/// - `raw_words`: one word per line; lines are trimmed, blank lines and
	///   duplicates dropped
	///
	/// Words, label and index entry are written in a single commit.
	///
	/// # Errors
	/// - `InvalidDictionary` for a blank name or an empty word list
	/// - `DictionaryExists` if the id is already taken in `lang`
	pub fn create_dictionary(
		&mut self,
		lang: Language,
		name: &str,
		description: Option<&str>,
		raw_words: &str,
	) -> Result<DictionarySummary> {
		let name = name.trim();
		if name.is_empty() {
			return Err(PsumError::InvalidDictionary("a name is required".to_owned()));
		}
		let id = slugify(name);
		if id.is_empty() {
			return Err(PsumError::InvalidDictionary(format!("'{name}' gives an empty identifier")));
		}
		if self.exists(lang, &id)? {
			return Err(PsumError::DictionaryExists(id));
		}

		let lines: Vec<String> = raw_words.lines().map(str::to_owned).collect();
		let words = merge_distinct([lines.as_slice()]);
		if words.is_empty() {
			return Err(PsumError::InvalidDictionary("at least one word is required".to_owned()));
		}

		let meta = DictionaryMeta::new(name, description);
		let mut created = self.repository.list_created(lang)?;
		created.push(id.clone());
		let changes = Changes::new()
			.put_words(lang, &id, &words)?
			.put_meta(lang, &id, &meta)?
			.set_created(lang, &created)?;
		self.repository.commit(changes)?;
		log::info!("created dictionary {lang}/{id} ({} words)", words.len());

		Ok(DictionarySummary {
			label: meta.label,
			description: meta.description,
			count: words.len(),
			id,
			custom: true,
		})
	}

	/// Appends words to a bundled or custom dictionary.
	///
	/// Words already present (bundled or user-added) are skipped.
	/// Returns how many words were actually added.
	pub fn add_words(&mut self, lang: Language, id: &str, words: &[String]) -> Result<usize> {
		let existing = self.words(lang, id)?;
		let mut user = self.user_words(lang, id)?;
		let before = user.len();

		for word in merge_distinct([words]) {
			if !existing.contains(&word) && !user.contains(&word) {
				user.push(word);
			}
		}

		let added = user.len() - before;
		if added > 0 {
			self.repository.put(lang, id, &user)?;
			log::debug!("added {added} words to {lang}/{id}");
		}
		Ok(added)
	}

	/// Removes a user-added word.
	///
	/// Bundled words cannot be removed; `false` is returned for them and
	/// for words that are not present.
	pub fn remove_word(&mut self, lang: Language, id: &str, word: &str) -> Result<bool> {
		if !self.exists(lang, id)? {
			return Err(PsumError::UnknownDictionary(id.to_owned()));
		}
		let mut user = self.user_words(lang, id)?;
		let before = user.len();
		user.retain(|w| w != word);
		if user.len() == before {
			return Ok(false);
		}
		self.repository.put(lang, id, &user)?;
		Ok(true)
	}

	/// Deletes a custom dictionary with its words and label.
	///
	/// # Errors
	/// - `InvalidDictionary` for bundled dictionaries
	/// - `UnknownDictionary` if `id` is not a custom dictionary
	pub fn delete_dictionary(&mut self, lang: Language, id: &str) -> Result<()> {
		if self.bundled.contains(lang, id) {
			return Err(PsumError::InvalidDictionary(format!("{id} is bundled and cannot be deleted")));
		}
		let mut created = self.repository.list_created(lang)?;
		let before = created.len();
		created.retain(|c| c != id);
		if created.len() == before {
			return Err(PsumError::UnknownDictionary(id.to_owned()));
		}

		let changes = Changes::new()
			.remove_words(lang, id)
			.remove_meta(lang, id)
			.set_created(lang, &created)?;
		self.repository.commit(changes)?;
		log::info!("deleted dictionary {lang}/{id}");
		Ok(())
	}

	/// User data of `lang` as a `ConfigBlob`.
	pub fn export_config(&self, lang: Language) -> Result<ConfigBlob> {
		let created = self.repository.list_created(lang)?;
		let mut blob = ConfigBlob {
			created_dictionaries: Some(created.clone()),
			..ConfigBlob::default()
		};

		for id in &created {
			if let Some(meta) = self.repository.get_meta(lang, id)? {
				blob.metadata.insert(id.clone(), meta);
			}
		}
		for id in self.bundled.ids(lang).into_iter().chain(created) {
			if let Some(words) = self.repository.get(lang, &id)? {
				blob.dictionaries.insert(id, words);
			}
		}
		Ok(blob)
	}

	/// Repository id for an identifier read from a `ConfigBlob`.
	///
	/// Bundled ids are kept, anything else goes through `slugify` so that
	/// ids written with hyphens stay selectable.
	fn import_id(&self, lang: Language, id: &str) -> Result<String> {
		if self.bundled.contains(lang, id) {
			return Ok(id.to_owned());
		}
		let slug = slugify(id);
		if slug.is_empty() {
			return Err(PsumError::InvalidDictionary(format!("'{id}' is not a usable identifier")));
		}
		if slug != id {
			log::debug!("importing {lang}/{id} as {slug}");
		}
		Ok(slug)
	}

	/// Writes a `ConfigBlob` into the repository.
	///
	/// Every listed dictionary gets its user words replaced; the created
	/// index is replaced only when the blob carries one. Ids that are not
	/// bundled are normalized with `slugify` (`mes-chats` becomes
	/// `mes_chats`). Everything is written in a single commit.
	///
	/// # Errors
	/// `InvalidDictionary`, with nothing written, when
	/// - an id has no usable characters
	/// - two ids normalize to the same one
	/// - a created id names a bundled dictionary
	pub fn import_config(&mut self, lang: Language, blob: &ConfigBlob) -> Result<()> {
		let mut changes = Changes::new();

		let mut seen = Vec::new();
		for (id, words) in &blob.dictionaries {
			let id = self.import_id(lang, id)?;
			if seen.contains(&id) {
				return Err(PsumError::InvalidDictionary(format!("{id} appears more than once")));
			}
			changes = changes.put_words(lang, &id, words)?;
			seen.push(id);
		}

		if let Some(created) = &blob.created_dictionaries {
			let mut ids: Vec<String> = Vec::new();
			for id in created {
				let id = self.import_id(lang, id)?;
				if self.bundled.contains(lang, &id) {
					return Err(PsumError::InvalidDictionary(format!("{id} is bundled")));
				}
				if !ids.contains(&id) {
					ids.push(id);
				}
			}
			changes = changes.set_created(lang, &ids)?;
		}

		for (id, meta) in &blob.metadata {
			let id = self.import_id(lang, id)?;
			changes = changes.put_meta(lang, &id, &DictionaryMeta::new(&meta.label, meta.description.as_deref()))?;
		}

		self.repository.commit(changes)?;
		log::info!("imported configuration for {lang} ({} dictionaries)", blob.dictionaries.len());
		Ok(())
	}
}

impl WordListResolver for DictionaryStore {
	/// Bundled and user-added words of every selected dictionary, in
	/// selection order, deduplicated. Unknown ids contribute nothing.
	fn resolve(&self, lang: Language, ids: &[String]) -> Result<WordList> {
		let mut lists = Vec::new();
		for id in selected_ids(ids)? {
			if !self.exists(lang, id)? {
				log::warn!("unknown dictionary {lang}/{id}");
				continue;
			}
			lists.push(self.merged_words(lang, id)?);
		}
		non_empty(merge_distinct(lists.iter().map(Vec::as_slice)))
	}
}

/// Derives a dictionary id from a display name.
///
/// Strips accents, lower-cases, keeps alphanumeric characters and turns
/// every other run into a single `_`. Hyphens are never produced: they
/// separate ids in dictionary selections.
pub fn slugify(name: &str) -> String {
	let mut slug = String::new();
	let unaccented = name.nfd().filter(|c| !('\u{300}'..='\u{36f}').contains(c));
	for c in unaccented.flat_map(char::to_lowercase) {
		if c.is_alphanumeric() {
			slug.push(c);
		} else if !slug.is_empty() && !slug.ends_with('_') {
			slug.push('_');
		}
	}
	slug.trim_end_matches('_').to_owned()
}
