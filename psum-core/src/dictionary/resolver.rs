use std::collections::HashSet;

use crate::error::{PsumError, Result};
use super::language::Language;

/// Flat sampling pool handed to the generator.
pub type WordList = Vec<String>;

/// Turns a selection of dictionary identifiers into one word list.
///
/// Implementations differ in where words come from (bundled files only,
/// bundled files plus user storage...), the contract is shared:
///
/// # Errors
/// - `NoDictionarySelected` if `ids` holds no non-blank identifier
/// - `EmptyWordList` if the selected dictionaries yield no word
pub trait WordListResolver {
	fn resolve(&self, lang: Language, ids: &[String]) -> Result<WordList>;
}

/// Drops blank identifiers, fails if nothing is left.
pub(crate) fn selected_ids(ids: &[String]) -> Result<Vec<&str>> {
	let selected: Vec<&str> = ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()).collect();
	if selected.is_empty() {
		return Err(PsumError::NoDictionarySelected);
	}
	Ok(selected)
}

/// Concatenates word sources, keeping the first occurrence of every word.
///
/// Blank entries are dropped. Comparison is exact (case-sensitive).
pub(crate) fn merge_distinct<'a, I>(sources: I) -> WordList
where
	I: IntoIterator<Item = &'a [String]>,
{
	let mut seen = HashSet::new();
	let mut merged = Vec::new();
	for source in sources {
		for word in source {
			let word = word.trim();
			if !word.is_empty() && seen.insert(word.to_owned()) {
				merged.push(word.to_owned());
			}
		}
	}
	merged
}

/// Ensures the final pool is not empty.
pub(crate) fn non_empty(words: WordList) -> Result<WordList> {
	if words.is_empty() {
		return Err(PsumError::EmptyWordList);
	}
	Ok(words)
}
