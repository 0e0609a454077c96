use std::fmt;
use std::str::FromStr;

use crate::error::{PsumError, Result};

/// Upper bound on paragraphs accepted from callers.
pub const MAX_PARAGRAPHS: usize = 50;

/// Upper bound on words per sentence accepted from callers.
pub const MAX_WORDS_PER_SENTENCE: usize = 50;

/// Upper bound on sentences per paragraph accepted from callers.
pub const MAX_SENTENCES_PER_PARAGRAPH: usize = 30;

/// Closed integer interval `[min, max]`.
///
/// # Invariants
/// - `min >= 1`
/// - `min <= max`
///
/// Both are enforced at construction, so a `Range` in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
	min: usize,
	max: usize,
}

impl Range {
	/// Creates a range, rejecting `min == 0` and `min > max`.
	pub fn new(min: usize, max: usize) -> Result<Self> {
		Self::checked("value", min, max, None)
	}

	/// Creates a range whose bounds must also stay under `limit`.
	///
	/// `name` only shows up in the error message (`"Invalid {name} range. ..."`).
	pub fn bounded(name: &'static str, min: usize, max: usize, limit: usize) -> Result<Self> {
		Self::checked(name, min, max, Some(limit))
	}

	/// Parses `"min-max"` and checks it against `limit`.
	///
	/// # Errors
	/// Any malformed text (missing dash, non-numeric side, extra parts)
	/// is reported with the expected format and `example`.
	pub fn parse(name: &'static str, text: &str, limit: usize, example: &str) -> Result<Self> {
		let (min, max) = split_pair(text).ok_or_else(|| {
			PsumError::invalid_range(name, format!("Format should be min-max (e.g., {example})"))
		})?;
		Self::bounded(name, min, max, limit)
	}

	fn checked(name: &'static str, min: usize, max: usize, limit: Option<usize>) -> Result<Self> {
		if min < 1 {
			return Err(PsumError::invalid_range(name, "Minimum must be at least 1"));
		}
		if min > max {
			return Err(PsumError::invalid_range(
				name,
				format!("Minimum ({min}) must not exceed maximum ({max})"),
			));
		}
		if let Some(limit) = limit {
			if max > limit {
				return Err(PsumError::invalid_range(
					name,
					format!("Values must be between 1 and {limit}"),
				));
			}
		}
		Ok(Self { min, max })
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}

	pub fn contains(&self, value: usize) -> bool {
		(self.min..=self.max).contains(&value)
	}
}

fn split_pair(text: &str) -> Option<(usize, usize)> {
	let (min, max) = text.trim().split_once('-')?;
	Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

impl FromStr for Range {
	type Err = PsumError;

	fn from_str(s: &str) -> Result<Self> {
		let (min, max) = split_pair(s)
			.ok_or_else(|| PsumError::invalid_range("value", "Format should be min-max"))?;
		Self::new(min, max)
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.min, self.max)
	}
}

/// Shape parameters for one generation call.
///
/// - `words_per_sentence`: word count range of every sentence
/// - `sentences_per_paragraph`: sentence count range of every paragraph
/// - `paragraph_count`: number of paragraphs to produce
/// - `single_sentence`: when set, exactly one sentence is produced and the
///   paragraph fields are ignored
///
/// Defaults mirror the HTTP facade: `5-15` words, `3-7` sentences, one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
	pub words_per_sentence: Range,
	pub sentences_per_paragraph: Range,
	pub paragraph_count: usize,
	pub single_sentence: bool,
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			words_per_sentence: Range { min: 5, max: 15 },
			sentences_per_paragraph: Range { min: 3, max: 7 },
			paragraph_count: 1,
			single_sentence: false,
		}
	}
}

impl GenerationRequest {
	/// Request for `paragraph_count` paragraphs.
	pub fn paragraphs(paragraph_count: usize, sentences_per_paragraph: Range, words_per_sentence: Range) -> Self {
		Self {
			words_per_sentence,
			sentences_per_paragraph,
			paragraph_count,
			single_sentence: false,
		}
	}

	/// Request for exactly one sentence.
	pub fn single_sentence(words_per_sentence: Range) -> Self {
		Self {
			words_per_sentence,
			single_sentence: true,
			..Self::default()
		}
	}

	/// Checks the request invariants.
	///
	/// Ranges are valid by construction; only the paragraph count is
	/// left to check (`1..=MAX_PARAGRAPHS`), and only outside
	/// single-sentence mode.
	pub fn validate(&self) -> Result<()> {
		if !self.single_sentence && !(1..=MAX_PARAGRAPHS).contains(&self.paragraph_count) {
			return Err(PsumError::InvalidParameter(format!(
				"Invalid paragraph count. Use a number between 1 and {MAX_PARAGRAPHS}"
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_rejects_zero_and_inverted() {
		assert!(Range::new(0, 3).is_err());
		assert!(Range::new(4, 3).is_err());
		let range = Range::new(3, 3).unwrap();
		assert_eq!((range.min(), range.max()), (3, 3));
	}

	#[test]
	fn bounded_checks_limit() {
		assert!(Range::bounded("words", 1, 50, MAX_WORDS_PER_SENTENCE).is_ok());
		let err = Range::bounded("words", 1, 51, MAX_WORDS_PER_SENTENCE).unwrap_err();
		assert!(err.to_string().starts_with("Invalid words range."));
	}

	#[test]
	fn parse_accepts_pairs() {
		let range = Range::parse("sentences", "3-7", MAX_SENTENCES_PER_PARAGRAPH, "3-7").unwrap();
		assert_eq!(range, Range::new(3, 7).unwrap());
		assert_eq!(range.to_string(), "3-7");
		assert!(range.contains(3) && range.contains(7) && !range.contains(8));
	}

	#[test]
	fn parse_rejects_garbage() {
		for text in ["", "5", "a-b", "5-", "-5", "1-2-3", "7-3", "0-2", "40-31"] {
			let err = Range::parse("sentences", text, MAX_SENTENCES_PER_PARAGRAPH, "3-7");
			assert!(matches!(err, Err(PsumError::InvalidRange { name: "sentences", .. })), "{text}");
		}
	}

	#[test]
	fn from_str_round_trips_display() {
		let range: Range = "5-15".parse().unwrap();
		assert_eq!(range.to_string(), "5-15");
	}

	#[test]
	fn default_request_is_valid() {
		let request = GenerationRequest::default();
		assert!(request.validate().is_ok());
		assert_eq!(request.words_per_sentence.to_string(), "5-15");
		assert_eq!(request.sentences_per_paragraph.to_string(), "3-7");
		assert_eq!(request.paragraph_count, 1);
	}

	#[test]
	fn zero_paragraphs_only_fails_in_paragraph_mode() {
		let words = Range::new(2, 2).unwrap();
		let request = GenerationRequest::paragraphs(0, words, words);
		assert!(matches!(request.validate(), Err(PsumError::InvalidParameter(_))));

		let mut single = GenerationRequest::single_sentence(words);
		single.paragraph_count = 0;
		assert!(single.validate().is_ok());
	}

	#[test]
	fn paragraph_count_is_capped() {
		let words = Range::new(2, 2).unwrap();
		assert!(GenerationRequest::paragraphs(MAX_PARAGRAPHS, words, words).validate().is_ok());
		for count in [MAX_PARAGRAPHS + 1, usize::MAX] {
			let request = GenerationRequest::paragraphs(count, words, words);
			assert!(matches!(request.validate(), Err(PsumError::InvalidParameter(_))), "{count}");
		}
	}
}
