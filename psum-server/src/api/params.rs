use std::str::FromStr;

use serde::Deserialize;

use psum_core::dictionary::Language;
use psum_core::generator::request::{MAX_PARAGRAPHS, MAX_SENTENCES_PER_PARAGRAPH, MAX_WORDS_PER_SENTENCE};
use psum_core::generator::{GenerationRequest, Range};
use psum_core::{PsumError, Result};

/// Body format of the generation routes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	/// Paragraphs wrapped in `<p>...</p>`, newline-joined.
	#[default]
	Html,
	/// Plain paragraphs separated by a blank line.
	Text,
}

impl FromStr for OutputFormat {
	type Err = PsumError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"html" => Ok(OutputFormat::Html),
			"text" => Ok(OutputFormat::Text),
			_ => Err(PsumError::InvalidParameter("Invalid format. Use html or text".to_owned())),
		}
	}
}

/// Raw query parameters of `/api/generate`.
///
/// Everything is kept as text so that every validation failure produces
/// our own message instead of a deserializer error.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateParams {
	pub lang: Option<String>,
	/// Hyphen-separated dictionary ids (`latin-jeu`).
	pub dictionaries: Option<String>,
	pub paragraph_count: Option<String>,
	pub words_range: Option<String>,
	pub sentences_range: Option<String>,
	pub single_sentence: Option<String>,
	pub format: Option<String>,
}

/// Extra query parameters accepted by the path form.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputQuery {
	pub single_sentence: Option<String>,
	pub format: Option<String>,
}

/// Validated generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCommand {
	pub lang: Language,
	pub dictionaries: Vec<String>,
	pub request: GenerationRequest,
}

/// Present and non-blank.
fn given(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GenerateParams {
	/// Builds the parameters of the path form.
	pub fn from_segments(segments: (String, String, String, String, String), query: OutputQuery) -> Self {
		let (lang, dictionaries, paragraph_count, words_range, sentences_range) = segments;
		Self {
			lang: Some(lang),
			dictionaries: Some(dictionaries),
			paragraph_count: Some(paragraph_count),
			words_range: Some(words_range),
			sentences_range: Some(sentences_range),
			single_sentence: query.single_sentence,
			format: query.format,
		}
	}

	/// Requested output format, HTML when absent.
	pub fn output_format(&self) -> Result<OutputFormat> {
		match given(&self.format) {
			Some(format) => format.parse(),
			None => Ok(OutputFormat::default()),
		}
	}

	/// Validates every parameter, in the order language, dictionaries,
	/// paragraph count, words range, sentences range, single-sentence flag.
	///
	/// # Defaults
	/// - `paragraphCount`: 1
	/// - `wordsRange`: `5-15`
	/// - `sentencesRange`: `3-7`
	/// - `singleSentence`: false
	pub fn command(&self) -> Result<GenerateCommand> {
		let lang: Language = self.lang.as_deref().unwrap_or_default().parse()?;

		let dictionaries: Vec<String> = given(&self.dictionaries)
			.map(|list| {
				list.split('-')
					.map(str::trim)
					.filter(|id| !id.is_empty())
					.map(str::to_owned)
					.collect()
			})
			.unwrap_or_default();
		if dictionaries.is_empty() {
			return Err(PsumError::NoDictionarySelected);
		}

		let defaults = GenerationRequest::default();
		let paragraph_count = match given(&self.paragraph_count) {
			Some(text) => parse_paragraph_count(text)?,
			None => defaults.paragraph_count,
		};
		let words_per_sentence = match given(&self.words_range) {
			Some(text) => Range::parse("words", text, MAX_WORDS_PER_SENTENCE, "5-15")?,
			None => defaults.words_per_sentence,
		};
		let sentences_per_paragraph = match given(&self.sentences_range) {
			Some(text) => Range::parse("sentences", text, MAX_SENTENCES_PER_PARAGRAPH, "3-7")?,
			None => defaults.sentences_per_paragraph,
		};
		let single_sentence = match given(&self.single_sentence) {
			Some(text) => parse_flag(text)?,
			None => false,
		};

		Ok(GenerateCommand {
			lang,
			dictionaries,
			request: GenerationRequest {
				words_per_sentence,
				sentences_per_paragraph,
				paragraph_count,
				single_sentence,
			},
		})
	}
}

fn parse_paragraph_count(text: &str) -> Result<usize> {
	text.parse::<usize>()
		.ok()
		.filter(|count| (1..=MAX_PARAGRAPHS).contains(count))
		.ok_or_else(|| {
			PsumError::InvalidParameter(format!(
				"Invalid paragraph count. Use a number between 1 and {MAX_PARAGRAPHS}"
			))
		})
}

fn parse_flag(text: &str) -> Result<bool> {
	match text {
		"true" | "1" => Ok(true),
		"false" | "0" => Ok(false),
		_ => Err(PsumError::InvalidParameter(
			"Invalid singleSentence flag. Use true or false".to_owned(),
		)),
	}
}
