use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, PsumError>;

/// Errors raised by generation, word-list resolution and dictionary storage.
///
/// Everything except `Io` and `Json` is caused by caller input and is meant
/// to be surfaced verbatim (the HTTP facade maps those to `400`).
#[derive(Debug, Error)]
pub enum PsumError {
	/// The resolved word list holds no word, nothing can be sampled.
	#[error("No words found in selected dictionaries")]
	EmptyWordList,

	/// A `min-max` range is malformed, inverted or out of bounds.
	#[error("Invalid {name} range. {reason}")]
	InvalidRange { name: &'static str, reason: String },

	/// Language tag outside of `en`, `fr`, `es`.
	#[error("Invalid language. Use en, fr or es")]
	InvalidLanguage(String),

	/// No dictionary identifier was supplied.
	#[error("No dictionaries specified")]
	NoDictionarySelected,

	/// Any other malformed scalar parameter (paragraph count, flags...).
	#[error("{0}")]
	InvalidParameter(String),

	#[error("Unknown dictionary: {0}")]
	UnknownDictionary(String),

	#[error("Dictionary already exists: {0}")]
	DictionaryExists(String),

	/// A dictionary definition (name, word list) was rejected.
	#[error("Invalid dictionary: {0}")]
	InvalidDictionary(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
}

impl PsumError {
	/// Shorthand for an `InvalidRange` error.
	pub fn invalid_range(name: &'static str, reason: impl Into<String>) -> Self {
		PsumError::InvalidRange { name, reason: reason.into() }
	}

	/// Whether the error was caused by the caller rather than by storage.
	pub fn is_client_error(&self) -> bool {
		!matches!(self, PsumError::Io(_) | PsumError::Json(_))
	}
}
