use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PsumError;

/// Languages dictionaries are scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	En,
	Fr,
	Es,
}

impl Language {
	/// Every supported language, in tag order of the data directory.
	pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Es];

	/// Two-letter tag (`en`, `fr`, `es`).
	pub fn as_str(&self) -> &'static str {
		match self {
			Language::En => "en",
			Language::Fr => "fr",
			Language::Es => "es",
		}
	}
}

impl FromStr for Language {
	type Err = PsumError;

	/// Tags are matched exactly, `EN` is rejected.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Language::En),
			"fr" => Ok(Language::Fr),
			"es" => Ok(Language::Es),
			other => Err(PsumError::InvalidLanguage(other.to_owned())),
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
