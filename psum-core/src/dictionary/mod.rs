//! Dictionaries: where the words come from.
//!
//! - Supported languages (`language`)
//! - Dictionaries shipped as JSON files (`bundled`)
//! - User data storage (`repository`)
//! - Selection to word-list resolution and user dictionary management (`store`)
//! - Export / import of user data (`config`)

pub mod bundled;
pub mod config;
pub mod language;
pub mod repository;
pub mod resolver;
pub mod store;

pub use bundled::{BundledDictionaries, BundledDictionary};
pub use config::{ConfigBlob, DictionaryMeta};
pub use language::Language;
pub use repository::{Changes, DictionaryRepository, JsonFileRepository, KeyValueStore, MemoryRepository};
pub use resolver::{WordList, WordListResolver};
pub use store::{DictionaryStore, DictionarySummary, slugify};
