//! Placeholder ("lorem ipsum") text generation library.
//!
//! This crate provides:
//! - A stateless sentence / paragraph generator with injectable randomness
//! - Language-scoped dictionaries, bundled on disk or created by users
//! - Resolution of a dictionary selection into a flat word list
//! - Export and import of user dictionary data
//!
//! The generator only ever sees an already-resolved word list; everything
//! touching storage lives in `dictionary`.

/// Sentence and paragraph generation.
pub mod generator;

/// Dictionary loading, storage and word-list resolution.
pub mod dictionary;

/// Crate-wide error type.
pub mod error;

/// I/O utilities (JSON files, directory listing).
///
/// Not exposed
pub(crate) mod io;

pub use error::{PsumError, Result};
