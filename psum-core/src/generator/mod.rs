//! Placeholder text generation.
//!
//! This module turns a flat word list into lorem-ipsum style text:
//! - Sentence assembly (`sentence`)
//! - Paragraph and single-sentence output (`paragraph`)
//! - Generation shape parameters (`request`)
//! - Injectable randomness (`random_source`)
//!
//! Everything here is stateless: every call only reads its word list and
//! writes to a local buffer, so it can be used from any number of threads.

/// Sentence assembly from a word list and a word-count range.
pub mod sentence;

/// Paragraph assembly and the top-level `generate` entry point.
pub mod paragraph;

/// `Range` and `GenerationRequest` value objects and their bounds.
pub mod request;

/// Random source abstraction used by the assemblers.
///
/// Production code uses the unseeded thread generator, tests can
/// plug any seeded `rand` generator.
pub mod random_source;

pub use paragraph::{GenerationResult, generate, generate_lorem};
pub use random_source::{RandomSource, RngSource, ThreadRandom};
pub use request::{GenerationRequest, Range};
pub use sentence::{COMMA_PROBABILITY, assemble_sentence, capitalize_first};
