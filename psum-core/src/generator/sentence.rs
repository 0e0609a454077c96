use crate::error::{PsumError, Result};
use super::random_source::RandomSource;
use super::request::Range;

/// Probability of joining two words with `", "` instead of `" "`.
pub const COMMA_PROBABILITY: f64 = 0.1;

/// Upper-cases the first character of `word`, leaving the rest untouched.
///
/// Characters whose upper-case form spans several characters (ex. `ß`)
/// expand accordingly. Characters without an upper-case form are kept.
pub fn capitalize_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Assembles one sentence from `words`.
///
/// # Behavior
/// - Draws the sentence length uniformly from `range` (closed interval).
/// - Draws every word uniformly, with replacement, from `words`.
/// - Capitalizes the first word only.
/// - Joins words with `", "` (probability `COMMA_PROBABILITY`, drawn per
///   boundary) or `" "`, and ends the sentence with `.`.
///
/// # Errors
/// `EmptyWordList` if `words` is empty. Nothing is drawn in that case.
pub fn assemble_sentence<S, R>(words: &[S], range: Range, rng: &mut R) -> Result<String>
where
	S: AsRef<str>,
	R: RandomSource + ?Sized,
{
	if words.is_empty() {
		return Err(PsumError::EmptyWordList);
	}

	let length = rng.next_int(range.min(), range.max());
	let mut sentence = String::new();

	for i in 0..length {
		let word = words[rng.next_int(0, words.len() - 1)].as_ref();
		if i == 0 {
			sentence.push_str(&capitalize_first(word));
		} else {
			sentence.push_str(word);
		}

		// No separator after the last word
		if i + 1 < length {
			if rng.next_float() < COMMA_PROBABILITY {
				sentence.push_str(", ");
			} else {
				sentence.push(' ');
			}
		}
	}

	sentence.push('.');
	Ok(sentence)
}
