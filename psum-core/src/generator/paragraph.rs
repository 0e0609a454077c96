use crate::error::{PsumError, Result};
use super::random_source::{RandomSource, ThreadRandom};
use super::request::GenerationRequest;
use super::sentence::assemble_sentence;

/// Generated text: one string per paragraph, or a single sentence.
pub type GenerationResult = Vec<String>;

/// Generates placeholder text from `words` according to `request`.
///
/// # Behavior
/// - Single-sentence mode: returns one sentence built with
///   `words_per_sentence`, paragraph fields are ignored.
/// - Otherwise, for each of the `paragraph_count` paragraphs, draws a
///   sentence count from `sentences_per_paragraph`, assembles that many
///   sentences and joins them with a single space.
///
/// # Errors
/// - `EmptyWordList` if `words` is empty
/// - `InvalidParameter` if the request does not validate
///
/// No partial output is ever returned.
pub fn generate<S, R>(words: &[S], request: &GenerationRequest, rng: &mut R) -> Result<GenerationResult>
where
	S: AsRef<str>,
	R: RandomSource + ?Sized,
{
	request.validate()?;
	if words.is_empty() {
		return Err(PsumError::EmptyWordList);
	}

	if request.single_sentence {
		return Ok(vec![assemble_sentence(words, request.words_per_sentence, rng)?]);
	}

	let mut paragraphs = Vec::with_capacity(request.paragraph_count);
	for _ in 0..request.paragraph_count {
		let range = request.sentences_per_paragraph;
		let count = rng.next_int(range.min(), range.max());
		let sentences = (0..count)
			.map(|_| assemble_sentence(words, request.words_per_sentence, &mut *rng))
			.collect::<Result<Vec<_>>>()?;
		paragraphs.push(sentences.join(" "));
	}

	Ok(paragraphs)
}

/// `generate` with the unseeded thread generator.
pub fn generate_lorem<S: AsRef<str>>(words: &[S], request: &GenerationRequest) -> Result<GenerationResult> {
	generate(words, request, &mut ThreadRandom)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::generator::random_source::RngSource;
	use crate::generator::random_source::scripted::ScriptedRandom;
	use crate::generator::request::Range;
	use crate::generator::sentence::tests::tokens;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	/// Splits a paragraph into sentences, keeping the final dot.
	fn sentences(paragraph: &str) -> Vec<String> {
		paragraph
			.split(". ")
			.map(|s| if s.ends_with('.') { s.to_owned() } else { format!("{s}.") })
			.collect()
	}

	fn range(min: usize, max: usize) -> Range {
		Range::new(min, max).unwrap()
	}

	#[test]
	fn two_paragraphs_of_one_short_sentence() {
		let words = ["a", "b"];
		let request = GenerationRequest::paragraphs(2, range(1, 1), range(2, 2));
		let result = generate_lorem(&words, &request).unwrap();
		assert_eq!(result.len(), 2);
		for paragraph in &result {
			assert!(paragraph.ends_with('.'));
			let tokens = tokens(paragraph);
			assert_eq!(tokens.len(), 2);
			for token in tokens {
				assert!(["a", "b", "A", "B"].contains(&token), "{paragraph}");
			}
		}
	}

	#[test]
	fn single_sentence_mode_ignores_paragraph_shape() {
		let words = ["x"];
		let mut request = GenerationRequest::single_sentence(range(5, 5));
		for (count, sentences) in [(1, range(1, 1)), (40, range(10, 30))] {
			request.paragraph_count = count;
			request.sentences_per_paragraph = sentences;
			let result = generate_lorem(&words, &request).unwrap();
			assert_eq!(result.len(), 1);
			let tokens = tokens(&result[0]);
			assert_eq!(tokens, vec!["X", "x", "x", "x", "x"]);
		}
	}

	#[test]
	fn empty_words_fail_whole_call() {
		let words: [&str; 0] = [];
		let request = GenerationRequest::default();
		assert!(matches!(generate_lorem(&words, &request), Err(PsumError::EmptyWordList)));
		let single = GenerationRequest::single_sentence(range(1, 2));
		assert!(matches!(generate_lorem(&words, &single), Err(PsumError::EmptyWordList)));
	}

	#[test]
	fn invalid_request_is_rejected_first() {
		let words = ["a"];
		let request = GenerationRequest::paragraphs(0, range(1, 1), range(1, 1));
		assert!(matches!(generate_lorem(&words, &request), Err(PsumError::InvalidParameter(_))));

		// Rejected before anything is allocated
		let huge = GenerationRequest::paragraphs(usize::MAX, range(1, 1), range(1, 1));
		assert!(matches!(generate_lorem(&words, &huge), Err(PsumError::InvalidParameter(_))));
	}

	#[test]
	fn paragraph_count_and_sentence_bounds_hold() {
		let words = ["lorem", "ipsum", "dolor", "sit", "amet"];
		let request = GenerationRequest::paragraphs(7, range(2, 4), range(3, 8));
		let mut rng = RngSource::new(StdRng::seed_from_u64(2024));
		for _ in 0..50 {
			let result = generate(&words, &request, &mut rng).unwrap();
			assert_eq!(result.len(), 7);
			for paragraph in &result {
				assert!(!paragraph.starts_with(' ') && !paragraph.ends_with(' '));
				let sentences = sentences(paragraph);
				assert!((2..=4).contains(&sentences.len()), "{paragraph}");
				for sentence in &sentences {
					let first = sentence.chars().next().unwrap();
					assert!(first.is_uppercase());
					assert!((3..=8).contains(&tokens(sentence).len()));
				}
			}
		}
	}

	#[test]
	fn scripted_paragraphs_are_exact() {
		let words = ["alpha", "beta"];
		let request = GenerationRequest::paragraphs(2, range(1, 3), range(1, 3));
		// p1: 2 sentences ["Alpha." , "Beta alpha."], p2: 1 sentence ["Beta."]
		let ints = [2, 1, 0, 2, 1, 0, 1, 1, 1];
		let mut rng = ScriptedRandom::new(&ints, &[0.9]);
		let result = generate(&words, &request, &mut rng).unwrap();
		assert_eq!(result, vec!["Alpha. Beta alpha.".to_owned(), "Beta.".to_owned()]);
	}

	#[test]
	fn uniform_word_selection() {
		let words = ["a", "b", "c", "d"];
		let request = GenerationRequest::paragraphs(20, range(5, 5), range(10, 10));
		let mut rng = RngSource::new(StdRng::seed_from_u64(5));
		let mut counts = std::collections::HashMap::new();
		for paragraph in generate(&words, &request, &mut rng).unwrap() {
			for token in tokens(&paragraph.replace(". ", " ")) {
				*counts.entry(token.to_lowercase()).or_insert(0usize) += 1;
			}
		}
		assert_eq!(counts.values().sum::<usize>(), 1000);
		for word in words {
			let n = counts[word];
			assert!((180..=320).contains(&n), "{word}: {n}");
		}
	}
}
