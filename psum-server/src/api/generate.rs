use actix_web::{HttpResponse, get, web};

use psum_core::dictionary::WordListResolver;
use psum_core::generator::{GenerationResult, generate_lorem};

use super::error::ApiError;
use super::params::{GenerateParams, OutputFormat, OutputQuery};
use super::render::{render_error, render_paragraphs};
use super::state::AppState;

/// Resolves the selected dictionaries and generates the text.
pub fn generate_text(state: &AppState, params: &GenerateParams) -> Result<GenerationResult, ApiError> {
	let command = params.command()?;
	let words = state.store()?.resolve(command.lang, &command.dictionaries)?;
	Ok(generate_lorem(&words, &command.request)?)
}

fn respond(state: &AppState, params: &GenerateParams) -> HttpResponse {
	let format = match params.output_format() {
		Ok(format) => format,
		Err(e) => {
			let e = ApiError::from(e);
			return render_error(OutputFormat::Html, e.generation_status(), &e.to_string());
		}
	};

	match generate_text(state, params) {
		Ok(paragraphs) => render_paragraphs(format, &paragraphs),
		Err(e) => {
			log::debug!("generation rejected: {e}");
			render_error(format, e.generation_status(), &e.to_string())
		}
	}
}

/// HTTP GET endpoint `/api/generate`
///
/// Query: `lang`, `dictionaries` (`id1-id2`), `paragraphCount`, `wordsRange`,
/// `sentencesRange`, `singleSentence`, `format` (`html` or `text`).
#[get("/api/generate")]
pub async fn get_generate(state: web::Data<AppState>, query: web::Query<GenerateParams>) -> HttpResponse {
	respond(&state, &query)
}

/// HTTP GET endpoint `/api/{lang}/{dictionaries}/{paragraphCount}/{wordsRange}/{sentencesRange}`
///
/// Every segment is required; `singleSentence` and `format` stay query parameters.
#[get("/api/{lang}/{dictionaries}/{paragraph_count}/{words_range}/{sentences_range}")]
pub async fn get_generate_path(
	state: web::Data<AppState>,
	path: web::Path<(String, String, String, String, String)>,
	query: web::Query<OutputQuery>,
) -> HttpResponse {
	let params = GenerateParams::from_segments(path.into_inner(), query.into_inner());
	respond(&state, &params)
}
