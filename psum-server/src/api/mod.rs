//! HTTP facade over the generator and the dictionary store.

pub mod dictionaries;
pub mod error;
pub mod generate;
pub mod params;
pub mod render;
pub mod state;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

pub use error::ApiError;
pub use params::OutputFormat;
pub use state::AppState;

/// Registers every route.
///
/// Dictionary routes come first: `/api/dictionaries/{lang}/{id}/words/{word}`
/// has as many segments as the path form of the generator.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
		let response = render::render_error(OutputFormat::Html, StatusCode::BAD_REQUEST, &err.to_string());
		InternalError::from_response(err, response).into()
	}))
	.app_data(web::JsonConfig::default().error_handler(|err, _req| {
		let response = HttpResponse::BadRequest().json(error::ErrorBody { error: err.to_string() });
		InternalError::from_response(err, response).into()
	}))
	.service(dictionaries::list_dictionaries)
	.service(dictionaries::create_dictionary)
	.service(dictionaries::get_dictionary)
	.service(dictionaries::delete_dictionary)
	.service(dictionaries::add_words)
	.service(dictionaries::remove_word)
	.service(dictionaries::export_config)
	.service(dictionaries::import_config)
	.service(generate::get_generate)
	.service(generate::get_generate_path);
}
