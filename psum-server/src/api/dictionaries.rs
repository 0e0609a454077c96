use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use psum_core::dictionary::{ConfigBlob, Language};

use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDictionary {
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	/// One word per line.
	pub words: String,
}

#[derive(Debug, Deserialize)]
pub struct AddWords {
	pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryWords {
	pub id: String,
	pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Added {
	pub added: usize,
}

#[derive(Debug, Serialize)]
pub struct Removed {
	pub removed: bool,
}

#[get("/api/dictionaries/{lang}")]
pub async fn list_dictionaries(state: web::Data<AppState>, lang: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let lang: Language = lang.parse()?;
	let list = state.store()?.list(lang)?;
	Ok(HttpResponse::Ok().json(list))
}

#[get("/api/dictionaries/{lang}/{id}")]
pub async fn get_dictionary(
	state: web::Data<AppState>,
	path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
	let (lang, id) = path.into_inner();
	let words = state.store()?.words(lang.parse()?, &id)?;
	Ok(HttpResponse::Ok().json(DictionaryWords { id, words }))
}

#[post("/api/dictionaries/{lang}")]
pub async fn create_dictionary(
	state: web::Data<AppState>,
	lang: web::Path<String>,
	body: web::Json<CreateDictionary>,
) -> Result<HttpResponse, ApiError> {
	let lang: Language = lang.parse()?;
	let summary = state.store()?.create_dictionary(lang, &body.name, body.description.as_deref(), &body.words)?;
	Ok(HttpResponse::Created().json(summary))
}

#[put("/api/dictionaries/{lang}/{id}/words")]
pub async fn add_words(
	state: web::Data<AppState>,
	path: web::Path<(String, String)>,
	body: web::Json<AddWords>,
) -> Result<HttpResponse, ApiError> {
	let (lang, id) = path.into_inner();
	let added = state.store()?.add_words(lang.parse()?, &id, &body.words)?;
	Ok(HttpResponse::Ok().json(Added { added }))
}

#[delete("/api/dictionaries/{lang}/{id}/words/{word}")]
pub async fn remove_word(
	state: web::Data<AppState>,
	path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, ApiError> {
	let (lang, id, word) = path.into_inner();
	let removed = state.store()?.remove_word(lang.parse()?, &id, &word)?;
	Ok(HttpResponse::Ok().json(Removed { removed }))
}

#[delete("/api/dictionaries/{lang}/{id}")]
pub async fn delete_dictionary(
	state: web::Data<AppState>,
	path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
	let (lang, id) = path.into_inner();
	state.store()?.delete_dictionary(lang.parse()?, &id)?;
	Ok(HttpResponse::NoContent().finish())
}

/// Exports the user configuration of a language.
#[get("/api/config/{lang}")]
pub async fn export_config(state: web::Data<AppState>, lang: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let blob = state.store()?.export_config(lang.parse()?)?;
	Ok(HttpResponse::Ok().json(blob))
}

/// Imports a previously exported configuration.
#[put("/api/config/{lang}")]
pub async fn import_config(
	state: web::Data<AppState>,
	lang: web::Path<String>,
	body: web::Json<ConfigBlob>,
) -> Result<HttpResponse, ApiError> {
	state.store()?.import_config(lang.parse()?, &body)?;
	Ok(HttpResponse::NoContent().finish())
}
