use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use psum_core::PsumError;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Psum(#[from] PsumError),

	/// A handler panicked while holding the store.
	#[error("Store lock failed")]
	LockFailed,
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: String,
}

impl ApiError {
	/// Status used on generation routes: caller mistakes are always `400`.
	pub fn generation_status(&self) -> StatusCode {
		match self {
			ApiError::Psum(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Psum(PsumError::UnknownDictionary(_)) => StatusCode::NOT_FOUND,
			ApiError::Psum(PsumError::DictionaryExists(_)) => StatusCode::CONFLICT,
			other => other.generation_status(),
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			log::error!("{self}");
		}
		HttpResponse::build(status).json(ErrorBody { error: self.to_string() })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_mapping() {
		let not_found = ApiError::from(PsumError::UnknownDictionary("x".into()));
		assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(not_found.generation_status(), StatusCode::BAD_REQUEST);

		let conflict = ApiError::from(PsumError::DictionaryExists("x".into()));
		assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

		assert_eq!(ApiError::from(PsumError::EmptyWordList).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(ApiError::LockFailed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

		let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
		assert_eq!(ApiError::from(PsumError::from(io)).generation_status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn transparent_message() {
		let err = ApiError::from(PsumError::InvalidLanguage("de".into()));
		assert_eq!(err.to_string(), "Invalid language. Use en, fr or es");
	}
}
