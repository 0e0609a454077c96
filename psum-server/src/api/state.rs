use std::sync::{Mutex, MutexGuard};

use psum_core::dictionary::DictionaryStore;

use super::error::ApiError;

/// Shared state of every worker.
///
/// Generation only holds the lock while resolving the word list; the
/// text itself is built after the guard is dropped.
pub struct AppState {
	store: Mutex<DictionaryStore>,
}

impl AppState {
	pub fn new(store: DictionaryStore) -> Self {
		Self { store: Mutex::new(store) }
	}

	/// Locks the dictionary store.
	///
	/// # Errors
	/// `LockFailed` if a previous holder panicked.
	pub fn store(&self) -> Result<MutexGuard<'_, DictionaryStore>, ApiError> {
		self.store.lock().map_err(|_| ApiError::LockFailed)
	}
}
