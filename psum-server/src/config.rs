use std::path::PathBuf;

use clap::Parser;

use psum_core::dictionary::{BundledDictionaries, DictionaryStore, JsonFileRepository};

/// Server settings, from the command line or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "psum-server", version, about = "Placeholder text generation HTTP API")]
pub struct ServerConfig {
	/// Address to bind.
	#[arg(long, env = "PSUM_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind.
	#[arg(long, env = "PSUM_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Directory holding `<lang>/<id>.json` dictionary files.
	#[arg(long, env = "PSUM_DATA_DIR", default_value = "./data")]
	pub data_dir: PathBuf,

	/// JSON file for user dictionaries. Kept in memory when absent.
	#[arg(long, env = "PSUM_STORE")]
	pub store: Option<PathBuf>,
}

impl ServerConfig {
	/// Loads the bundled dictionaries and opens the user store.
	pub fn build_store(&self) -> psum_core::Result<DictionaryStore> {
		let bundled = BundledDictionaries::load(&self.data_dir)?;
		match &self.store {
			Some(path) => Ok(DictionaryStore::new(bundled, JsonFileRepository::open(path)?)),
			None => {
				log::warn!("no --store given, user dictionaries will not survive a restart");
				Ok(DictionaryStore::in_memory(bundled))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_flags() {
		let config = ServerConfig::try_parse_from([
			"psum-server",
			"--host",
			"0.0.0.0",
			"--port",
			"8080",
			"--data-dir",
			"/srv/psum/data",
			"--store",
			"/var/lib/psum/store.json",
		])
		.unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.data_dir, PathBuf::from("/srv/psum/data"));
		assert_eq!(config.store, Some(PathBuf::from("/var/lib/psum/store.json")));
	}

	#[test]
	fn rejects_bad_port() {
		assert!(ServerConfig::try_parse_from(["psum-server", "--port", "http"]).is_err());
	}

	#[test]
	fn missing_data_dir_fails_store() {
		let config = ServerConfig::try_parse_from(["psum-server", "--data-dir", "/definitely/not/here"]).unwrap();
		assert!(config.build_store().is_err());
	}
}
