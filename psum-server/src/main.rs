use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use env_logger::Env;

use psum_server::{AppState, ServerConfig, configure};

/// Main entry point for the server.
///
/// Loads the bundled dictionaries, opens the user store and starts the
/// Actix-web HTTP server.
///
/// # Notes
/// - Binds to 127.0.0.1:5000 unless `--host` / `--port` say otherwise.
/// - `RUST_LOG` overrides the default `info` log level.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();
	let store = config.build_store().map_err(|e| {
		log::error!("failed to load dictionaries: {e}");
		std::io::Error::other(e.to_string())
	})?;
	let state = web::Data::new(AppState::new(store));

	log::info!("API running on http://{}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(state.clone())
			.configure(configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
