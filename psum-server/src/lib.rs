//! HTTP server for the psum placeholder text generator.
//!
//! The routes live in `api`, command-line and environment configuration
//! in `config`. The binary (`main.rs`) only wires both together.

pub mod api;
pub mod config;

pub use api::{AppState, configure};
pub use config::ServerConfig;
