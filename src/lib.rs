//! Organization site CMS - Content backend with a single admin gate
//!
//! Serves the public content of an organization website (services,
//! leaders, resources, partners, about text) and accepts support tickets.
//! Every write and every administrative read sits behind a signed,
//! time-limited admin session token.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Content entities and their input payloads
//! - **services**: Credential check, session tokens, content rules
//! - **infra**: Database, repositories, upload storage
//! - **api**: HTTP handlers, admin gate, routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult, AuthError};
