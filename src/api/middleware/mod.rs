//! API middleware.

mod auth;

pub use auth::{extract_token, AdminSession};
