//! Application services layer - Use cases and business logic.
//!
//! Services depend on the repository trait rather than a concrete store,
//! so handlers and tests can swap implementations.

mod auth_service;
mod content_service;
mod token_service;

pub use auth_service::{AuthService, Authenticator};
pub use content_service::{ContentManager, ContentService};
pub use token_service::{Claims, TokenService};
