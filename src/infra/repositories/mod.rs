//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod content_repository;
pub(crate) mod entities;

pub use content_repository::{ContentRepository, ContentStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use content_repository::MockContentRepository;
