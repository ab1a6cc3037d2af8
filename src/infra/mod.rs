//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, retry and migrations
//! - Content repositories
//! - Asset uploads on the local filesystem

pub mod db;
pub mod repositories;
pub mod uploads;

pub use db::{Database, Migrator};
pub use repositories::{ContentRepository, ContentStore};
pub use uploads::{UploadCategory, UploadStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockContentRepository;
