//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{ContentStore, Database, UploadStore};
use crate::services::{AuthService, Authenticator, ContentManager, ContentService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Admin credential check and session gate
    pub auth_service: Arc<dyn AuthService>,
    /// Managed site content
    pub content: Arc<dyn ContentService>,
    /// Asset uploads
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    /// Wire the production services from a connected database and config.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        let repo = Arc::new(ContentStore::new(database.get_connection()));

        Self {
            auth_service: Arc::new(Authenticator::new(config)),
            content: Arc::new(ContentManager::new(repo)),
            uploads: Arc::new(UploadStore::new(config.upload_dir.clone())),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        content: Arc<dyn ContentService>,
        uploads: Arc<UploadStore>,
    ) -> Self {
        Self {
            auth_service,
            content,
            uploads,
        }
    }
}
