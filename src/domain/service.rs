//! Service catalogue entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A service offered by the organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Network Setup")]
    pub name: String,
    #[schema(example = "network-setup")]
    pub slug: String,
    pub description: String,
    #[schema(example = 149.0)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a service
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ServiceInput {
    #[validate(length(min = 2, max = 120, message = "Name must be 2-120 characters"))]
    #[schema(example = "Network Setup", min_length = 2, max_length = 120)]
    pub name: String,
    #[validate(length(min = 2, max = 140, message = "Slug must be 2-140 characters"))]
    #[schema(example = "network-setup", min_length = 2, max_length = 140)]
    pub slug: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    #[schema(min_length = 10)]
    pub description: String,
    #[serde(default)]
    #[schema(example = 149.0)]
    pub price: f64,
}
