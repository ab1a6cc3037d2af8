//! Published resource: article, brochure, policy, news item.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "brochure")]
    pub kind: String,
    /// Link to a file or article
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResourceInput {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50, message = "Type must be at most 50 characters"))]
    #[schema(example = "brochure")]
    pub kind: String,
    #[validate(length(max = 255, message = "URL must be at most 255 characters"))]
    pub url: String,
}
