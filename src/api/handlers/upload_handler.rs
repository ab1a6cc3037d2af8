//! Asset upload handler.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::config::MAX_UPLOAD_BYTES;
use crate::errors::{AppError, AppResult};
use crate::infra::UploadCategory;

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Public location of a stored upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = "/src/assets/partners/acme.svg")]
    pub url: String,
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/:category", post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Upload an image or document into an asset category
#[utoipa::path(
    post,
    path = "/upload/{category}",
    tag = "Uploads",
    params(("category" = String, Path, description = "leaders, partners, services, aboutus or resources")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Unknown category or missing file"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_file(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let category: UploadCategory = category.parse()?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read file: {}", e)))?;

        let url = state.uploads.save(category, &file_name, &content).await?;
        return Ok(Json(UploadResponse { url }));
    }

    Err(AppError::bad_request("Missing file field"))
}
