//! About page handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{About, AboutInput};
use crate::errors::AppResult;

/// Create about routes
pub fn about_routes() -> Router<AppState> {
    Router::new().route("/", get(get_about).put(update_about))
}

/// Get the about text
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "About",
    responses(
        (status = 200, description = "About text", body = About),
        (status = 404, description = "Not set yet")
    )
)]
pub async fn get_about(State(state): State<AppState>) -> AppResult<Json<About>> {
    Ok(Json(state.content.get_about().await?))
}

/// Create or replace the about text
#[utoipa::path(
    put,
    path = "/api/about",
    tag = "About",
    request_body = AboutInput,
    responses((status = 200, description = "About text stored", body = About)),
    security(("bearer_auth" = []))
)]
pub async fn update_about(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AboutInput>,
) -> AppResult<Json<About>> {
    Ok(Json(state.content.update_about(input.content).await?))
}
