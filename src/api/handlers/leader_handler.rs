//! Leadership handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{Leader, LeaderInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create leader routes
pub fn leader_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leaders).post(create_leader))
        .route("/:id", patch(update_leader).delete(delete_leader))
}

/// List leaders
#[utoipa::path(
    get,
    path = "/api/leaders",
    tag = "Leaders",
    responses((status = 200, description = "All leaders", body = [Leader]))
)]
pub async fn list_leaders(State(state): State<AppState>) -> AppResult<Json<Vec<Leader>>> {
    Ok(Json(state.content.list_leaders().await?))
}

/// Add a leader
#[utoipa::path(
    post,
    path = "/api/leaders",
    tag = "Leaders",
    request_body = LeaderInput,
    responses(
        (status = 201, description = "Leader created", body = Leader),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_leader(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LeaderInput>,
) -> AppResult<Created<Leader>> {
    Ok(Created(state.content.create_leader(input).await?))
}

/// Replace a leader
#[utoipa::path(
    patch,
    path = "/api/leaders/{id}",
    tag = "Leaders",
    params(("id" = i32, Path, description = "Leader ID")),
    request_body = LeaderInput,
    responses(
        (status = 200, description = "Leader updated", body = Leader),
        (status = 404, description = "Leader not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_leader(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<LeaderInput>,
) -> AppResult<Json<Leader>> {
    Ok(Json(state.content.update_leader(id, input).await?))
}

/// Remove a leader
#[utoipa::path(
    delete,
    path = "/api/leaders/{id}",
    tag = "Leaders",
    params(("id" = i32, Path, description = "Leader ID")),
    responses(
        (status = 204, description = "Leader deleted"),
        (status = 404, description = "Leader not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_leader(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.content.delete_leader(id).await?;
    Ok(NoContent)
}
