//! Published resource handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{Resource, ResourceInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources).post(create_resource))
        .route("/:id", patch(update_resource).delete(delete_resource))
}

#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "Resources",
    responses((status = 200, description = "All resources", body = [Resource]))
)]
pub async fn list_resources(State(state): State<AppState>) -> AppResult<Json<Vec<Resource>>> {
    Ok(Json(state.content.list_resources().await?))
}

#[utoipa::path(
    post,
    path = "/api/resources",
    tag = "Resources",
    request_body = ResourceInput,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_resource(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ResourceInput>,
) -> AppResult<Created<Resource>> {
    Ok(Created(state.content.create_resource(input).await?))
}

#[utoipa::path(
    patch,
    path = "/api/resources/{id}",
    tag = "Resources",
    params(("id" = i32, Path, description = "Resource ID")),
    request_body = ResourceInput,
    responses(
        (status = 200, description = "Resource updated", body = Resource),
        (status = 404, description = "Resource not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_resource(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<ResourceInput>,
) -> AppResult<Json<Resource>> {
    Ok(Json(state.content.update_resource(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/resources/{id}",
    tag = "Resources",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 404, description = "Resource not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_resource(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.content.delete_resource(id).await?;
    Ok(NoContent)
}
