//! Service catalogue handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{Service, ServiceInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create service catalogue routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route("/:id", patch(update_service).delete(delete_service))
}

/// List services, newest first
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    responses((status = 200, description = "All services", body = [Service]))
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(state.content.list_services().await?))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = ServiceInput,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 409, description = "Name or slug already in use")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_service(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ServiceInput>,
) -> AppResult<Created<Service>> {
    Ok(Created(state.content.create_service(input).await?))
}

/// Replace a service
#[utoipa::path(
    patch,
    path = "/api/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = ServiceInput,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Name or slug already in use")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_service(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<ServiceInput>,
) -> AppResult<Json<Service>> {
    Ok(Json(state.content.update_service(id, input).await?))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_service(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.content.delete_service(id).await?;
    Ok(NoContent)
}
