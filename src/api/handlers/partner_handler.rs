//! Partner handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{Partner, PartnerInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create partner routes
pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route("/:id", patch(update_partner).delete(delete_partner))
}

/// List partners
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = "Partners",
    responses((status = 200, description = "All partners", body = [Partner]))
)]
pub async fn list_partners(State(state): State<AppState>) -> AppResult<Json<Vec<Partner>>> {
    Ok(Json(state.content.list_partners().await?))
}

/// Add a partner
#[utoipa::path(
    post,
    path = "/api/partners",
    tag = "Partners",
    request_body = PartnerInput,
    responses(
        (status = 201, description = "Partner created", body = Partner),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_partner(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PartnerInput>,
) -> AppResult<Created<Partner>> {
    Ok(Created(state.content.create_partner(input).await?))
}

/// Replace a partner
#[utoipa::path(
    patch,
    path = "/api/partners/{id}",
    tag = "Partners",
    params(("id" = i32, Path, description = "Partner ID")),
    request_body = PartnerInput,
    responses(
        (status = 200, description = "Partner updated", body = Partner),
        (status = 404, description = "Partner not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_partner(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<PartnerInput>,
) -> AppResult<Json<Partner>> {
    Ok(Json(state.content.update_partner(id, input).await?))
}

/// Remove a partner
#[utoipa::path(
    delete,
    path = "/api/partners/{id}",
    tag = "Partners",
    params(("id" = i32, Path, description = "Partner ID")),
    responses(
        (status = 204, description = "Partner deleted"),
        (status = 404, description = "Partner not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_partner(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.content.delete_partner(id).await?;
    Ok(NoContent)
}
