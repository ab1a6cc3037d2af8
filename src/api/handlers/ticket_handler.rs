//! Support ticket handlers.
//!
//! Submission is public; reading and triage require an admin session.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AdminSession;
use crate::api::AppState;
use crate::domain::{Ticket, TicketInput, TicketStatusUpdate};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent};

/// Create ticket routes
pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(submit_ticket))
        .route(
            "/:id",
            get(get_ticket).patch(update_ticket_status).delete(delete_ticket),
        )
}

/// Submit a support ticket
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "Tickets",
    request_body = TicketInput,
    responses(
        (status = 201, description = "Ticket recorded with status \"open\"", body = Ticket),
        (status = 400, description = "Validation error")
    )
)]
pub async fn submit_ticket(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TicketInput>,
) -> AppResult<Created<Ticket>> {
    Ok(Created(state.content.submit_ticket(input).await?))
}

/// List tickets, newest first
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "Tickets",
    responses(
        (status = 200, description = "All tickets", body = [Ticket]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_tickets(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Ticket>>> {
    Ok(Json(state.content.list_tickets().await?))
}

/// Get a ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket found", body = Ticket),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_ticket(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Ticket>> {
    Ok(Json(state.content.get_ticket(id).await?))
}

/// Change a ticket's status
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "Ticket ID"), TicketStatusUpdate),
    responses(
        (status = 200, description = "Ticket updated", body = Ticket),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_ticket_status(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(update): Query<TicketStatusUpdate>,
) -> AppResult<Json<Ticket>> {
    update
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    Ok(Json(state.content.set_ticket_status(id, update.status).await?))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = "Tickets",
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_ticket(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.content.delete_ticket(id).await?;
    Ok(NoContent)
}
