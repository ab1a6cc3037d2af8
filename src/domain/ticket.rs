//! Support ticket submitted through the public contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A support ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    #[schema(example = 7)]
    pub id: i32,
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Workflow status, "open" on submission
    #[schema(example = "open")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Public ticket submission
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TicketInput {
    #[validate(length(min = 2, max = 120, message = "Name must be 2-120 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 200, message = "Email must be at most 200 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 2, max = 200, message = "Subject must be 2-200 characters"))]
    #[schema(example = "Printer offline")]
    pub subject: String,
    #[validate(length(min = 5, message = "Message must be at least 5 characters"))]
    #[schema(example = "The office printer stopped responding this morning.")]
    pub message: String,
}

/// New status for an existing ticket, passed as a query parameter
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketStatusUpdate {
    /// New status label, e.g. "in_progress" or "closed"
    #[validate(length(min = 1, max = 40, message = "Status must be 1-40 characters"))]
    pub status: String,
}
