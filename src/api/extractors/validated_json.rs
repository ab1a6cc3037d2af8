//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body extractor that runs `validator` rules before the handler sees it.
///
/// Malformed JSON and failed rules both surface as `AppError::Validation`
/// (400), with rule messages joined in field order.
///
/// ```rust,ignore
/// async fn create_partner(
///     _admin: AdminSession,
///     ValidatedJson(input): ValidatedJson<PartnerInput>,
/// ) { /* input.name is 1-100 characters */ }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TicketInput;

    #[test]
    fn test_messages_joined_in_field_order() {
        let input = TicketInput {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            subject: "Printer offline".to_string(),
            message: "hi".to_string(),
        };
        let errors = input.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "Invalid email format, Message must be at least 5 characters, Name must be 2-120 characters"
        );
    }

    #[test]
    fn test_missing_message_falls_back_to_field_name() {
        #[derive(Validate)]
        struct Bare {
            #[validate(length(min = 3))]
            code: String,
        }

        let errors = Bare { code: "x".to_string() }.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "code is invalid");
    }
}
