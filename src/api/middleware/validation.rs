use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::api::errors::ApiError;
use crate::api::middleware::RequestId;
use crate::api::response::{FieldErrors, ResponseMapper};

/// Validate a payload and collect every field violation
pub fn validate_and_respond<T>(payload: &T) -> Result<(), FieldErrors>
where
    T: Validate,
{
    payload.validate().map_err(|errors| field_errors(&errors))
}

/// Flatten validator output into `{field: [messages]}`
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut details = FieldErrors::new();
    for (field, errors) in errors.field_errors() {
        let messages = details.entry(field.to_string()).or_default();
        messages.extend(errors.iter().map(|error| {
            error
                .message
                .as_ref()
                .map(|cow| cow.to_string())
                .unwrap_or_else(|| message_for_code(&error.code).to_string())
        }));
    }
    details
}

fn message_for_code(code: &str) -> &'static str {
    match code {
        "required" => "This field is required",
        "min" => "Value is too short",
        "max" | "length" => "Value exceeds maximum length",
        _ => "Validation failed",
    }
}

fn rejection_details(rejection: &JsonRejection) -> FieldErrors {
    let mut details = FieldErrors::new();
    details.insert("body".to_string(), vec![rejection.body_text()]);
    details
}

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Both decode failures and rule violations are answered with a 400
/// `VALIDATION_ERROR` envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(|| RequestId::from_headers(req.headers()));
        let mapper = ResponseMapper::new(request_id);

        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "payload_rejected");
                ApiError::validation(rejection_details(&rejection)).into_envelope(&mapper)
            })?;

        validate_and_respond(&payload).map_err(|details| {
            debug!(fields = ?details.keys().collect::<Vec<_>>(), "payload_invalid");
            ApiError::validation(details).into_envelope(&mapper)
        })?;

        Ok(Self(payload))
    }
}
