use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response::{status_to_message, ErrorCode, FieldErrors, ResponseMapper};
use crate::application::errors::ModuleError;

/// API error: status, code and optional field details, rendered through the
/// envelope once the request id is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    details: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, details: Option<FieldErrors>) -> Self {
        Self {
            status,
            code,
            details,
        }
    }

    pub fn validation(details: FieldErrors) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError,
            Some(details),
        )
    }

    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut details = FieldErrors::new();
        details.insert(field.to_string(), vec![message.into()]);
        Self::validation(details)
    }

    pub fn conflict() -> Self {
        Self::new(StatusCode::CONFLICT, ErrorCode::ResourceConflict, None)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, None)
    }

    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            None,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn details(&self) -> Option<&FieldErrors> {
        self.details.as_ref()
    }

    pub fn into_envelope(self, mapper: &ResponseMapper) -> Response {
        mapper
            .error(
                self.code,
                status_to_message(self.status),
                self.details,
                self.status,
            )
            .into_response()
    }
}

// Convert use case errors to API errors

impl From<ModuleError> for ApiError {
    fn from(err: ModuleError) -> Self {
        match err {
            ModuleError::NameRequired | ModuleError::NameLength => {
                ApiError::field("name", err.to_string())
            }
            ModuleError::DescriptionLength => ApiError::field("description", err.to_string()),
            ModuleError::InvalidId(e) => ApiError::field("id", e.to_string()),
            ModuleError::NameExists => ApiError::conflict(),
            ModuleError::NotFound => ApiError::not_found(),
            ModuleError::Storage { .. } => ApiError::internal_error(),
        }
    }
}
