//! Uniform response envelope
//!
//! Every endpoint answers with an [`ApiResponse`]: `success`, `message`, then
//! either `data` or `error`, and `meta` carrying the request id and an RFC3339
//! timestamp. The constructors on [`ResponseMapper`] are the only way to build
//! one, so exactly one of `data`/`error` is ever present.

use std::collections::BTreeMap;

use axum::{http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::middleware::RequestId;

/// Per-field validation messages, keyed by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Machine-readable error codes carried in `error.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    ResourceConflict,
    NotFound,
    MethodNotAllowed,
    InternalError,
}

impl ErrorCode {
    /// Code used when only the HTTP status is known
    pub fn for_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::ValidationError,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::ResourceConflict,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            _ => Self::InternalError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub request_id: String,
    /// RFC3339 time the response was built
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    success: bool,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
    meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        self.error.as_ref()
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }
}

/// Builds envelopes stamped with one request's id
#[derive(Debug, Clone)]
pub struct ResponseMapper {
    request_id: RequestId,
}

impl ResponseMapper {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn success<T: Serialize>(
        &self,
        data: T,
        message: &str,
        status: StatusCode,
    ) -> (StatusCode, Json<ApiResponse<T>>) {
        let body = ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
            meta: self.meta(),
        };
        (status, Json(body))
    }

    pub fn error(
        &self,
        code: ErrorCode,
        message: &str,
        details: Option<FieldErrors>,
        status: StatusCode,
    ) -> (StatusCode, Json<ApiResponse<()>>) {
        let body = ApiResponse {
            success: false,
            message: message.to_string(),
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.to_string(),
                details,
            }),
            meta: self.meta(),
        };
        (status, Json(body))
    }

    fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            request_id: self.request_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Canonical human-readable message for a status code
pub fn status_to_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "Operation completed successfully",
        StatusCode::CREATED => "Resource created successfully",
        StatusCode::BAD_REQUEST => "Invalid request parameters",
        StatusCode::NOT_FOUND => "Resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::CONFLICT => "Resource already exists",
        _ => "An unexpected error occurred",
    }
}
