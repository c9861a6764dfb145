use std::convert::Infallible;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use tracing::{error, warn};

use crate::api::middleware::RequestId;
use crate::api::response::{status_to_message, ErrorCode, FieldErrors, ResponseMapper};

/// Error recorded on a response instead of a body.
///
/// The recovery layer turns it into an envelope using the response status,
/// or 500 when the status was left as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredError {
    message: String,
}

impl DeferredError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponseParts for DeferredError {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

impl IntoResponse for DeferredError {
    fn into_response(self) -> Response {
        (self, ()).into_response()
    }
}

/// Replace a response carrying a [`DeferredError`] with an error envelope
pub(crate) fn render_deferred_error(response: Response, request_id: &RequestId) -> Response {
    let Some(deferred) = response.extensions().get::<DeferredError>().cloned() else {
        return response;
    };

    let status = match response.status() {
        s if s.is_client_error() || s.is_server_error() => s,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Client errors keep the handler's message; server errors never expose it.
    let details = if status.is_client_error() {
        warn!(request_id = %request_id, status = %status.as_u16(), error = %deferred.message(), "deferred_error");
        let mut details = FieldErrors::new();
        details.insert("error".to_string(), vec![deferred.message]);
        Some(details)
    } else {
        error!(request_id = %request_id, status = %status.as_u16(), error = %deferred.message(), "deferred_error");
        None
    };

    let mut rendered = ResponseMapper::new(request_id.clone())
        .error(
            ErrorCode::for_status(status),
            status_to_message(status),
            details,
            status,
        )
        .into_response();

    for (name, value) in response.headers() {
        if *name != header::CONTENT_TYPE && *name != header::CONTENT_LENGTH {
            rendered
                .headers_mut()
                .entry(name)
                .or_insert_with(|| value.clone());
        }
    }

    rendered
}
