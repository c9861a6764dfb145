use axum::http::{Method, StatusCode, Uri};

use crate::api::middleware::DeferredError;

/// Answer unknown paths through the deferred error path so they share the envelope
pub async fn route_not_found(uri: Uri) -> (StatusCode, DeferredError) {
    (
        StatusCode::NOT_FOUND,
        DeferredError::new(format!("no route for {}", uri.path())),
    )
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, DeferredError) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        DeferredError::new(format!("method {} not allowed for {}", method, uri.path())),
    )
}
