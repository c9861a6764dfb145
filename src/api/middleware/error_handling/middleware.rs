use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use tracing::error;

use super::deferred::render_deferred_error;
use crate::api::middleware::RequestId;
use crate::api::response::{status_to_message, ErrorCode, ResponseMapper};

/// Recovery middleware layer
#[derive(Clone, Default)]
pub struct RecoveryLayer;

impl<S> tower::Layer<S> for RecoveryLayer
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Service = RecoveryService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RecoveryService { inner }
    }
}

/// Catches panics raised while the inner service handles a request and
/// renders deferred errors.
#[derive(Clone)]
pub struct RecoveryService<S> {
    inner: S,
}

impl<S> tower::Service<Request> for RecoveryService<S>
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let request_id = req
                .extensions()
                .get::<RequestId>()
                .cloned()
                .unwrap_or_else(|| RequestId::from_headers(req.headers()));

            let outcome = AssertUnwindSafe(async move { inner.call(req).await })
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(response)) => Ok(render_deferred_error(response, &request_id)),
                Ok(Err(err)) => Err(err),
                Err(panic) => {
                    error!(
                        request_id = %request_id,
                        panic = %panic_message(panic.as_ref()),
                        "unhandled_panic"
                    );
                    Ok(internal_error_response(&request_id))
                }
            }
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

fn internal_error_response(request_id: &RequestId) -> Response {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    ResponseMapper::new(request_id.clone())
        .error(
            ErrorCode::InternalError,
            status_to_message(status),
            None,
            status,
        )
        .into_response()
}

/// Create recovery middleware
pub fn create_recovery_middleware() -> RecoveryLayer {
    RecoveryLayer
}
