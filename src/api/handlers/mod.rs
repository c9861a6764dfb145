pub mod create_module;
pub mod fallback;
pub mod get_module;
pub mod health;

#[cfg(test)]
mod tests;

pub use create_module::create_module_handler;
pub use fallback::{method_not_allowed, route_not_found};
pub use get_module::get_module_handler;
pub use health::health_handler;

use axum::response::Response;
use tracing::{error, info};

use crate::api::errors::ApiError;
use crate::api::response::ResponseMapper;
use crate::application::errors::ModuleError;

pub const MODULES_PATH: &str = "/api/v1/modules";

/// Translate a use case failure into its envelope, logging server faults
pub(crate) fn handle_service_error(mapper: &ResponseMapper, err: ModuleError) -> Response {
    match &err {
        ModuleError::Storage { .. } => error!(error = %err, "module_operation_failed"),
        _ => info!(error = %err, "module_request_rejected"),
    }

    ApiError::from(err).into_envelope(mapper)
}
