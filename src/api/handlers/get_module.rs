use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::handle_service_error;
use crate::api::errors::ApiError;
use crate::api::middleware::RequestId;
use crate::api::response::{status_to_message, ApiResponse, ResponseMapper};
use crate::application::dto::ModuleResponse;
use crate::application::use_cases::GetModuleUseCase;

/// GET /api/v1/modules/{id}
/// Fetch a module by ID
#[utoipa::path(
    get,
    path = "/api/v1/modules/{id}",
    tag = "modules",
    params(
        ("id" = i64, Path, description = "Module ID (positive integer)"),
        ("X-Request-Id" = Option<String>, Header, description = "Caller-supplied request identifier, echoed back")
    ),
    responses(
        (status = 200, description = "Module found", body = ApiResponse<ModuleResponse>),
        (status = 400, description = "Malformed module ID", body = ApiResponse<ModuleResponse>),
        (status = 404, description = "Module not found", body = ApiResponse<ModuleResponse>),
        (status = 500, description = "Internal server error", body = ApiResponse<ModuleResponse>)
    )
)]
pub async fn get_module_handler(
    State(use_case): State<Arc<GetModuleUseCase>>,
    request_id: RequestId,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let mapper = ResponseMapper::new(request_id);

    // Undecodable segments never reach the use case
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "path_rejected");
            return ApiError::field("id", "Invalid module ID").into_envelope(&mapper);
        }
    };

    match use_case.execute(&id).await {
        Ok(module) => mapper
            .success(module, status_to_message(StatusCode::OK), StatusCode::OK)
            .into_response(),
        Err(err) => handle_service_error(&mapper, err),
    }
}
