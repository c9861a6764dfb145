use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{handle_service_error, MODULES_PATH};
use crate::api::middleware::{RequestId, ValidatedJson};
use crate::api::response::{status_to_message, ApiResponse, ResponseMapper};
use crate::application::dto::{ModuleRequest, ModuleResponse};
use crate::application::use_cases::CreateModuleUseCase;

/// POST /api/v1/modules
/// Create a module
#[utoipa::path(
    post,
    path = "/api/v1/modules",
    tag = "modules",
    request_body = ModuleRequest,
    params(
        ("X-Request-Id" = Option<String>, Header, description = "Caller-supplied request identifier, echoed back")
    ),
    responses(
        (status = 201, description = "Module created", body = ApiResponse<ModuleResponse>,
            headers(("Location" = String, description = "Path of the created module"))),
        (status = 400, description = "Invalid request parameters", body = ApiResponse<ModuleResponse>),
        (status = 409, description = "Module name already exists", body = ApiResponse<ModuleResponse>),
        (status = 500, description = "Internal server error", body = ApiResponse<ModuleResponse>)
    )
)]
pub async fn create_module_handler(
    State(use_case): State<Arc<CreateModuleUseCase>>,
    request_id: RequestId,
    ValidatedJson(request): ValidatedJson<ModuleRequest>,
) -> Response {
    let mapper = ResponseMapper::new(request_id);

    match use_case.execute(request).await {
        Ok(module) => {
            let location = format!("{}/{}", MODULES_PATH, module.id);
            (
                [(header::LOCATION, location)],
                mapper.success(
                    module,
                    status_to_message(StatusCode::CREATED),
                    StatusCode::CREATED,
                ),
            )
                .into_response()
        }
        Err(err) => handle_service_error(&mapper, err),
    }
}
