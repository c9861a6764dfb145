use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::HealthResponse;
use crate::api::response::{ErrorBody, ErrorCode, ResponseMeta};
use crate::application::dto::{ModuleRequest, ModuleResponse};

/// OpenAPI document for the Module API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Module API",
        version = "1.0.0",
        description = "Create and fetch module records through a uniform response envelope"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::create_module::create_module_handler,
        crate::api::handlers::get_module::get_module_handler,
    ),
    components(
        schemas(
            ModuleRequest,
            ModuleResponse,
            ErrorBody,
            ErrorCode,
            ResponseMeta,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "modules", description = "Module operations")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
