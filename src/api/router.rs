use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    create_module_handler, get_module_handler, health_handler, method_not_allowed,
    route_not_found, MODULES_PATH,
};
use crate::api::middleware::{create_recovery_middleware, request_id_middleware};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{CreateModuleUseCase, GetModuleUseCase};

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub create_module_use_case: Arc<CreateModuleUseCase>,
    pub get_module_use_case: Arc<GetModuleUseCase>,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let create_state = Arc::clone(&state.create_module_use_case);
    let get_state = Arc::clone(&state.get_module_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            MODULES_PATH,
            post(create_module_handler).with_state(create_state),
        )
        .route(
            "/api/v1/modules/{id}",
            get(get_module_handler).with_state(get_state),
        )
        .merge(swagger_ui())
        // Applies to every route registered above
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        // Recovery runs inside the request id layer so panics are tagged with the id
        .layer(create_recovery_middleware())
        .layer(axum_middleware::from_fn(request_id_middleware))
}
