//! API routes module - organizes all route handlers.
//!
//! Employee and role endpoints live under `/api/v1`; health checks are also
//! served at the root.

pub mod app_state;
pub mod employees;
pub mod error;
pub mod health;
pub mod openapi;
pub mod roles;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use app_state::AppState;
pub use error::ApiError;

use crate::config::ApiConfig;
use crate::middleware::cors::create_cors_layer;

/// Create the API router combining all route modules.
///
/// State is applied by callers (see [`create_app`]).
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/employees", employees::employees_router())
        .nest("/roles", roles::roles_router())
        // OpenAPI documentation endpoints
        .merge(openapi::openapi_router())
}

/// Build the complete application: health check, API routes nested under
/// `/api/v1`, state and middleware layers.
pub fn create_app(app_state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", create_api_router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(allowed_origins)),
        )
}

/// Create the application state over empty in-memory repositories.
pub fn create_app_state() -> AppState {
    AppState::new()
}

/// Create the application state with storage initialization (async).
///
/// This is the preferred method for production use.
pub async fn create_app_state_with_storage(
    config: &ApiConfig,
) -> Result<AppState, crate::storage::StorageError> {
    let mut state = AppState::new();
    state.init_storage(config).await?;
    Ok(state)
}
