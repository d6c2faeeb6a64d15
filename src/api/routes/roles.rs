//! Role routes.

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{Role, RoleResponse};
use crate::storage::Repository;

/// Create the roles router
pub fn roles_router() -> Router<AppState> {
    Router::new().route("/", get(get_roles))
}

/// GET /roles - Get all roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "All roles", body = [RoleResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_roles(
    State(roles): State<Arc<dyn Repository<Role>>>,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let roles = roles.get_all().await?;

    Ok(Json(roles.iter().map(RoleResponse::from).collect()))
}
