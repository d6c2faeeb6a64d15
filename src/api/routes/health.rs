use axum::response::Json;
use serde_json::{Value, json};

/// GET /health - Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = Object)
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "promocode-factory-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
