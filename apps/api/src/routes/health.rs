use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "weakness-spotter"
    }))
}

/// GET /health when no API key was resolved at startup.
pub async fn unconfigured_health_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "unconfigured",
            "version": env!("CARGO_PKG_VERSION"),
            "service": "weakness-spotter"
        })),
    )
}
