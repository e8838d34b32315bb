use axum::Json;
use serde_json::{json, Value};

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Throttling is left entirely to the synthesis provider.
pub async fn get_rate_limit_status() -> Json<Value> {
    Json(json!({ "status": "no rate limit logic on backend" }))
}
