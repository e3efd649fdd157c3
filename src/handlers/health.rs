use axum::response::Json;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Social Media Post API"
    }))
}
