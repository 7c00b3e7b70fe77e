use axum::Json;
use shared::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
