use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    status: &'static str,
}

#[tracing::instrument(name = "Health check")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
