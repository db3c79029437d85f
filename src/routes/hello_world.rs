use axum::Json;
use serde::Serialize;

const GREETING: &str = "Hello World";

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HelloWorldResponse {
    message: &'static str,
}

#[tracing::instrument(name = "Hello world")]
pub async fn hello_world() -> Json<HelloWorldResponse> {
    tracing::info!("Endpoint hit: {GREETING}");
    Json(HelloWorldResponse { message: GREETING })
}
