use axum::http::{header, StatusCode};

/// Answers with 405 and an `Allow: GET` header.
pub async fn method_not_allowed() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}
