use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use tracing::debug;

/// Admin boundary middleware
///
/// Every admin route requires `Authorization: Bearer <secret>` matching
/// the configured admin secret. A mismatch is rejected here, before any
/// handler reads or mutates exchange state.
pub async fn admin_auth_middleware(
    admin_secret: Arc<String>,
    request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match extract_bearer_secret(&request) {
        Some(secret) if secret == admin_secret.as_str() => next.run(request).await,
        _ => {
            debug!("admin credential missing or invalid");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "unauthorized" })),
            )
                .into_response()
        }
    }
}

/// Pull the secret out of the Authorization header (handle both
/// "Bearer <secret>" and a raw secret)
fn extract_bearer_secret(request: &axum::http::Request<axum::body::Body>) -> Option<&str> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
