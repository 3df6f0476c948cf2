use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::domains::exchange::actions::EXCHANGE_KEY;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    storage: StorageHealth,
}

#[derive(Serialize)]
pub struct StorageHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks storage reachability with a bounded read of the exchange key.
/// Returns 200 OK when healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.deps.store.get(EXCHANGE_KEY),
    )
    .await
    {
        Ok(Ok(_)) => StorageHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => StorageHealth {
            status: "error".to_string(),
            error: Some(format!("Read failed: {}", e)),
        },
        Err(_) => StorageHealth {
            status: "error".to_string(),
            error: Some("Read timeout (>5s)".to_string()),
        },
    };

    let is_healthy = storage.status == "ok";

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            storage,
        }),
    )
}
