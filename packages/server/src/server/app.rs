//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::admin_auth_middleware;
use crate::server::routes::{
    admin_status_handler, delete_participant_handler, draw_handler, health_handler,
    notify_handler, reset_handler, status_handler, submit_handler, update_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Public routes take submissions and serve the aggregate status; every
/// state-mutating admin route and the identifying status view sit behind
/// the admin-secret middleware.
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    // Clone the secret for the middleware closure
    let admin_secret = Arc::new(deps.settings.admin_secret.clone());

    let admin_routes = Router::new()
        .route("/api/admin/status", get(admin_status_handler))
        .route("/api/admin/draw", post(draw_handler))
        .route("/api/admin/notify", post(notify_handler))
        .route(
            "/api/admin/participants/delete",
            post(delete_participant_handler),
        )
        .route("/api/admin/reset", post(reset_handler))
        .layer(middleware::from_fn(move |request, next| {
            admin_auth_middleware(admin_secret.clone(), request, next)
        }));

    // CORS configuration - the submission form is served separately
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let app_state = AppState { deps };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/status", get(status_handler))
        .route("/api/submit", post(submit_handler))
        .route("/api/update", post(update_handler))
        .merge(admin_routes)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
