//! Admin route handlers. All of these sit behind the admin auth
//! middleware; by the time a handler runs the credential has been checked.

use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::ExchangeError;
use crate::domains::exchange::actions::{self, AdminStatus, NotifyOutcome};
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Full roster view, identifying fields included
pub async fn admin_status_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AdminStatus>, ExchangeError> {
    let status = actions::admin_status(&state.deps).await?;
    Ok(Json(status))
}

pub async fn draw_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<MessageResponse>, ExchangeError> {
    let roster_size = actions::finalize_draw(&state.deps).await?;

    Ok(Json(MessageResponse {
        message: format!("draw complete for {} participants", roster_size),
    }))
}

#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub gift_amount: String,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub message: String,
    pub sent: usize,
    pub failed: usize,
}

pub async fn notify_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, ExchangeError> {
    let NotifyOutcome { sent, failed } =
        actions::send_notifications(&state.deps, &payload.gift_amount).await?;

    Ok(Json(NotifyResponse {
        message: format!("notifications dispatched: {} sent, {} failed", sent, failed),
        sent,
        failed,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParticipantRequest {
    pub user_id: u32,
}

pub async fn delete_participant_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DeleteParticipantRequest>,
) -> Result<Json<MessageResponse>, ExchangeError> {
    actions::delete_participant(&state.deps, payload.user_id).await?;

    Ok(Json(MessageResponse {
        message: format!("participant {} removed", payload.user_id),
    }))
}

pub async fn reset_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<MessageResponse>, ExchangeError> {
    actions::reset_exchange(&state.deps).await?;

    Ok(Json(MessageResponse {
        message: "exchange reset".to_string(),
    }))
}
