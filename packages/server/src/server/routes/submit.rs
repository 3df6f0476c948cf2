use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::common::ExchangeError;
use crate::domains::exchange::actions;
use crate::domains::exchange::models::Participant;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub email: String,
    pub group_id: u32,
    pub wish: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub participant: Participant,
}

pub async fn submit_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), ExchangeError> {
    let participant = actions::register_participant(
        &state.deps,
        &payload.name,
        &payload.email,
        payload.group_id,
        &payload.wish,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "submission received".to_string(),
            participant,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub email: String,
    pub group_id: u32,
    pub name: String,
    pub wish: String,
}

pub async fn update_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<UpdateRequest>,
) -> Result<Json<SubmitResponse>, ExchangeError> {
    let participant = actions::update_participant(
        &state.deps,
        &payload.email,
        payload.group_id,
        &payload.name,
        &payload.wish,
    )
    .await?;

    Ok(Json(SubmitResponse {
        message: "submission updated".to_string(),
        participant,
    }))
}
