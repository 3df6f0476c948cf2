use axum::{extract::Extension, Json};

use crate::common::ExchangeError;
use crate::domains::exchange::actions::{self, PublicStatus};
use crate::server::app::AppState;

/// Public aggregate status: counts and flags only, never names, emails,
/// wishes or the assignment.
pub async fn status_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<PublicStatus>, ExchangeError> {
    let status = actions::public_status(&state.deps).await?;
    Ok(Json(status))
}
