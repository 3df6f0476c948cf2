use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Typed failure taxonomy for every exchange operation.
///
/// Business-rule rejections and wrong-phase attempts map to 400 like the
/// public API has always reported them; only dependency failures and an
/// exhausted draw surface as 500.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("this email has already been submitted")]
    DuplicateEmail,

    #[error("group {0} is already full")]
    GroupFull(u32),

    #[error("all spots are taken")]
    RosterFull,

    #[error("no participant matches {0}")]
    NotFound(String),

    #[error("the draw has already been completed")]
    AlreadyDrawn,

    #[error("the draw has not happened yet")]
    NotDrawn,

    #[error("notification emails have already been sent")]
    AlreadyNotified,

    #[error("roster incomplete ({current}/{target}), cannot draw yet")]
    IncompleteRoster { current: usize, target: usize },

    #[error("no valid assignment found after {attempts} attempts")]
    ExhaustedAttempts { attempts: u32 },

    #[error("unauthorized")]
    Unauthorized,

    #[error("dependency failure: {0}")]
    Dependency(#[from] anyhow::Error),
}

impl ExchangeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExchangeError::Validation(_)
            | ExchangeError::DuplicateEmail
            | ExchangeError::GroupFull(_)
            | ExchangeError::RosterFull
            | ExchangeError::AlreadyDrawn
            | ExchangeError::NotDrawn
            | ExchangeError::AlreadyNotified
            | ExchangeError::IncompleteRoster { .. } => StatusCode::BAD_REQUEST,
            ExchangeError::NotFound(_) => StatusCode::NOT_FOUND,
            ExchangeError::Unauthorized => StatusCode::UNAUTHORIZED,
            ExchangeError::ExhaustedAttempts { .. } | ExchangeError::Dependency(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ExchangeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}
