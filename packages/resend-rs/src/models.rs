use serde::{Deserialize, Serialize};

/// Payload for the Resend send-email endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}
