//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container used by the
//! actions layer. Storage and mail use trait abstractions so tests can
//! inject in-memory doubles.

use anyhow::Result;
use async_trait::async_trait;
use resend::models::EmailMessage;
use resend::ResendService;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::ExchangeSettings;
use crate::kernel::{BaseExchangeStore, BaseMailer};

// =============================================================================
// ResendService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around ResendService that implements the BaseMailer trait
pub struct ResendAdapter {
    service: Arc<ResendService>,
    from: String,
}

impl ResendAdapter {
    pub fn new(service: Arc<ResendService>, from: String) -> Self {
        Self { service, from }
    }
}

#[async_trait]
impl BaseMailer for ResendAdapter {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let message = EmailMessage {
            from: self.from.clone(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            html: html.to_string(),
        };

        self.service
            .send_email(&message)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to exchange actions
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseExchangeStore>,
    pub mailer: Arc<dyn BaseMailer>,
    pub settings: ExchangeSettings,
    /// Serializes every read-modify-write of the one exchange record.
    /// Without it, two concurrent draw requests could both observe a
    /// collecting phase and both run the engine.
    pub exchange_lock: Arc<Mutex<()>>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BaseExchangeStore>,
        mailer: Arc<dyn BaseMailer>,
        settings: ExchangeSettings,
    ) -> Self {
        Self {
            store,
            mailer,
            settings,
            exchange_lock: Arc::new(Mutex::new(())),
        }
    }
}
