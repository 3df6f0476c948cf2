// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Roster rules
// and lifecycle decisions live in domains/exchange and use these traits
// through the actions layer.
//
// Naming convention: Base* for trait names (e.g., BaseMailer)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Exchange Store Trait (Infrastructure - single-key record storage)
// =============================================================================

/// Key/value storage for the canonical exchange record.
///
/// The value is raw JSON; shape normalization (legacy array vs flagged
/// object) happens in the domain layer, not here.
#[async_trait]
pub trait BaseExchangeStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;
}

// =============================================================================
// Mailer Trait (Infrastructure - outbound email)
// =============================================================================

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send one HTML email to a single recipient
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<()>;
}
