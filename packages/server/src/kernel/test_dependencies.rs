// Test doubles - in-memory implementations for testing
//
// Provides store and mailer doubles that can be injected into ServerDeps
// for unit and integration tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{BaseExchangeStore, BaseMailer};

// =============================================================================
// In-Memory Exchange Store
// =============================================================================

/// HashMap-backed store with the same last-writer-wins semantics as the
/// Postgres implementation.
pub struct InMemoryExchangeStore {
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl InMemoryExchangeStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-load a raw record, e.g. a legacy-shaped one
    pub fn seed(&self, key: &str, value: serde_json::Value) {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value);
    }

    /// Raw stored value, for asserting on the written shape
    pub fn raw(&self, key: &str) -> Option<serde_json::Value> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

impl Default for InMemoryExchangeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseExchangeStore for InMemoryExchangeStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

// =============================================================================
// Recording Mailer
// =============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mailer double that records every send and can be told to fail for
/// specific recipients (for partial-failure tests).
pub struct RecordingMailer {
    sent: Mutex<Vec<SentEmail>>,
    failing_recipients: Mutex<Vec<String>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_recipients: Mutex::new(Vec::new()),
        }
    }

    /// Make every send to this recipient fail
    pub fn fail_for(&self, email: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .push(email.to_string());
    }

    /// Everything sent so far
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn was_sent_to(&self, email: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|m| m.to == email)
    }
}

impl Default for RecordingMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for RecordingMailer {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        if self
            .failing_recipients
            .lock()
            .unwrap()
            .iter()
            .any(|e| e == to)
        {
            anyhow::bail!("simulated delivery failure to {}", to);
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });

        Ok(())
    }
}
