use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;

/// Default per-group registration caps, `group_id:quota` pairs.
pub const DEFAULT_GROUP_QUOTAS: &str = "1:1,2:1,3:2,4:2,5:2";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_secret: String,
    pub resend_api_key: String,
    pub mail_from: String,
    pub admin_alert_email: Option<String>,
    pub target_size: usize,
    pub group_quotas: HashMap<u32, usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            admin_secret: env::var("ADMIN_SECRET")
                .context("ADMIN_SECRET must be set")?,
            resend_api_key: env::var("RESEND_API_KEY")
                .context("RESEND_API_KEY must be set")?,
            mail_from: env::var("MAIL_FROM")
                .context("MAIL_FROM must be set")?,
            admin_alert_email: env::var("ADMIN_ALERT_EMAIL").ok(),
            target_size: env::var("TARGET_SIZE")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("TARGET_SIZE must be a valid number")?,
            group_quotas: parse_group_quotas(
                &env::var("GROUP_QUOTAS").unwrap_or_else(|_| DEFAULT_GROUP_QUOTAS.to_string()),
            )?,
        })
    }

    /// Business settings carried into the dependency container
    pub fn exchange_settings(&self) -> ExchangeSettings {
        ExchangeSettings {
            target_size: self.target_size,
            group_quotas: self.group_quotas.clone(),
            admin_secret: self.admin_secret.clone(),
            admin_alert_email: self.admin_alert_email.clone(),
        }
    }
}

/// Exchange business parameters, independent of transport and storage
#[derive(Debug, Clone)]
pub struct ExchangeSettings {
    pub target_size: usize,
    pub group_quotas: HashMap<u32, usize>,
    pub admin_secret: String,
    pub admin_alert_email: Option<String>,
}

/// Parse a `group_id:quota` CSV (e.g. "1:1,2:1,3:2") into the quota table
pub fn parse_group_quotas(raw: &str) -> Result<HashMap<u32, usize>> {
    let mut quotas = HashMap::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (group, quota) = entry
            .split_once(':')
            .with_context(|| format!("invalid quota entry '{}', expected 'group:quota'", entry))?;

        let group: u32 = group
            .trim()
            .parse()
            .with_context(|| format!("invalid group id '{}'", group))?;
        let quota: usize = quota
            .trim()
            .parse()
            .with_context(|| format!("invalid quota '{}'", quota))?;

        if quotas.insert(group, quota).is_some() {
            bail!("duplicate group id {} in GROUP_QUOTAS", group);
        }
    }

    if quotas.is_empty() {
        bail!("GROUP_QUOTAS must define at least one group");
    }

    Ok(quotas)
}
