//! Test harness: the real router served on an ephemeral port, with
//! in-memory storage and a recording mailer injected in place of
//! Postgres and Resend.

use std::sync::Arc;

use exchange_core::kernel::{InMemoryExchangeStore, RecordingMailer, ServerDeps};
use exchange_core::server::build_app;
use exchange_core::ExchangeSettings;

use super::fixtures::default_settings;

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";

pub struct TestHarness {
    pub base_url: String,
    pub client: reqwest::Client,
    pub store: Arc<InMemoryExchangeStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestHarness {
    /// Harness with the default eight-person quota table
    pub async fn new() -> Self {
        Self::with_settings(default_settings()).await
    }

    pub async fn with_settings(settings: ExchangeSettings) -> Self {
        // Initialize tracing subscriber to respect RUST_LOG environment
        // variable. Uses try_init() to avoid panicking if already set up.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(InMemoryExchangeStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let deps = Arc::new(ServerDeps::new(store.clone(), mailer.clone(), settings));

        let app = build_app(deps);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server exited");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            store,
            mailer,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        group_id: u32,
        wish: &str,
    ) -> reqwest::Response {
        self.post(
            "/api/submit",
            serde_json::json!({
                "name": name,
                "email": email,
                "group_id": group_id,
                "wish": wish,
            }),
        )
        .await
    }

    pub async fn admin_get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(TEST_ADMIN_SECRET)
            .send()
            .await
            .expect("admin GET request failed")
    }

    pub async fn admin_post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.admin_post_with_secret(path, body, TEST_ADMIN_SECRET)
            .await
    }

    pub async fn admin_post_with_secret(
        &self,
        path: &str,
        body: serde_json::Value,
        secret: &str,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(secret)
            .json(&body)
            .send()
            .await
            .expect("admin POST request failed")
    }

    /// The full roster as the admin status view reports it
    pub async fn admin_roster(&self) -> serde_json::Value {
        self.admin_get("/api/admin/status")
            .await
            .json()
            .await
            .expect("admin status is valid JSON")
    }
}
