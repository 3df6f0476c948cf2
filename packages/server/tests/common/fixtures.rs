//! Shared fixtures: settings tables and roster helpers

use std::collections::HashMap;

use exchange_core::ExchangeSettings;

use super::harness::{TestHarness, TEST_ADMIN_SECRET};

/// The production-shaped table: eight spots across five groups
pub fn default_settings() -> ExchangeSettings {
    ExchangeSettings {
        target_size: 8,
        group_quotas: HashMap::from([(1, 1), (2, 1), (3, 2), (4, 2), (5, 2)]),
        admin_secret: TEST_ADMIN_SECRET.to_string(),
        admin_alert_email: None,
    }
}

/// A four-person exchange: two singleton groups and one pair
pub fn small_settings() -> ExchangeSettings {
    ExchangeSettings {
        target_size: 4,
        group_quotas: HashMap::from([(1, 1), (2, 1), (3, 2)]),
        admin_secret: TEST_ADMIN_SECRET.to_string(),
        admin_alert_email: None,
    }
}

/// Two people who both have to register under the same group: no valid
/// assignment can exist
pub fn infeasible_settings() -> ExchangeSettings {
    ExchangeSettings {
        target_size: 2,
        group_quotas: HashMap::from([(1, 2)]),
        admin_secret: TEST_ADMIN_SECRET.to_string(),
        admin_alert_email: None,
    }
}

/// (name, email, group) rows matching `small_settings`
pub const SMALL_ROSTER: [(&str, &str, u32); 4] = [
    ("Ada", "ada@example.com", 1),
    ("Ben", "ben@example.com", 2),
    ("Cam", "cam@example.com", 3),
    ("Dee", "dee@example.com", 3),
];

/// (name, email, group) rows matching `default_settings`
pub const FULL_ROSTER: [(&str, &str, u32); 8] = [
    ("Ada", "ada@example.com", 1),
    ("Ben", "ben@example.com", 2),
    ("Cam", "cam@example.com", 3),
    ("Dee", "dee@example.com", 3),
    ("Eli", "eli@example.com", 4),
    ("Fay", "fay@example.com", 4),
    ("Gus", "gus@example.com", 5),
    ("Hal", "hal@example.com", 5),
];

pub async fn fill_roster(harness: &TestHarness, roster: &[(&str, &str, u32)]) {
    for (name, email, group_id) in roster {
        let response = harness
            .submit(name, email, *group_id, "something nice")
            .await;
        assert_eq!(response.status(), 201, "seeding {} failed", email);
    }
}
