//! Notification dispatch tests: one email per giver, at most once,
//! partial failures tolerated

mod common;

use std::collections::HashMap;

use common::{fill_roster, small_settings, TestHarness, SMALL_ROSTER};

async fn drawn_harness() -> TestHarness {
    let harness = TestHarness::with_settings(small_settings()).await;
    fill_roster(&harness, &SMALL_ROSTER).await;
    let response = harness
        .admin_post("/api/admin/draw", serde_json::json!({}))
        .await;
    assert_eq!(response.status(), 200);
    harness
}

#[tokio::test]
async fn notify_requires_a_completed_draw() {
    let harness = TestHarness::with_settings(small_settings()).await;
    fill_roster(&harness, &SMALL_ROSTER).await;

    let response = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20" }),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(harness.mailer.sent_count(), 0);
}

#[tokio::test]
async fn notify_requires_a_gift_amount() {
    let harness = drawn_harness().await;

    let response = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "  " }),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(harness.mailer.sent_count(), 0);
}

#[tokio::test]
async fn notify_emails_every_giver_their_recipients_wish() {
    let harness = drawn_harness().await;

    let response = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20-$30" }),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["sent"], 4);
    assert_eq!(body["failed"], 0);

    let roster = harness.admin_roster().await;
    assert_eq!(roster["emails_sent"], true);

    // Index participants by email to check each message against the
    // stored assignment
    let participants = roster["participants"].as_array().unwrap().clone();
    let by_id: HashMap<u64, &serde_json::Value> = participants
        .iter()
        .map(|p| (p["id"].as_u64().unwrap(), p))
        .collect();

    let sent = harness.mailer.sent();
    assert_eq!(sent.len(), 4);

    for message in &sent {
        let giver = participants
            .iter()
            .find(|p| p["email"] == message.to.as_str())
            .expect("message went to a roster member");
        let receiver = by_id[&giver["assigned_to"].as_u64().unwrap()];

        assert!(message.html.contains(receiver["name"].as_str().unwrap()));
        assert!(message.html.contains(receiver["wish"].as_str().unwrap()));
        assert!(message.html.contains("$20-$30"));
        // The recipient's address never appears in the giver's mail
        assert!(!message.html.contains(receiver["email"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn notify_is_one_shot() {
    let harness = drawn_harness().await;

    let first = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20" }),
        )
        .await;
    assert_eq!(first.status(), 200);
    assert_eq!(harness.mailer.sent_count(), 4);

    let second = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20" }),
        )
        .await;
    assert_eq!(second.status(), 400);

    let body: serde_json::Value = second.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("already been sent"));

    // No second batch went out
    assert_eq!(harness.mailer.sent_count(), 4);
}

#[tokio::test]
async fn partial_failure_is_reported_and_does_not_abort_the_batch() {
    let harness = drawn_harness().await;
    harness.mailer.fail_for("ben@example.com");

    let response = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20" }),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["sent"], 3);
    assert_eq!(body["failed"], 1);

    // The batch still counts as dispatched: no re-runs
    let roster = harness.admin_roster().await;
    assert_eq!(roster["emails_sent"], true);

    let second = harness
        .admin_post(
            "/api/admin/notify",
            serde_json::json!({ "gift_amount": "$20" }),
        )
        .await;
    assert_eq!(second.status(), 400);
    assert_eq!(harness.mailer.sent_count(), 3);
}

#[tokio::test]
async fn roster_full_alert_fires_once_when_the_last_spot_fills() {
    let mut settings = small_settings();
    settings.admin_alert_email = Some("admin@example.com".to_string());

    let harness = TestHarness::with_settings(settings).await;

    for (name, email, group_id) in &SMALL_ROSTER[..3] {
        harness.submit(name, email, *group_id, "something").await;
        assert!(!harness.mailer.was_sent_to("admin@example.com"));
    }

    let (name, email, group_id) = SMALL_ROSTER[3];
    let response = harness.submit(name, email, group_id, "something").await;
    assert_eq!(response.status(), 201);

    let alerts: Vec<_> = harness
        .mailer
        .sent()
        .into_iter()
        .filter(|m| m.to == "admin@example.com")
        .collect();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].subject.contains("Roster full"));
}
