//! Notification dispatch - one email per giver, sent at most once
//!
//! The sends run concurrently and fail independently: one bounced address
//! must not block or roll back the rest of the batch. The record lock is
//! held across the whole read-send-mark-write span so a second dispatch
//! request waits, then gets refused by the gate instead of re-sending.

use futures::future::join_all;
use serde::Serialize;
use tracing::{error, info};

use crate::common::ExchangeError;
use crate::domains::exchange::machines;
use crate::domains::exchange::models::exchange::Phase;
use crate::domains::exchange::models::participant::Participant;
use crate::kernel::ServerDeps;

use super::{load_state, save_state};

const NOTIFY_SUBJECT: &str = "Your secret gift mission is here!";

/// Per-recipient outcome counts for one dispatch run
#[derive(Debug, Clone, Serialize)]
pub struct NotifyOutcome {
    pub sent: usize,
    pub failed: usize,
}

pub async fn send_notifications(
    deps: &ServerDeps,
    gift_amount: &str,
) -> Result<NotifyOutcome, ExchangeError> {
    let gift_amount = gift_amount.trim();
    if gift_amount.is_empty() {
        return Err(ExchangeError::Validation(
            "gift amount is required".to_string(),
        ));
    }

    let _guard = deps.exchange_lock.lock().await;

    let mut state = load_state(deps.store.as_ref()).await?;

    // Check the gate before building anything so a repeat dispatch is
    // refused without a single send
    match state.phase() {
        Phase::Collecting => return Err(ExchangeError::NotDrawn),
        Phase::Notified => return Err(ExchangeError::AlreadyNotified),
        Phase::Assigned => {}
    }

    let pairs = giver_receiver_pairs(&state.participants)?;

    let sends = pairs.iter().map(|(giver, receiver)| {
        let mailer = deps.mailer.clone();
        let to = giver.email.clone();
        let html = notification_body(giver, receiver, gift_amount);
        async move { mailer.send_email(&to, NOTIFY_SUBJECT, &html).await }
    });

    let results = join_all(sends).await;

    let mut sent = 0;
    let mut failed = 0;
    for ((giver, _), result) in pairs.iter().zip(results) {
        match result {
            Ok(()) => sent += 1,
            Err(e) => {
                failed += 1;
                error!(participant_id = giver.id, error = %e, "notification failed");
            }
        }
    }

    machines::mark_notified(&mut state)?;
    save_state(deps.store.as_ref(), &state).await?;

    info!(sent, failed, "notification dispatch complete");

    Ok(NotifyOutcome { sent, failed })
}

/// Resolve every giver's assigned receiver up front. A dangling
/// assignment means the stored record is corrupt; refuse the whole batch
/// rather than notify half the roster.
fn giver_receiver_pairs(
    participants: &[Participant],
) -> Result<Vec<(Participant, Participant)>, ExchangeError> {
    let mut pairs = Vec::with_capacity(participants.len());

    for giver in participants {
        let receiver_id = giver.assigned_to.ok_or_else(|| {
            ExchangeError::Dependency(anyhow::anyhow!(
                "participant {} has no assignment despite a completed draw",
                giver.id
            ))
        })?;
        let receiver = participants
            .iter()
            .find(|p| p.id == receiver_id)
            .ok_or_else(|| {
                ExchangeError::Dependency(anyhow::anyhow!(
                    "assigned receiver {} does not exist",
                    receiver_id
                ))
            })?;
        pairs.push((giver.clone(), receiver.clone()));
    }

    Ok(pairs)
}

fn notification_body(giver: &Participant, receiver: &Participant, gift_amount: &str) -> String {
    format!(
        "<p>Hi {giver_name},</p>\
         <p>The draw is in - your secret gift mission has arrived!</p>\
         <p>This year's gift budget: <b>{gift_amount}</b></p>\
         <p>You drew <b>{receiver_name}</b>. Their wish:</p>\
         <blockquote style=\"border-left: 2px solid #ccc; padding-left: 10px; margin-left: 5px;\">\
         <i>{wish}</i></blockquote>\
         <p>Please prepare your gift and bring it on exchange day. Keep it secret!</p>",
        giver_name = giver.name,
        gift_amount = gift_amount,
        receiver_name = receiver.name,
        wish = receiver.wish,
    )
}
