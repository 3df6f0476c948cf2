//! Register action - submission intake plus the roster-full admin alert

use tracing::{info, warn};

use crate::common::ExchangeError;
use crate::domains::exchange::models::participant::Participant;
use crate::domains::exchange::registry;
use crate::kernel::ServerDeps;

use super::{load_state, save_state};

pub async fn register_participant(
    deps: &ServerDeps,
    name: &str,
    email: &str,
    group_id: u32,
    wish: &str,
) -> Result<Participant, ExchangeError> {
    let guard = deps.exchange_lock.lock().await;

    let mut state = load_state(deps.store.as_ref()).await?;
    let participant = registry::register(&mut state, &deps.settings, name, email, group_id, wish)?;
    save_state(deps.store.as_ref(), &state).await?;

    info!(
        participant_id = participant.id,
        group_id = participant.group_id,
        roster = state.participants.len(),
        "participant registered"
    );

    let roster_full = state.participants.len() == deps.settings.target_size;

    // Release the record lock before going to the mailer
    drop(guard);

    if roster_full {
        send_roster_full_alert(deps).await;
    }

    Ok(participant)
}

/// Best effort: a failed alert must not fail the registration that
/// triggered it.
async fn send_roster_full_alert(deps: &ServerDeps) {
    if let Some(admin_email) = &deps.settings.admin_alert_email {
        let html = format!(
            "<p>All {} spots are taken. The exchange is ready to draw.</p>",
            deps.settings.target_size
        );
        if let Err(e) = deps
            .mailer
            .send_email(admin_email, "Roster full - ready to draw", &html)
            .await
        {
            warn!(error = %e, "roster-full alert failed");
        }
    }
}
