//! Update action - a submitter rewriting their own name or wish

use tracing::info;

use crate::common::ExchangeError;
use crate::domains::exchange::models::participant::Participant;
use crate::domains::exchange::registry;
use crate::kernel::ServerDeps;

use super::{load_state, save_state};

pub async fn update_participant(
    deps: &ServerDeps,
    email: &str,
    group_id: u32,
    name: &str,
    wish: &str,
) -> Result<Participant, ExchangeError> {
    let _guard = deps.exchange_lock.lock().await;

    let mut state = load_state(deps.store.as_ref()).await?;
    let participant = registry::update(&mut state, email, group_id, name, wish)?;
    save_state(deps.store.as_ref(), &state).await?;

    info!(participant_id = participant.id, "participant updated");

    Ok(participant)
}
