//! Delete action - admin removal of a participant while collecting

use tracing::info;

use crate::common::ExchangeError;
use crate::domains::exchange::registry;
use crate::kernel::ServerDeps;

use super::{load_state, save_state};

/// Remove a participant by id. Remaining ids are re-indexed to a dense
/// `1..N` sequence, so callers must re-read the roster afterwards.
pub async fn delete_participant(deps: &ServerDeps, id: u32) -> Result<(), ExchangeError> {
    let _guard = deps.exchange_lock.lock().await;

    let mut state = load_state(deps.store.as_ref()).await?;
    registry::remove(&mut state, id)?;
    save_state(deps.store.as_ref(), &state).await?;

    info!(
        participant_id = id,
        roster = state.participants.len(),
        "participant removed"
    );

    Ok(())
}
