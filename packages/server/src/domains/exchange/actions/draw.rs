//! Draw action - the one-shot admin transition into the assigned phase

use tracing::info;

use crate::common::ExchangeError;
use crate::domains::exchange::machines;
use crate::kernel::ServerDeps;

use super::{load_state, save_state};

/// Run the draw over the finalized roster and persist the assignment.
///
/// On an exhausted search nothing is written and the exchange stays in
/// the collecting phase, so the admin can simply trigger the draw again.
pub async fn finalize_draw(deps: &ServerDeps) -> Result<usize, ExchangeError> {
    let _guard = deps.exchange_lock.lock().await;

    let mut state = load_state(deps.store.as_ref()).await?;
    machines::finalize_draw(
        &mut state,
        deps.settings.target_size,
        &mut rand::thread_rng(),
    )?;
    save_state(deps.store.as_ref(), &state).await?;

    info!(roster = state.participants.len(), "draw finalized");

    Ok(state.participants.len())
}
