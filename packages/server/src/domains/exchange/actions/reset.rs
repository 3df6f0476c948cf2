//! Reset action - wipe the exchange back to an empty collecting state

use tracing::info;

use crate::common::ExchangeError;
use crate::kernel::ServerDeps;

use super::EXCHANGE_KEY;

/// Always legal, from any phase. Deleting the key is equivalent to
/// writing an empty record: an absent key normalizes to the empty
/// collecting state on the next read.
pub async fn reset_exchange(deps: &ServerDeps) -> Result<(), ExchangeError> {
    let _guard = deps.exchange_lock.lock().await;

    deps.store.delete(EXCHANGE_KEY).await?;

    info!("exchange reset");

    Ok(())
}
