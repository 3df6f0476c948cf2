//! Exchange actions - async orchestration over storage and mail
//!
//! Every mutating action takes the record lock, loads the canonical
//! record, applies the pure domain logic, and writes the result back.
//! The lock covers the whole read-modify-write so two concurrent admin
//! calls cannot both observe the same phase and double-run a transition.

pub mod draw;
pub mod notify;
pub mod remove;
pub mod reset;
pub mod status;
pub mod submit;
pub mod update;

pub use draw::finalize_draw;
pub use notify::{send_notifications, NotifyOutcome};
pub use remove::delete_participant;
pub use reset::reset_exchange;
pub use status::{admin_status, public_status, AdminStatus, PublicStatus};
pub use submit::register_participant;
pub use update::update_participant;

use anyhow::Context;

use crate::common::ExchangeError;
use crate::domains::exchange::models::exchange::{ExchangeState, StoredExchange};
use crate::kernel::BaseExchangeStore;

/// Storage key holding the canonical exchange record
pub const EXCHANGE_KEY: &str = "participants";

/// Load and normalize the exchange record; an absent key is the empty
/// collecting state.
pub(crate) async fn load_state(
    store: &dyn BaseExchangeStore,
) -> Result<ExchangeState, ExchangeError> {
    match store.get(EXCHANGE_KEY).await? {
        Some(value) => {
            let stored: StoredExchange = serde_json::from_value(value)
                .context("exchange record does not match any known shape")?;
            Ok(ExchangeState::from_stored(stored))
        }
        None => Ok(ExchangeState::default()),
    }
}

/// Persist the record, always in the flagged object shape.
pub(crate) async fn save_state(
    store: &dyn BaseExchangeStore,
    state: &ExchangeState,
) -> Result<(), ExchangeError> {
    let value =
        serde_json::to_value(state.to_stored()).context("failed to serialize exchange record")?;
    store.set(EXCHANGE_KEY, value).await?;
    Ok(())
}
