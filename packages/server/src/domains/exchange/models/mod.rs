pub mod exchange;
pub mod participant;

pub use exchange::{ExchangeState, Phase, StoredExchange};
pub use participant::Participant;
