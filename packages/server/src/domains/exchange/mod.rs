//! Exchange domain - the gift exchange core
//!
//! Layering:
//!   models/   - participant + exchange record types, stored-shape handling
//!   registry  - roster rules (capacity, quotas, duplicate emails), pure
//!   engine    - constrained random assignment search, pure
//!   machines  - lifecycle transitions (collecting -> assigned -> notified), pure
//!   actions/  - async orchestration over storage and mail

pub mod actions;
pub mod engine;
pub mod machines;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use models::exchange::{ExchangeState, Phase, StoredExchange};
pub use models::participant::Participant;
