//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod store;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ResendAdapter, ServerDeps};
pub use store::PostgresExchangeStore;
pub use test_dependencies::{InMemoryExchangeStore, RecordingMailer, SentEmail};
pub use traits::*;
