// Gift Exchange Coordinator - API Core
//
// This crate provides the backend API for a small fixed-size group gift
// exchange: participants submit a wish, an admin triggers the one-shot
// draw, and each giver is privately emailed their recipient's wish.
//
// Core logic lives in domains/exchange; everything under server/ and
// kernel/ is thin I/O around it.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
