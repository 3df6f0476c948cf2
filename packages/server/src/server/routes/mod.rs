pub mod admin;
pub mod health;
pub mod status;
pub mod submit;

pub use admin::{
    admin_status_handler, delete_participant_handler, draw_handler, notify_handler, reset_handler,
};
pub use health::health_handler;
pub use status::status_handler;
pub use submit::{submit_handler, update_handler};
