use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Same address pattern the submission form has always enforced
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// One registered participant.
///
/// Ids are dense `1..N` in insertion order and are re-issued when someone
/// is removed, so callers must not cache them across a delete.
/// `assigned_to` is set once by the draw and never changes afterwards;
/// it is omitted from the wire shape until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub group_id: u32,
    pub wish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u32>,
}

/// Canonical form used for uniqueness checks and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
