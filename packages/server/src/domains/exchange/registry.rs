//! Participant registry - roster rules
//!
//! Pure functions over `ExchangeState`. The roster is only writable while
//! the exchange is still collecting; every mutation here re-checks that
//! before touching anything.

use crate::common::ExchangeError;
use crate::config::ExchangeSettings;
use crate::domains::exchange::models::exchange::{ExchangeState, Phase};
use crate::domains::exchange::models::participant::{is_valid_email, normalize_email, Participant};

/// Register a new participant.
///
/// Ids are dense `1..N` in insertion order. Email uniqueness is global
/// across groups, the stricter of the two historical behaviors.
pub fn register(
    state: &mut ExchangeState,
    settings: &ExchangeSettings,
    name: &str,
    email: &str,
    group_id: u32,
    wish: &str,
) -> Result<Participant, ExchangeError> {
    if state.phase() != Phase::Collecting {
        return Err(ExchangeError::AlreadyDrawn);
    }

    let name = name.trim();
    let wish = wish.trim();
    let email = normalize_email(email);

    if name.is_empty() {
        return Err(ExchangeError::Validation("name is required".to_string()));
    }
    if wish.is_empty() {
        return Err(ExchangeError::Validation("wish is required".to_string()));
    }
    if !is_valid_email(&email) {
        return Err(ExchangeError::Validation(
            "email address is not valid".to_string(),
        ));
    }

    let quota = *settings
        .group_quotas
        .get(&group_id)
        .ok_or_else(|| ExchangeError::Validation(format!("unknown group {}", group_id)))?;

    if state.participants.len() >= settings.target_size {
        return Err(ExchangeError::RosterFull);
    }
    if state.participants.iter().any(|p| p.email == email) {
        return Err(ExchangeError::DuplicateEmail);
    }

    let group_count = state
        .participants
        .iter()
        .filter(|p| p.group_id == group_id)
        .count();
    if group_count >= quota {
        return Err(ExchangeError::GroupFull(group_id));
    }

    let participant = Participant {
        id: state.participants.len() as u32 + 1,
        name: name.to_string(),
        email,
        group_id,
        wish: wish.to_string(),
        assigned_to: None,
    };
    state.participants.push(participant.clone());

    Ok(participant)
}

/// Rewrite a participant's name and wish, located by (email, group).
///
/// Id and group are immutable once registered.
pub fn update(
    state: &mut ExchangeState,
    email: &str,
    group_id: u32,
    name: &str,
    wish: &str,
) -> Result<Participant, ExchangeError> {
    if state.phase() != Phase::Collecting {
        return Err(ExchangeError::AlreadyDrawn);
    }

    let name = name.trim();
    let wish = wish.trim();
    let email = normalize_email(email);

    if name.is_empty() {
        return Err(ExchangeError::Validation("name is required".to_string()));
    }
    if wish.is_empty() {
        return Err(ExchangeError::Validation("wish is required".to_string()));
    }

    let participant = state
        .participants
        .iter_mut()
        .find(|p| p.email == email && p.group_id == group_id)
        .ok_or_else(|| ExchangeError::NotFound(format!("{} in group {}", email, group_id)))?;

    participant.name = name.to_string();
    participant.wish = wish.to_string();

    Ok(participant.clone())
}

/// Remove a participant and re-index the remaining ids to a dense `1..N`
/// sequence in original insertion order.
pub fn remove(state: &mut ExchangeState, id: u32) -> Result<(), ExchangeError> {
    if state.phase() != Phase::Collecting {
        return Err(ExchangeError::AlreadyDrawn);
    }

    let before = state.participants.len();
    state.participants.retain(|p| p.id != id);
    if state.participants.len() == before {
        return Err(ExchangeError::NotFound(format!("participant id {}", id)));
    }

    for (index, participant) in state.participants.iter_mut().enumerate() {
        participant.id = index as u32 + 1;
    }

    Ok(())
}
