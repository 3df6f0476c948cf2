//! Exchange lifecycle machine - pure transition logic
//!
//! Phases move forward only: collecting -> assigned -> notified. Each
//! transition re-derives the current phase from the record and refuses
//! anything out of order, so a stale caller gets a typed rejection
//! instead of a second draw or a second mail-out.

use rand::Rng;

use crate::common::ExchangeError;
use crate::domains::exchange::engine;
use crate::domains::exchange::models::exchange::{ExchangeState, Phase};

/// Run the draw and move the exchange to the assigned phase.
///
/// On an exhausted search the record is left untouched and still
/// collecting, so the operation can simply be retried.
pub fn finalize_draw<R: Rng + ?Sized>(
    state: &mut ExchangeState,
    target_size: usize,
    rng: &mut R,
) -> Result<(), ExchangeError> {
    if state.phase() != Phase::Collecting {
        return Err(ExchangeError::AlreadyDrawn);
    }
    if state.participants.len() < target_size {
        return Err(ExchangeError::IncompleteRoster {
            current: state.participants.len(),
            target: target_size,
        });
    }

    let assignment = engine::draw(&state.participants, engine::MAX_DRAW_ATTEMPTS, rng)?;

    for participant in &mut state.participants {
        participant.assigned_to = assignment.get(&participant.id).copied();
    }
    state.draw_completed = true;

    Ok(())
}

/// Record that notification dispatch has completed.
///
/// Callers must only invoke this after the mail batch has finished; once
/// set, dispatch refuses to run again.
pub fn mark_notified(state: &mut ExchangeState) -> Result<(), ExchangeError> {
    match state.phase() {
        Phase::Collecting => Err(ExchangeError::NotDrawn),
        Phase::Notified => Err(ExchangeError::AlreadyNotified),
        Phase::Assigned => {
            state.emails_sent = true;
            Ok(())
        }
    }
}

/// Wipe the exchange back to an empty collecting state. Always legal.
pub fn reset(state: &mut ExchangeState) {
    *state = ExchangeState::default();
}
