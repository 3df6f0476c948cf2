//! Assignment engine - constrained random giver/receiver pairing
//!
//! Bounded rejection sampling: shuffle the roster into a receiver order,
//! pair element-wise with the roster, accept the first candidate where no
//! giver receives themselves or anyone from their own group. For the
//! roster sizes this system handles (N around 8, small per-group caps) a
//! valid candidate shows up within a handful of shuffles in expectation;
//! the attempt bound keeps infeasible quota tables from looping forever.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

use crate::common::ExchangeError;
use crate::domains::exchange::models::participant::Participant;

/// Attempt bound for the rejection-sampling search. Raising it buys a
/// lower spurious-failure rate on barely-feasible rosters at the cost of
/// a slower definitive answer on infeasible ones.
pub const MAX_DRAW_ATTEMPTS: u32 = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrawError {
    #[error("no valid assignment found after {attempts} attempts")]
    ExhaustedAttempts { attempts: u32 },
}

impl From<DrawError> for ExchangeError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::ExhaustedAttempts { attempts } => {
                ExchangeError::ExhaustedAttempts { attempts }
            }
        }
    }
}

/// Search for a giver -> receiver assignment over the roster.
///
/// The result is total: every roster id appears exactly once as a giver
/// (key) and once as a receiver (value). Deterministic for a fixed rng.
/// No state is touched on exhaustion, so the caller can safely retry.
pub fn draw<R: Rng + ?Sized>(
    roster: &[Participant],
    max_attempts: u32,
    rng: &mut R,
) -> Result<HashMap<u32, u32>, DrawError> {
    for _ in 0..max_attempts {
        let mut receivers: Vec<&Participant> = roster.iter().collect();
        receivers.shuffle(rng);

        let valid = roster
            .iter()
            .zip(&receivers)
            .all(|(giver, receiver)| giver.id != receiver.id && giver.group_id != receiver.group_id);

        if valid {
            return Ok(roster
                .iter()
                .zip(&receivers)
                .map(|(giver, receiver)| (giver.id, receiver.id))
                .collect());
        }
    }

    Err(DrawError::ExhaustedAttempts {
        attempts: max_attempts,
    })
}
