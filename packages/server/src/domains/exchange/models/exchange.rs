use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::participant::Participant;

/// Lifecycle phase of the single exchange instance, derived from the two
/// persisted flags. Transitions are monotonic except for a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Assigned,
    Notified,
}

/// The one process-wide exchange record.
///
/// Target size and group quotas are configuration, not state; this struct
/// carries only what gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeState {
    pub participants: Vec<Participant>,
    pub draw_completed: bool,
    pub emails_sent: bool,
}

/// Wire shape of the storage record.
///
/// Early deployments stored a bare participant array while collecting and
/// only switched to the flagged object after the draw. Reads accept both;
/// writes always produce the object shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredExchange {
    Record {
        #[serde(default)]
        draw_completed: bool,
        #[serde(default)]
        emails_sent: bool,
        participants: Vec<Participant>,
    },
    Roster(Vec<Participant>),
}

impl ExchangeState {
    pub fn phase(&self) -> Phase {
        if self.emails_sent {
            Phase::Notified
        } else if self.draw_completed {
            Phase::Assigned
        } else {
            Phase::Collecting
        }
    }

    pub fn from_stored(stored: StoredExchange) -> Self {
        match stored {
            StoredExchange::Roster(participants) => Self {
                participants,
                draw_completed: false,
                emails_sent: false,
            },
            StoredExchange::Record {
                draw_completed,
                emails_sent,
                participants,
            } => Self {
                participants,
                draw_completed,
                emails_sent,
            },
        }
    }

    pub fn to_stored(&self) -> StoredExchange {
        StoredExchange::Record {
            draw_completed: self.draw_completed,
            emails_sent: self.emails_sent,
            participants: self.participants.clone(),
        }
    }

    /// Roster size per group id, for the aggregate status view
    pub fn group_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for participant in &self.participants {
            *counts.entry(participant.group_id).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: u32, group_id: u32) -> Participant {
        Participant {
            id,
            name: format!("Person {}", id),
            email: format!("person{}@example.com", id),
            group_id,
            wish: "socks".to_string(),
            assigned_to: None,
        }
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = ExchangeState::default();
        assert_eq!(state.phase(), Phase::Collecting);

        state.draw_completed = true;
        assert_eq!(state.phase(), Phase::Assigned);

        state.emails_sent = true;
        assert_eq!(state.phase(), Phase::Notified);
    }

    #[test]
    fn test_legacy_array_shape_normalizes() {
        let raw = serde_json::json!([
            { "id": 1, "name": "Ada", "email": "ada@example.com", "group_id": 1, "wish": "tea" },
            { "id": 2, "name": "Ben", "email": "ben@example.com", "group_id": 2, "wish": "coffee" }
        ]);

        let stored: StoredExchange = serde_json::from_value(raw).unwrap();
        let state = ExchangeState::from_stored(stored);

        assert_eq!(state.phase(), Phase::Collecting);
        assert_eq!(state.participants.len(), 2);
        assert_eq!(state.participants[0].email, "ada@example.com");
    }

    #[test]
    fn test_object_shape_normalizes_with_missing_flags() {
        // Records written right after a draw predate the emails_sent flag
        let raw = serde_json::json!({
            "draw_completed": true,
            "participants": [
                { "id": 1, "name": "Ada", "email": "ada@example.com", "group_id": 1,
                  "wish": "tea", "assigned_to": 2 },
                { "id": 2, "name": "Ben", "email": "ben@example.com", "group_id": 2,
                  "wish": "coffee", "assigned_to": 1 }
            ]
        });

        let stored: StoredExchange = serde_json::from_value(raw).unwrap();
        let state = ExchangeState::from_stored(stored);

        assert_eq!(state.phase(), Phase::Assigned);
        assert_eq!(state.participants[0].assigned_to, Some(2));
    }

    #[test]
    fn test_writes_always_produce_object_shape() {
        let state = ExchangeState {
            participants: vec![participant(1, 1)],
            draw_completed: false,
            emails_sent: false,
        };

        let json = serde_json::to_value(state.to_stored()).unwrap();
        assert!(json.is_object());
        assert_eq!(json["draw_completed"], false);
        assert_eq!(json["emails_sent"], false);
        assert_eq!(json["participants"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_group_counts() {
        let state = ExchangeState {
            participants: vec![participant(1, 1), participant(2, 3), participant(3, 3)],
            draw_completed: false,
            emails_sent: false,
        };

        let counts = state.group_counts();
        assert_eq!(counts[&1], 1);
        assert_eq!(counts[&3], 2);
        assert!(counts.get(&2).is_none());
    }
}
