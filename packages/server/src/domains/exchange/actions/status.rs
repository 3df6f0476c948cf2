//! Status views
//!
//! The public view is aggregate-only: counts and flags, nothing that
//! identifies a participant. Names, emails, wishes and the assignment
//! appear only in the admin view behind the admin boundary.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::common::ExchangeError;
use crate::domains::exchange::models::participant::Participant;
use crate::kernel::ServerDeps;

use super::load_state;

#[derive(Debug, Serialize)]
pub struct PublicStatus {
    pub draw_completed: bool,
    pub count: usize,
    pub target_size: usize,
    /// Roster size per configured group, zeroes included
    pub groups: BTreeMap<u32, usize>,
}

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub draw_completed: bool,
    pub emails_sent: bool,
    pub count: usize,
    pub participants: Vec<Participant>,
}

pub async fn public_status(deps: &ServerDeps) -> Result<PublicStatus, ExchangeError> {
    let state = load_state(deps.store.as_ref()).await?;

    let mut groups: BTreeMap<u32, usize> = deps
        .settings
        .group_quotas
        .keys()
        .map(|&group_id| (group_id, 0))
        .collect();
    for (group_id, count) in state.group_counts() {
        groups.insert(group_id, count);
    }

    Ok(PublicStatus {
        draw_completed: state.draw_completed,
        count: state.participants.len(),
        target_size: deps.settings.target_size,
        groups,
    })
}

pub async fn admin_status(deps: &ServerDeps) -> Result<AdminStatus, ExchangeError> {
    let state = load_state(deps.store.as_ref()).await?;

    Ok(AdminStatus {
        draw_completed: state.draw_completed,
        emails_sent: state.emails_sent,
        count: state.participants.len(),
        participants: state.participants,
    })
}
