// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure aggregate reads over a [`RecordSet`].
//!
//! The effective participation count is always derived, never stored:
//! approved report count plus manual credit (0 if none).

use crate::records::RecordSet;
use asx_events_domain::{CallSign, CallSignId, EventParticipation};

/// A leaderboard row: a call sign and its effective count.
///
/// Rank labels (1st, 2nd, ...) are presentational and left to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// The call sign.
    pub call_sign: CallSign,
    /// The effective participation count.
    pub count: u32,
}

/// Returns the call signs with `is_active` set, in insertion order.
#[must_use]
pub fn active_call_signs(records: &RecordSet) -> Vec<&CallSign> {
    records.call_signs.iter().filter(|cs| cs.is_active).collect()
}

/// Returns the participation reports awaiting approval, in insertion order.
#[must_use]
pub fn pending_participations(records: &RecordSet) -> Vec<&EventParticipation> {
    records
        .event_participations
        .iter()
        .filter(|p| !p.is_approved)
        .collect()
}

/// Returns the approved participation reports, in insertion order.
#[must_use]
pub fn approved_participations(records: &RecordSet) -> Vec<&EventParticipation> {
    records
        .event_participations
        .iter()
        .filter(|p| p.is_approved)
        .collect()
}

/// Computes the effective participation count for a call sign.
///
/// Approved report count plus manual credit. An absent call sign (or
/// one with no records) yields 0.
///
/// # Arguments
///
/// * `records` - The record set to read
/// * `call_sign_id` - The call sign to count for
#[must_use]
pub fn participation_count(records: &RecordSet, call_sign_id: &CallSignId) -> u32 {
    let approved: u32 = records
        .event_participations
        .iter()
        .filter(|p| &p.call_sign_id == call_sign_id && p.is_approved)
        .count()
        .try_into()
        .unwrap_or(u32::MAX);

    let manual: u32 = records
        .find_manual_count(call_sign_id)
        .map_or(0, |mc| mc.count);

    approved.saturating_add(manual)
}

/// Builds the leaderboard: active call signs sorted descending by
/// effective count.
///
/// The sort is stable, so call signs with equal counts keep their
/// insertion order.
///
/// # Arguments
///
/// * `records` - The record set to read
#[must_use]
pub fn leaderboard(records: &RecordSet) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = active_call_signs(records)
        .into_iter()
        .map(|cs| LeaderboardEntry {
            call_sign: cs.clone(),
            count: participation_count(records, &cs.id),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
