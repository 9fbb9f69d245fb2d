// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use asx_events_domain::{
    CallSign, CallSignId, EventParticipation, ManualParticipationCount, ParticipationId,
};
use serde::{Deserialize, Serialize};

/// The complete record state: three flat collections.
///
/// This is the whole-document shape the record store loads and saves,
/// and the unit the aggregation engine reads over. Field names follow
/// the external snapshot format; `manualParticipationCounts` defaults
/// to empty so snapshots from before the collection existed still
/// import cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// All call sign records, in insertion order.
    pub call_signs: Vec<CallSign>,
    /// All event participation reports, in insertion order.
    pub event_participations: Vec<EventParticipation>,
    /// Manual participation credit records, at most one per call sign.
    #[serde(default)]
    pub manual_participation_counts: Vec<ManualParticipationCount>,
}

impl RecordSet {
    /// Creates an empty record set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            call_signs: Vec::new(),
            event_participations: Vec::new(),
            manual_participation_counts: Vec::new(),
        }
    }

    /// Looks up a call sign by id.
    #[must_use]
    pub fn find_call_sign(&self, id: &CallSignId) -> Option<&CallSign> {
        self.call_signs.iter().find(|cs| &cs.id == id)
    }

    /// Looks up a participation report by id.
    #[must_use]
    pub fn find_participation(&self, id: &ParticipationId) -> Option<&EventParticipation> {
        self.event_participations.iter().find(|p| &p.id == id)
    }

    /// Looks up the manual count record for a call sign, if one exists.
    #[must_use]
    pub fn find_manual_count(&self, call_sign_id: &CallSignId) -> Option<&ManualParticipationCount> {
        self.manual_participation_counts
            .iter()
            .find(|mc| &mc.call_sign_id == call_sign_id)
    }
}

/// Details of a processed approval, returned to the caller so it can
/// run celebration side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    /// The approved report.
    pub participation: EventParticipation,
    /// The owning call sign.
    pub call_sign: CallSign,
    /// The effective participation count before the approval.
    pub previous_count: u32,
    /// The effective participation count after the approval.
    pub new_count: u32,
    /// The milestone crossed by this approval, if any.
    pub milestone: Option<u32>,
}

/// What a successful transition did, carried alongside the new record
/// set so the caller can persist the matching rows and fire
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A call sign was created.
    CallSignCreated {
        /// The new record.
        call_sign: CallSign,
    },
    /// A call sign's code or active flag changed.
    CallSignUpdated {
        /// The record after the update.
        call_sign: CallSign,
    },
    /// A call sign and its dependent records were removed.
    CallSignDeleted {
        /// The deleted record's id.
        id: CallSignId,
        /// How many participation reports were cascaded away.
        removed_participations: usize,
        /// Whether a manual count record was cascaded away.
        removed_manual_count: bool,
    },
    /// A pilot submitted a new pending report.
    ParticipationSubmitted {
        /// The new pending report.
        participation: EventParticipation,
        /// The owning call sign (for the submission notification).
        call_sign: CallSign,
    },
    /// Staff approved a pending report.
    ParticipationApproved(ApprovalOutcome),
    /// Staff rejected (deleted) a report.
    ParticipationRejected {
        /// The deleted report's id.
        id: ParticipationId,
    },
    /// Staff edited a report's fields.
    ParticipationEdited {
        /// The report after the edit.
        participation: EventParticipation,
    },
    /// A manual participation count was created or adjusted.
    ManualCountSet {
        /// The record after the upsert.
        manual_count: ManualParticipationCount,
        /// Whether this created the record (first adjustment).
        created: bool,
    },
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The record set after the transition.
    pub new_records: RecordSet,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}
