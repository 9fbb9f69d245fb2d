// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use asx_events_domain::{
    AirportCode, CallSignCode, CallSignId, EventDate, ManualCountId, ParticipationId,
};
use time::OffsetDateTime;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request record changes. Ids and
/// timestamps are supplied by the caller so that [`crate::apply`]
/// stays pure and deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new call sign (staff).
    CreateCallSign {
        /// The pre-generated record id.
        id: CallSignId,
        /// The call sign code.
        code: CallSignCode,
    },
    /// Update a call sign's code and active flag (staff).
    UpdateCallSign {
        /// The record to update.
        id: CallSignId,
        /// The new code.
        code: CallSignCode,
        /// The new active flag.
        is_active: bool,
    },
    /// Delete a call sign, cascading to its participations and manual
    /// count record (staff).
    DeleteCallSign {
        /// The record to delete.
        id: CallSignId,
    },
    /// Submit a new participation report (pilot). Always pending.
    SubmitParticipation {
        /// The pre-generated record id.
        id: ParticipationId,
        /// The owning call sign.
        call_sign_id: CallSignId,
        /// The event date.
        date: EventDate,
        /// The departure airport code.
        departure_airport: AirportCode,
        /// The arrival airport code.
        arrival_airport: AirportCode,
        /// The submission timestamp.
        submitted_at: OffsetDateTime,
    },
    /// Approve a pending report (staff).
    ApproveParticipation {
        /// The report to approve.
        id: ParticipationId,
        /// The approval timestamp (stamped only on false→true).
        approved_at: OffsetDateTime,
    },
    /// Reject a report by deleting it outright (staff). No rejected
    /// state is retained.
    RejectParticipation {
        /// The report to delete.
        id: ParticipationId,
    },
    /// Overwrite a report's fields, including forcing the approval
    /// flag in either direction (staff).
    EditParticipation {
        /// The report to edit.
        id: ParticipationId,
        /// The new owning call sign.
        call_sign_id: CallSignId,
        /// The new event date.
        date: EventDate,
        /// The new departure airport code.
        departure_airport: AirportCode,
        /// The new arrival airport code.
        arrival_airport: AirportCode,
        /// The forced approval flag.
        is_approved: bool,
        /// The edit timestamp (used when this edit first approves).
        edited_at: OffsetDateTime,
    },
    /// Create or adjust the manual participation count for a call
    /// sign (staff).
    SetManualCount {
        /// The record id to use if this is the first adjustment.
        id: ManualCountId,
        /// The owning call sign.
        call_sign_id: CallSignId,
        /// The new credit count.
        count: u32,
        /// The adjustment timestamp.
        updated_at: OffsetDateTime,
    },
}
