// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record load queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::error::PersistenceError;
use crate::rows::{CallSignRow, ManualCountRow, ParticipationRow};
use crate::schema::{call_signs, event_participations, manual_participation_counts};
use asx_events::RecordSet;
use asx_events_domain::{CallSign, EventParticipation, ManualParticipationCount};

/// Insertion-order sort key. Rowid is raw SQL (justified - Diesel
/// declares no rowid column), and insertion order is load-bearing: it
/// is the leaderboard's tie-break.
fn rowid() -> diesel::expression::SqlLiteral<diesel::sql_types::BigInt> {
    diesel::dsl::sql::<diesel::sql_types::BigInt>("rowid")
}

/// Loads the full record set, each collection in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if a query fails or a stored row cannot be mapped
/// back to a domain record.
pub fn load_records(conn: &mut SqliteConnection) -> Result<RecordSet, PersistenceError> {
    let call_sign_rows: Vec<CallSignRow> = call_signs::table
        .select(CallSignRow::as_select())
        .order(rowid())
        .load(conn)?;
    let participation_rows: Vec<ParticipationRow> = event_participations::table
        .select(ParticipationRow::as_select())
        .order(rowid())
        .load(conn)?;
    let manual_count_rows: Vec<ManualCountRow> = manual_participation_counts::table
        .select(ManualCountRow::as_select())
        .order(rowid())
        .load(conn)?;

    let call_signs: Vec<CallSign> = call_sign_rows
        .into_iter()
        .map(CallSignRow::into_domain)
        .collect::<Result<_, _>>()?;
    let event_participations: Vec<EventParticipation> = participation_rows
        .into_iter()
        .map(ParticipationRow::into_domain)
        .collect::<Result<_, _>>()?;
    let manual_participation_counts: Vec<ManualParticipationCount> = manual_count_rows
        .into_iter()
        .map(ManualCountRow::into_domain)
        .collect::<Result<_, _>>()?;

    Ok(RecordSet {
        call_signs,
        event_participations,
        manual_participation_counts,
    })
}
