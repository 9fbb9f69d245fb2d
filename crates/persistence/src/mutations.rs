// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed row mutations.
//!
//! Every workflow mutation is a single-row write (or a sequenced
//! series of them); there are no cross-row transactions on that path,
//! matching the single-writer, last-write-wins model of the system.
//! Cascade on call-sign delete is caller-sequenced: dependents first,
//! owner last, so a failure part-way never leaves orphans pointing at
//! a missing call sign. Bulk snapshot restore is the exception: it
//! wipes and repopulates every table, so it runs transactionally.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::rows::{CallSignRow, ManualCountRow, ParticipationRow};
use crate::schema::{call_signs, event_participations, manual_participation_counts};
use asx_events::RecordSet;
use asx_events_domain::{
    CallSign, CallSignId, EventParticipation, ManualParticipationCount, ParticipationId,
};

pub fn insert_call_sign(
    conn: &mut SqliteConnection,
    call_sign: &CallSign,
) -> Result<(), PersistenceError> {
    debug!(id = call_sign.id.value(), code = call_sign.code.value(), "Inserting call sign");
    diesel::insert_into(call_signs::table)
        .values(CallSignRow::from_domain(call_sign))
        .execute(conn)?;
    Ok(())
}

pub fn update_call_sign(
    conn: &mut SqliteConnection,
    call_sign: &CallSign,
) -> Result<(), PersistenceError> {
    debug!(id = call_sign.id.value(), "Updating call sign");
    let updated: usize = diesel::update(call_signs::table)
        .filter(call_signs::call_sign_id.eq(call_sign.id.value()))
        .set((
            call_signs::code.eq(call_sign.code.value()),
            call_signs::is_active.eq(i32::from(call_sign.is_active)),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "call sign {}",
            call_sign.id.value()
        )));
    }
    Ok(())
}

/// Deletes a call sign and its dependent rows.
///
/// Sequenced as participations, manual count, then the call sign.
pub fn delete_call_sign(
    conn: &mut SqliteConnection,
    id: &CallSignId,
) -> Result<(), PersistenceError> {
    let removed_participations: usize = diesel::delete(event_participations::table)
        .filter(event_participations::call_sign_id.eq(id.value()))
        .execute(conn)?;
    let removed_counts: usize = diesel::delete(manual_participation_counts::table)
        .filter(manual_participation_counts::call_sign_id.eq(id.value()))
        .execute(conn)?;
    let removed: usize = diesel::delete(call_signs::table)
        .filter(call_signs::call_sign_id.eq(id.value()))
        .execute(conn)?;

    if removed == 0 {
        return Err(PersistenceError::NotFound(format!(
            "call sign {}",
            id.value()
        )));
    }

    info!(
        id = id.value(),
        removed_participations, removed_counts, "Deleted call sign with dependents"
    );
    Ok(())
}

pub fn insert_participation(
    conn: &mut SqliteConnection,
    participation: &EventParticipation,
) -> Result<(), PersistenceError> {
    debug!(id = participation.id.value(), "Inserting participation");
    diesel::insert_into(event_participations::table)
        .values(ParticipationRow::from_domain(participation)?)
        .execute(conn)?;
    Ok(())
}

pub fn update_participation(
    conn: &mut SqliteConnection,
    participation: &EventParticipation,
) -> Result<(), PersistenceError> {
    debug!(id = participation.id.value(), "Updating participation");
    let row: ParticipationRow = ParticipationRow::from_domain(participation)?;
    let updated: usize = diesel::update(event_participations::table)
        .filter(event_participations::participation_id.eq(participation.id.value()))
        .set((
            event_participations::call_sign_id.eq(row.call_sign_id),
            event_participations::event_date.eq(row.event_date),
            event_participations::departure_airport.eq(row.departure_airport),
            event_participations::arrival_airport.eq(row.arrival_airport),
            event_participations::is_approved.eq(row.is_approved),
            event_participations::submitted_at.eq(row.submitted_at),
            event_participations::approved_at.eq(row.approved_at),
        ))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "participation {}",
            participation.id.value()
        )));
    }
    Ok(())
}

pub fn delete_participation(
    conn: &mut SqliteConnection,
    id: &ParticipationId,
) -> Result<(), PersistenceError> {
    let removed: usize = diesel::delete(event_participations::table)
        .filter(event_participations::participation_id.eq(id.value()))
        .execute(conn)?;
    if removed == 0 {
        return Err(PersistenceError::NotFound(format!(
            "participation {}",
            id.value()
        )));
    }
    Ok(())
}

/// Creates or adjusts the manual count row for a call sign.
///
/// The `call_sign_id` unique constraint drives the upsert; an existing
/// row keeps its original id.
pub fn upsert_manual_count(
    conn: &mut SqliteConnection,
    manual_count: &ManualParticipationCount,
) -> Result<(), PersistenceError> {
    let row: ManualCountRow = ManualCountRow::from_domain(manual_count)?;
    diesel::insert_into(manual_participation_counts::table)
        .values(&row)
        .on_conflict(manual_participation_counts::call_sign_id)
        .do_update()
        .set((
            manual_participation_counts::count.eq(row.count),
            manual_participation_counts::updated_at.eq(row.updated_at.clone()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Replaces the entire stored record set (snapshot import).
///
/// Runs in a single transaction: a snapshot that fails part-way (for
/// example a participation referencing a missing call sign) rolls back
/// and the previously stored records survive untouched. Dependent
/// tables are cleared first and repopulated last so foreign keys hold
/// at every step.
pub fn replace_all(conn: &mut SqliteConnection, records: &RecordSet) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        diesel::delete(manual_participation_counts::table).execute(conn)?;
        diesel::delete(event_participations::table).execute(conn)?;
        diesel::delete(call_signs::table).execute(conn)?;

        for call_sign in &records.call_signs {
            insert_call_sign(conn, call_sign)?;
        }
        for participation in &records.event_participations {
            insert_participation(conn, participation)?;
        }
        for manual_count in &records.manual_participation_counts {
            upsert_manual_count(conn, manual_count)?;
        }

        Ok(())
    })?;

    info!(
        call_signs = records.call_signs.len(),
        participations = records.event_participations.len(),
        manual_counts = records.manual_participation_counts.len(),
        "Imported record snapshot"
    );
    Ok(())
}
