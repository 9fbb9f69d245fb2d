// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the ASX Event Tracker.
//!
//! This crate stores the canonical record rows (call signs, event
//! participations, manual participation counts) in `SQLite` via Diesel.
//! The write model is intentionally simple: the server holds a single
//! writer, every mutation is a row-level write, and the full record set
//! is loaded into memory at startup and mirrored after each transition.
//!
//! `SQLite` is the only backend. In-memory databases (named, shared
//! cache) back the unit tests; deployments use a file-backed database
//! with WAL mode enabled.
//!
//! JSON snapshots (see [`snapshot`]) provide backup/restore and
//! seeding from an existing deployment.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;

use asx_events::RecordSet;
use asx_events_domain::{
    CallSign, CallSignId, EventParticipation, ManualParticipationCount, ParticipationId,
};

mod error;
mod mutations;
mod queries;
mod rows;
mod schema;
pub mod snapshot;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so
/// tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the canonical record tables.
pub struct RecordStore {
    conn: SqliteConnection,
}

impl RecordStore {
    /// Creates a record store backed by an in-memory `SQLite` database.
    ///
    /// Uses a named shared-cache in-memory database so the connection
    /// survives for the lifetime of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_records_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a record store backed by a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads the full record set from the database.
    ///
    /// Rows are returned in insertion order, which is the order the
    /// aggregation layer relies on for stable leaderboard ties.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be read or reconstructed.
    pub fn load_records(&mut self) -> Result<RecordSet, PersistenceError> {
        queries::load_records(&mut self.conn)
    }

    /// Inserts a new call sign row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including a duplicate
    /// code, which surfaces as a unique-constraint violation).
    pub fn insert_call_sign(&mut self, call_sign: &CallSign) -> Result<(), PersistenceError> {
        mutations::insert_call_sign(&mut self.conn, call_sign)
    }

    /// Rewrites an existing call sign row.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no row matches.
    pub fn update_call_sign(&mut self, call_sign: &CallSign) -> Result<(), PersistenceError> {
        mutations::update_call_sign(&mut self.conn, call_sign)
    }

    /// Deletes a call sign and all rows that reference it.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the call sign does not
    /// exist.
    pub fn delete_call_sign(&mut self, id: &CallSignId) -> Result<(), PersistenceError> {
        mutations::delete_call_sign(&mut self.conn, id)
    }

    /// Inserts a new participation row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_participation(
        &mut self,
        participation: &EventParticipation,
    ) -> Result<(), PersistenceError> {
        mutations::insert_participation(&mut self.conn, participation)
    }

    /// Rewrites an existing participation row.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no row matches.
    pub fn update_participation(
        &mut self,
        participation: &EventParticipation,
    ) -> Result<(), PersistenceError> {
        mutations::update_participation(&mut self.conn, participation)
    }

    /// Deletes a participation row.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no row matches.
    pub fn delete_participation(&mut self, id: &ParticipationId) -> Result<(), PersistenceError> {
        mutations::delete_participation(&mut self.conn, id)
    }

    /// Creates or overwrites the manual count row for a call sign.
    ///
    /// # Errors
    ///
    /// Returns an error if the upsert fails.
    pub fn upsert_manual_count(
        &mut self,
        manual_count: &ManualParticipationCount,
    ) -> Result<(), PersistenceError> {
        mutations::upsert_manual_count(&mut self.conn, manual_count)
    }

    /// Replaces the entire stored record set with `records`.
    ///
    /// Used by snapshot import.
    ///
    /// # Errors
    ///
    /// Returns an error if any delete or insert fails.
    pub fn replace_all(&mut self, records: &RecordSet) -> Result<(), PersistenceError> {
        mutations::replace_all(&mut self.conn, records)
    }
}
