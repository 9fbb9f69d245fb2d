// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshot export and import.
//!
//! Snapshots are the interchange format for backups and for seeding a
//! fresh database from an existing deployment. The document is a plain
//! serialization of [`RecordSet`], so a snapshot written without any
//! manual counts (an older deployment) still imports cleanly.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::PersistenceError;
use asx_events::RecordSet;

/// Serializes a record set to pretty-printed JSON.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if encoding fails.
pub fn to_snapshot_json(records: &RecordSet) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a record set from snapshot JSON.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if the document does
/// not decode as a record set.
pub fn from_snapshot_json(json: &str) -> Result<RecordSet, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}

/// Writes a snapshot of `records` to `path`.
///
/// # Errors
///
/// Returns an error if encoding or the filesystem write fails.
pub fn export_snapshot(records: &RecordSet, path: &Path) -> Result<(), PersistenceError> {
    let json: String = to_snapshot_json(records)?;
    fs::write(path, &json).map_err(|e| {
        PersistenceError::SerializationError(format!(
            "Failed to write snapshot to {}: {e}",
            path.display()
        ))
    })?;
    info!(path = %path.display(), "Exported record snapshot");
    Ok(())
}

/// Reads a snapshot from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn read_snapshot(path: &Path) -> Result<RecordSet, PersistenceError> {
    let json: String = fs::read_to_string(path).map_err(|e| {
        PersistenceError::SerializationError(format!(
            "Failed to read snapshot from {}: {e}",
            path.display()
        ))
    })?;
    from_snapshot_json(&json)
}
