// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CallSign, CallSignCode, CallSignId};

/// Validates that a call sign code is unique across the fleet.
///
/// Codes are normalized at construction, so comparison is exact.
/// When `exclude` is set the named record is skipped, allowing a staff
/// edit to keep a call sign's existing code.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `code` - The code to validate
/// * `existing` - The current call sign collection
/// * `exclude` - A record id to skip (the record being edited)
///
/// # Errors
///
/// Returns `DomainError::DuplicateCallSignCode` if another call sign
/// already carries the code.
pub fn validate_call_sign_code_unique(
    code: &CallSignCode,
    existing: &[CallSign],
    exclude: Option<&CallSignId>,
) -> Result<(), DomainError> {
    let duplicate: bool = existing
        .iter()
        .filter(|cs| exclude.is_none_or(|id| &cs.id != id))
        .any(|cs| &cs.code == code);

    if duplicate {
        return Err(DomainError::DuplicateCallSignCode(
            code.value().to_owned(),
        ));
    }

    Ok(())
}
