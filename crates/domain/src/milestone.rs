// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Milestone detection over effective participation counts.

/// Celebration thresholds, in ascending order.
pub const MILESTONE_THRESHOLDS: [u32; 6] = [10, 20, 40, 60, 80, 100];

/// Returns the first threshold crossed when a call sign's effective
/// participation count moves from `previous_count` to `new_count`.
///
/// Thresholds are scanned in ascending order and only the first match
/// is reported. Approval moves the count by exactly one, so at most
/// one threshold can be crossed per approval; a manual-count jump may
/// span several thresholds, and the later ones are deliberately never
/// announced (single-notification policy).
///
/// # Arguments
///
/// * `previous_count` - The effective count before the change
/// * `new_count` - The effective count after the change
#[must_use]
pub fn detect_milestone(previous_count: u32, new_count: u32) -> Option<u32> {
    MILESTONE_THRESHOLDS
        .into_iter()
        .find(|&threshold| previous_count < threshold && threshold <= new_count)
}
