// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record id generation.
//!
//! Ids are generated at the API boundary so the core transition
//! function stays pure and deterministic. They are opaque strings;
//! nothing downstream parses them.

use std::time::{SystemTime, UNIX_EPOCH};

/// Generates a new opaque record id with the given prefix.
///
/// Combines a nanosecond timestamp with a random component so ids are
/// unique without coordination.
#[must_use]
pub fn generate_record_id(prefix: &str) -> String {
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_nanos();
    format!("{prefix}_{timestamp:x}{:016x}", rand::random::<u64>())
}
