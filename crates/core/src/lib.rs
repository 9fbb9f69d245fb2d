// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod aggregate;
mod apply;
mod command;
mod error;
mod records;

#[cfg(test)]
mod tests;

pub use aggregate::{
    LeaderboardEntry, active_call_signs, approved_participations, leaderboard,
    participation_count, pending_participations,
};
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use records::RecordSet;
pub use records::{ApprovalOutcome, TransitionOutcome, TransitionResult};
