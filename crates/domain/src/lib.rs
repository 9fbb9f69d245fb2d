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
    clippy::all
)]

mod error;
mod milestone;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use milestone::{MILESTONE_THRESHOLDS, detect_milestone};
pub use types::{
    AirportCode, CallSign, CallSignCode, CallSignId, EventDate, EventParticipation, ManualCountId,
    ManualParticipationCount, ParticipationId,
};
pub use validation::validate_call_sign_code_unique;
