// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Call sign code is malformed.
    InvalidCallSignCode(String),
    /// Airport code is malformed.
    InvalidAirportCode(String),
    /// Event date is not a valid `YYYY-MM-DD` calendar date.
    InvalidEventDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Call sign code already exists in the fleet.
    DuplicateCallSignCode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCallSignCode(msg) => write!(f, "Invalid call sign code: {msg}"),
            Self::InvalidAirportCode(msg) => write!(f, "Invalid airport code: {msg}"),
            Self::InvalidEventDate { date_string, error } => {
                write!(f, "Invalid event date '{date_string}': {error}")
            }
            Self::DuplicateCallSignCode(code) => {
                write!(f, "Call sign code '{code}' already exists")
            }
        }
    }
}

impl std::error::Error for DomainError {}
