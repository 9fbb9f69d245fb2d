// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use asx_events::CoreError;
use asx_events_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API error taxonomy.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err {
        DomainError::InvalidCallSignCode(message) => ApiError::InvalidInput {
            field: String::from("code"),
            message: message.clone(),
        },
        DomainError::InvalidAirportCode(message) => ApiError::InvalidInput {
            field: String::from("airport"),
            message: message.clone(),
        },
        DomainError::InvalidEventDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}' is not a valid date: {error}"),
        },
        DomainError::DuplicateCallSignCode(code) => ApiError::DomainRuleViolation {
            rule: String::from("unique_call_sign_code"),
            message: format!("Call sign code '{code}' already exists"),
        },
    }
}

/// Translates a core error into the API error taxonomy.
#[must_use]
pub fn translate_core_error(err: &CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CallSignNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Call sign"),
            message: format!("No call sign with id '{id}'"),
        },
        CoreError::ParticipationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Participation"),
            message: format!("No participation with id '{id}'"),
        },
    }
}
