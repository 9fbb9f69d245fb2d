// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// Opaque identifier for a call sign record.
///
/// Ids are assigned at the API boundary and treated as stable, opaque
/// strings everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallSignId {
    value: String,
}

impl CallSignId {
    /// Creates a new `CallSignId` from an opaque string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier for an event participation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipationId {
    value: String,
}

impl ParticipationId {
    /// Creates a new `ParticipationId` from an opaque string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier for a manual participation count record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualCountId {
    value: String,
}

impl ManualCountId {
    /// Creates a new `ManualCountId` from an opaque string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A pilot's call sign code (e.g., "VA001").
///
/// Codes are normalized to uppercase and must be 3 to 8 ASCII
/// alphanumeric characters. Codes are unique across the fleet; the
/// uniqueness rule itself lives in `validation` since it needs the
/// existing collection as context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallSignCode {
    value: String,
}

impl CallSignCode {
    /// Creates a new `CallSignCode`, normalizing to uppercase.
    ///
    /// # Arguments
    ///
    /// * `value` - The code (will be normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCallSignCode` if the code is not
    /// 3 to 8 ASCII alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_uppercase();
        if !(3..=8).contains(&normalized.len()) {
            return Err(DomainError::InvalidCallSignCode(String::from(
                "Call sign code must be 3 to 8 characters",
            )));
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidCallSignCode(String::from(
                "Call sign code must contain only letters and digits",
            )));
        }
        Ok(Self { value: normalized })
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CallSignCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An ICAO or IATA airport code (e.g., "KJFK", "LAX").
///
/// Normalized to uppercase; 3 or 4 ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode {
    value: String,
}

impl AirportCode {
    /// Creates a new `AirportCode`, normalizing to uppercase.
    ///
    /// # Arguments
    ///
    /// * `value` - The airport code (will be normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAirportCode` if the code is not
    /// 3 or 4 ASCII alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_uppercase();
        if !(3..=4).contains(&normalized.len()) {
            return Err(DomainError::InvalidAirportCode(String::from(
                "Airport code must be 3 or 4 characters",
            )));
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidAirportCode(String::from(
                "Airport code must contain only letters and digits",
            )));
        }
        Ok(Self { value: normalized })
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A calendar date in `YYYY-MM-DD` form.
///
/// The value is kept as the validated string since that is the wire
/// and storage representation throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDate {
    value: String,
}

impl EventDate {
    /// Parses an `EventDate` from a `YYYY-MM-DD` string.
    ///
    /// # Arguments
    ///
    /// * `value` - The date string
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEventDate` if the string is not a
    /// valid calendar date in `YYYY-MM-DD` form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let format = format_description!("[year]-[month]-[day]");
        time::Date::parse(value, &format).map_err(|e| DomainError::InvalidEventDate {
            date_string: value.to_owned(),
            error: e.to_string(),
        })?;
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns the date string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A pilot's call sign record.
///
/// Created and mutated by staff. Deleting a call sign cascades to its
/// participations and manual count record; the cascade is sequenced by
/// the workflow layer, not the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSign {
    /// The opaque record id.
    pub id: CallSignId,
    /// The call sign code (unique across the fleet).
    pub code: CallSignCode,
    /// Whether this call sign appears in active listings and the
    /// leaderboard.
    pub is_active: bool,
}

impl CallSign {
    /// Creates a new active call sign.
    #[must_use]
    pub const fn new(id: CallSignId, code: CallSignCode) -> Self {
        Self {
            id,
            code,
            is_active: true,
        }
    }
}

/// A single event participation report.
///
/// Submitted by a pilot as pending; approved or deleted by staff.
/// `approved_at` records the *first* approval and is retained if the
/// record is later demoted back to pending by an administrative edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipation {
    /// The opaque record id.
    pub id: ParticipationId,
    /// The owning call sign.
    pub call_sign_id: CallSignId,
    /// The event date.
    pub date: EventDate,
    /// The departure airport code.
    pub departure_airport: AirportCode,
    /// The arrival airport code.
    pub arrival_airport: AirportCode,
    /// Whether staff have approved this report.
    pub is_approved: bool,
    /// When the pilot submitted the report.
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    /// When the report was first approved, if ever.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub approved_at: Option<OffsetDateTime>,
}

impl EventParticipation {
    /// Creates a new pending participation report.
    ///
    /// # Arguments
    ///
    /// * `id` - The opaque record id
    /// * `call_sign_id` - The owning call sign
    /// * `date` - The event date
    /// * `departure_airport` - The departure airport code
    /// * `arrival_airport` - The arrival airport code
    /// * `submitted_at` - The submission timestamp
    #[must_use]
    pub const fn new_pending(
        id: ParticipationId,
        call_sign_id: CallSignId,
        date: EventDate,
        departure_airport: AirportCode,
        arrival_airport: AirportCode,
        submitted_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            call_sign_id,
            date,
            departure_airport,
            arrival_airport,
            is_approved: false,
            submitted_at,
            approved_at: None,
        }
    }

    /// Marks this report approved.
    ///
    /// `approved_at` is stamped only if the report has never been
    /// approved before; re-approving leaves the original timestamp in
    /// place.
    pub const fn approve(&mut self, at: OffsetDateTime) {
        self.is_approved = true;
        if self.approved_at.is_none() {
            self.approved_at = Some(at);
        }
    }

    /// Forces the approval flag to an arbitrary value (staff edit).
    ///
    /// A false→true transition stamps `approved_at` as in [`Self::approve`].
    /// A true→false demotion retains the existing `approved_at`: the
    /// field means "first ever approved at", and demotion does not
    /// rewrite history.
    pub const fn set_approval(&mut self, is_approved: bool, at: OffsetDateTime) {
        if is_approved {
            self.approve(at);
        } else {
            self.is_approved = false;
        }
    }
}

/// Out-of-band participation credit for a call sign.
///
/// At most one live record exists per call sign; adjustments update
/// the record in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualParticipationCount {
    /// The opaque record id.
    pub id: ManualCountId,
    /// The owning call sign.
    pub call_sign_id: CallSignId,
    /// The credit count.
    pub count: u32,
    /// When the count was last adjusted.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ManualParticipationCount {
    /// Creates a new manual count record.
    #[must_use]
    pub const fn new(
        id: ManualCountId,
        call_sign_id: CallSignId,
        count: u32,
        updated_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            call_sign_id,
            count,
            updated_at,
        }
    }
}
