// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their conversions to and from domain
//! records.
//!
//! Stored rows are re-validated on the way out: a row that no longer
//! maps to a valid domain record surfaces as a
//! [`PersistenceError::ReconstructionError`] rather than a panic.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;
use crate::schema::{call_signs, event_participations, manual_participation_counts};
use asx_events_domain::{
    AirportCode, CallSign, CallSignCode, CallSignId, EventDate, EventParticipation, ManualCountId,
    ManualParticipationCount, ParticipationId,
};

fn parse_timestamp(value: &str, field: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!("invalid {field} timestamp '{value}': {e}"))
    })
}

pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value.format(&Rfc3339).map_err(|e| {
        PersistenceError::SerializationError(format!("failed to format timestamp: {e}"))
    })
}

/// Row shape for the `call_signs` table.
#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = call_signs)]
pub struct CallSignRow {
    pub call_sign_id: String,
    pub code: String,
    pub is_active: i32,
}

impl CallSignRow {
    pub fn from_domain(call_sign: &CallSign) -> Self {
        Self {
            call_sign_id: call_sign.id.value().to_owned(),
            code: call_sign.code.value().to_owned(),
            is_active: i32::from(call_sign.is_active),
        }
    }

    pub fn into_domain(self) -> Result<CallSign, PersistenceError> {
        let code: CallSignCode = CallSignCode::new(&self.code)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
        Ok(CallSign {
            id: CallSignId::new(&self.call_sign_id),
            code,
            is_active: self.is_active != 0,
        })
    }
}

/// Row shape for the `event_participations` table.
#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = event_participations)]
pub struct ParticipationRow {
    pub participation_id: String,
    pub call_sign_id: String,
    pub event_date: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub is_approved: i32,
    pub submitted_at: String,
    pub approved_at: Option<String>,
}

impl ParticipationRow {
    pub fn from_domain(
        participation: &EventParticipation,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            participation_id: participation.id.value().to_owned(),
            call_sign_id: participation.call_sign_id.value().to_owned(),
            event_date: participation.date.value().to_owned(),
            departure_airport: participation.departure_airport.value().to_owned(),
            arrival_airport: participation.arrival_airport.value().to_owned(),
            is_approved: i32::from(participation.is_approved),
            submitted_at: format_timestamp(participation.submitted_at)?,
            approved_at: participation
                .approved_at
                .map(format_timestamp)
                .transpose()?,
        })
    }

    pub fn into_domain(self) -> Result<EventParticipation, PersistenceError> {
        let map_domain =
            |e: asx_events_domain::DomainError| PersistenceError::ReconstructionError(e.to_string());

        Ok(EventParticipation {
            id: ParticipationId::new(&self.participation_id),
            call_sign_id: CallSignId::new(&self.call_sign_id),
            date: EventDate::parse(&self.event_date).map_err(map_domain)?,
            departure_airport: AirportCode::new(&self.departure_airport).map_err(map_domain)?,
            arrival_airport: AirportCode::new(&self.arrival_airport).map_err(map_domain)?,
            is_approved: self.is_approved != 0,
            submitted_at: parse_timestamp(&self.submitted_at, "submitted_at")?,
            approved_at: self
                .approved_at
                .as_deref()
                .map(|v| parse_timestamp(v, "approved_at"))
                .transpose()?,
        })
    }
}

/// Row shape for the `manual_participation_counts` table.
#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = manual_participation_counts)]
pub struct ManualCountRow {
    pub manual_count_id: String,
    pub call_sign_id: String,
    pub count: i32,
    pub updated_at: String,
}

impl ManualCountRow {
    pub fn from_domain(
        manual_count: &ManualParticipationCount,
    ) -> Result<Self, PersistenceError> {
        let count: i32 = manual_count.count.try_into().map_err(|_| {
            PersistenceError::SerializationError(format!(
                "manual count {} exceeds storage range",
                manual_count.count
            ))
        })?;
        Ok(Self {
            manual_count_id: manual_count.id.value().to_owned(),
            call_sign_id: manual_count.call_sign_id.value().to_owned(),
            count,
            updated_at: format_timestamp(manual_count.updated_at)?,
        })
    }

    pub fn into_domain(self) -> Result<ManualParticipationCount, PersistenceError> {
        let count: u32 = self.count.try_into().map_err(|_| {
            PersistenceError::ReconstructionError(format!(
                "negative manual count {} for call sign {}",
                self.count, self.call_sign_id
            ))
        })?;
        Ok(ManualParticipationCount {
            id: ManualCountId::new(&self.manual_count_id),
            call_sign_id: CallSignId::new(&self.call_sign_id),
            count,
            updated_at: parse_timestamp(&self.updated_at, "updated_at")?,
        })
    }
}
