// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Wire field names are camelCase to match the record snapshot format.
//! Timestamps cross the boundary as RFC 3339 strings.

use serde::{Deserialize, Serialize};

use asx_events::LeaderboardEntry;
use asx_events_domain::{CallSign, EventParticipation, ManualParticipationCount};

/// Wire view of a call sign record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSignInfo {
    /// The record id.
    pub id: String,
    /// The call sign code.
    pub code: String,
    /// Whether the call sign is active.
    pub is_active: bool,
}

impl CallSignInfo {
    /// Builds the wire view from a domain record.
    #[must_use]
    pub fn from_domain(call_sign: &CallSign) -> Self {
        Self {
            id: call_sign.id.value().to_owned(),
            code: call_sign.code.value().to_owned(),
            is_active: call_sign.is_active,
        }
    }
}

/// Wire view of a participation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationInfo {
    /// The record id.
    pub id: String,
    /// The owning call sign's id.
    pub call_sign_id: String,
    /// The event date (`YYYY-MM-DD`).
    pub date: String,
    /// The departure airport code.
    pub departure_airport: String,
    /// The arrival airport code.
    pub arrival_airport: String,
    /// Whether the report has been approved.
    pub is_approved: bool,
    /// The submission timestamp (RFC 3339).
    pub submitted_at: String,
    /// The first-approval timestamp (RFC 3339), if ever approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}

impl ParticipationInfo {
    /// Builds the wire view from a domain record.
    ///
    /// Timestamp formatting is infallible for the timestamps this
    /// system produces; a formatting failure falls back to the Display
    /// rendering rather than dropping the field.
    #[must_use]
    pub fn from_domain(participation: &EventParticipation) -> Self {
        Self {
            id: participation.id.value().to_owned(),
            call_sign_id: participation.call_sign_id.value().to_owned(),
            date: participation.date.value().to_owned(),
            departure_airport: participation.departure_airport.value().to_owned(),
            arrival_airport: participation.arrival_airport.value().to_owned(),
            is_approved: participation.is_approved,
            submitted_at: format_rfc3339(participation.submitted_at),
            approved_at: participation.approved_at.map(format_rfc3339),
        }
    }
}

/// Wire view of a manual participation count record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualCountInfo {
    /// The record id.
    pub id: String,
    /// The owning call sign's id.
    pub call_sign_id: String,
    /// The credit count.
    pub count: u32,
    /// The last adjustment timestamp (RFC 3339).
    pub updated_at: String,
}

impl ManualCountInfo {
    /// Builds the wire view from a domain record.
    #[must_use]
    pub fn from_domain(manual_count: &ManualParticipationCount) -> Self {
        Self {
            id: manual_count.id.value().to_owned(),
            call_sign_id: manual_count.call_sign_id.value().to_owned(),
            count: manual_count.count,
            updated_at: format_rfc3339(manual_count.updated_at),
        }
    }
}

fn format_rfc3339(timestamp: time::OffsetDateTime) -> String {
    timestamp
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// API request to create a new call sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallSignRequest {
    /// The call sign code (3-8 alphanumeric characters).
    pub code: String,
}

/// API response for a successful call sign creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallSignResponse {
    /// The created record.
    pub call_sign: CallSignInfo,
    /// A success message.
    pub message: String,
}

/// API request to update a call sign's code and active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCallSignRequest {
    /// The record to update.
    pub id: String,
    /// The new code.
    pub code: String,
    /// The new active flag.
    pub is_active: bool,
}

/// API response for a successful call sign update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCallSignResponse {
    /// The record after the update.
    pub call_sign: CallSignInfo,
    /// A success message.
    pub message: String,
}

/// API request to delete a call sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCallSignRequest {
    /// The record to delete.
    pub id: String,
}

/// API response for a successful call sign deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCallSignResponse {
    /// The deleted record's id.
    pub id: String,
    /// How many participation reports were removed with it.
    pub removed_participations: usize,
    /// Whether a manual count record was removed with it.
    pub removed_manual_count: bool,
    /// A success message.
    pub message: String,
}

/// API request to submit a participation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParticipationRequest {
    /// The call sign the report is for.
    pub call_sign_id: String,
    /// The event date (`YYYY-MM-DD`).
    pub date: String,
    /// The departure airport code.
    pub departure_airport: String,
    /// The arrival airport code.
    pub arrival_airport: String,
}

/// API response for a successful participation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParticipationResponse {
    /// The new pending report.
    pub participation: ParticipationInfo,
    /// A success message.
    pub message: String,
}

/// API request to approve a pending report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveParticipationRequest {
    /// The report to approve.
    pub id: String,
}

/// API response for a successful approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveParticipationResponse {
    /// The approved report.
    pub participation: ParticipationInfo,
    /// The effective count before the approval.
    pub previous_count: u32,
    /// The effective count after the approval.
    pub new_count: u32,
    /// The milestone crossed by this approval, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u32>,
    /// A success message.
    pub message: String,
}

/// API request to reject (delete) a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectParticipationRequest {
    /// The report to delete.
    pub id: String,
}

/// API response for a successful rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectParticipationResponse {
    /// The deleted report's id.
    pub id: String,
    /// A success message.
    pub message: String,
}

/// API request to overwrite a report's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditParticipationRequest {
    /// The report to edit.
    pub id: String,
    /// The new owning call sign.
    pub call_sign_id: String,
    /// The new event date (`YYYY-MM-DD`).
    pub date: String,
    /// The new departure airport code.
    pub departure_airport: String,
    /// The new arrival airport code.
    pub arrival_airport: String,
    /// The forced approval flag.
    pub is_approved: bool,
}

/// API response for a successful edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditParticipationResponse {
    /// The report after the edit.
    pub participation: ParticipationInfo,
    /// A success message.
    pub message: String,
}

/// API request to create or adjust a manual participation count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetManualCountRequest {
    /// The call sign the credit applies to.
    pub call_sign_id: String,
    /// The new credit count.
    pub count: u32,
}

/// API response for a successful manual count adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetManualCountResponse {
    /// The record after the upsert.
    pub manual_count: ManualCountInfo,
    /// Whether this created the record (first adjustment).
    pub created: bool,
    /// A success message.
    pub message: String,
}

/// API response listing call signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCallSignsResponse {
    /// The call signs, in insertion order.
    pub call_signs: Vec<CallSignInfo>,
}

/// API response listing participation reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParticipationsResponse {
    /// The reports, in insertion order.
    pub participations: Vec<ParticipationInfo>,
}

/// Per-call-sign participation statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSignStatisticsResponse {
    /// The call sign.
    pub call_sign: CallSignInfo,
    /// The number of approved participation reports.
    pub approved_count: u32,
    /// The manual credit count (0 if no record exists).
    pub manual_count: u32,
    /// The effective count (approved + manual).
    pub effective_count: u32,
}

/// A leaderboard row on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryInfo {
    /// The call sign.
    pub call_sign: CallSignInfo,
    /// The effective participation count.
    pub count: u32,
}

impl LeaderboardEntryInfo {
    /// Builds the wire view from an aggregation entry.
    #[must_use]
    pub fn from_entry(entry: &LeaderboardEntry) -> Self {
        Self {
            call_sign: CallSignInfo::from_domain(&entry.call_sign),
            count: entry.count,
        }
    }
}

/// API response for the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Active call signs, descending by effective count.
    pub entries: Vec<LeaderboardEntryInfo>,
}
