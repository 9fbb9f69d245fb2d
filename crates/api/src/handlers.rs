// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate requests into core commands, apply them against
//! the current record set, and translate errors into the API taxonomy.
//! They never touch persistence; the server layer persists the rows
//! named by the returned outcome and then adopts the new record set.

use time::OffsetDateTime;
use tracing::{debug, info};

use asx_events::{
    Command, RecordSet, TransitionOutcome, apply, approved_participations, leaderboard,
    pending_participations,
};
use asx_events_domain::{
    AirportCode, CallSignCode, CallSignId, EventDate, ManualCountId, ParticipationId,
};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::id::generate_record_id;
use crate::request_response::{
    ApproveParticipationRequest, ApproveParticipationResponse, CallSignInfo,
    CallSignStatisticsResponse, CreateCallSignRequest, CreateCallSignResponse,
    DeleteCallSignRequest, DeleteCallSignResponse, EditParticipationRequest,
    EditParticipationResponse, LeaderboardEntryInfo, LeaderboardResponse, ListCallSignsResponse,
    ListParticipationsResponse, ManualCountInfo, ParticipationInfo, RejectParticipationRequest,
    RejectParticipationResponse, SetManualCountRequest, SetManualCountResponse,
    SubmitParticipationRequest, SubmitParticipationResponse, UpdateCallSignRequest,
    UpdateCallSignResponse,
};

/// The result of a state-changing API operation.
///
/// Carries the response alongside the new record set and the outcome
/// so the server layer can persist exactly the rows that changed and
/// fire the matching notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The record set after the operation.
    pub new_records: RecordSet,
    /// What the operation did.
    pub outcome: TransitionOutcome,
}

/// Creates a new call sign.
///
/// # Errors
///
/// Returns an error if the code is malformed or already in use.
pub fn create_call_sign(
    records: &RecordSet,
    request: &CreateCallSignRequest,
) -> Result<ApiResult<CreateCallSignResponse>, ApiError> {
    let code = CallSignCode::new(&request.code).map_err(|e| translate_domain_error(&e))?;
    let id = CallSignId::new(&generate_record_id("cs"));

    let result = apply(records, Command::CreateCallSign { id, code })
        .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::CallSignCreated { call_sign } = &result.outcome else {
        return Err(unexpected_outcome("create_call_sign"));
    };

    info!(id = call_sign.id.value(), code = call_sign.code.value(), "Call sign created");
    let response = CreateCallSignResponse {
        call_sign: CallSignInfo::from_domain(call_sign),
        message: format!("Call sign '{}' created", call_sign.code.value()),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Updates a call sign's code and active flag.
///
/// # Errors
///
/// Returns an error if the call sign does not exist, the new code is
/// malformed, or the new code collides with another call sign.
pub fn update_call_sign(
    records: &RecordSet,
    request: &UpdateCallSignRequest,
) -> Result<ApiResult<UpdateCallSignResponse>, ApiError> {
    let code = CallSignCode::new(&request.code).map_err(|e| translate_domain_error(&e))?;

    let result = apply(
        records,
        Command::UpdateCallSign {
            id: CallSignId::new(&request.id),
            code,
            is_active: request.is_active,
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::CallSignUpdated { call_sign } = &result.outcome else {
        return Err(unexpected_outcome("update_call_sign"));
    };

    info!(id = call_sign.id.value(), "Call sign updated");
    let response = UpdateCallSignResponse {
        call_sign: CallSignInfo::from_domain(call_sign),
        message: format!("Call sign '{}' updated", call_sign.code.value()),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Deletes a call sign, cascading to its reports and manual count.
///
/// # Errors
///
/// Returns an error if the call sign does not exist.
pub fn delete_call_sign(
    records: &RecordSet,
    request: &DeleteCallSignRequest,
) -> Result<ApiResult<DeleteCallSignResponse>, ApiError> {
    let result = apply(
        records,
        Command::DeleteCallSign {
            id: CallSignId::new(&request.id),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::CallSignDeleted {
        id,
        removed_participations,
        removed_manual_count,
    } = &result.outcome
    else {
        return Err(unexpected_outcome("delete_call_sign"));
    };

    info!(
        id = id.value(),
        removed_participations, removed_manual_count, "Call sign deleted"
    );
    let response = DeleteCallSignResponse {
        id: id.value().to_owned(),
        removed_participations: *removed_participations,
        removed_manual_count: *removed_manual_count,
        message: String::from("Call sign deleted"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Submits a new pending participation report.
///
/// # Errors
///
/// Returns an error if a field is malformed or the call sign does not
/// exist.
pub fn submit_participation(
    records: &RecordSet,
    request: &SubmitParticipationRequest,
) -> Result<ApiResult<SubmitParticipationResponse>, ApiError> {
    let date = EventDate::parse(&request.date).map_err(|e| translate_domain_error(&e))?;
    let departure_airport =
        AirportCode::new(&request.departure_airport).map_err(|e| translate_domain_error(&e))?;
    let arrival_airport =
        AirportCode::new(&request.arrival_airport).map_err(|e| translate_domain_error(&e))?;

    let result = apply(
        records,
        Command::SubmitParticipation {
            id: ParticipationId::new(&generate_record_id("part")),
            call_sign_id: CallSignId::new(&request.call_sign_id),
            date,
            departure_airport,
            arrival_airport,
            submitted_at: OffsetDateTime::now_utc(),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::ParticipationSubmitted {
        participation,
        call_sign,
    } = &result.outcome
    else {
        return Err(unexpected_outcome("submit_participation"));
    };

    info!(
        id = participation.id.value(),
        call_sign = call_sign.code.value(),
        "Participation submitted"
    );
    let response = SubmitParticipationResponse {
        participation: ParticipationInfo::from_domain(participation),
        message: String::from("Participation report submitted for approval"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Approves a pending participation report.
///
/// # Errors
///
/// Returns an error if the report does not exist.
pub fn approve_participation(
    records: &RecordSet,
    request: &ApproveParticipationRequest,
) -> Result<ApiResult<ApproveParticipationResponse>, ApiError> {
    let result = apply(
        records,
        Command::ApproveParticipation {
            id: ParticipationId::new(&request.id),
            approved_at: OffsetDateTime::now_utc(),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::ParticipationApproved(approval) = &result.outcome else {
        return Err(unexpected_outcome("approve_participation"));
    };

    info!(
        id = approval.participation.id.value(),
        call_sign = approval.call_sign.code.value(),
        new_count = approval.new_count,
        milestone = approval.milestone,
        "Participation approved"
    );
    let response = ApproveParticipationResponse {
        participation: ParticipationInfo::from_domain(&approval.participation),
        previous_count: approval.previous_count,
        new_count: approval.new_count,
        milestone: approval.milestone,
        message: String::from("Participation approved"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Rejects (deletes) a participation report.
///
/// # Errors
///
/// Returns an error if the report does not exist.
pub fn reject_participation(
    records: &RecordSet,
    request: &RejectParticipationRequest,
) -> Result<ApiResult<RejectParticipationResponse>, ApiError> {
    let result = apply(
        records,
        Command::RejectParticipation {
            id: ParticipationId::new(&request.id),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::ParticipationRejected { id } = &result.outcome else {
        return Err(unexpected_outcome("reject_participation"));
    };

    info!(id = id.value(), "Participation rejected");
    let response = RejectParticipationResponse {
        id: id.value().to_owned(),
        message: String::from("Participation rejected"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Overwrites a participation report's fields.
///
/// # Errors
///
/// Returns an error if a field is malformed, or the report or target
/// call sign does not exist.
pub fn edit_participation(
    records: &RecordSet,
    request: &EditParticipationRequest,
) -> Result<ApiResult<EditParticipationResponse>, ApiError> {
    let date = EventDate::parse(&request.date).map_err(|e| translate_domain_error(&e))?;
    let departure_airport =
        AirportCode::new(&request.departure_airport).map_err(|e| translate_domain_error(&e))?;
    let arrival_airport =
        AirportCode::new(&request.arrival_airport).map_err(|e| translate_domain_error(&e))?;

    let result = apply(
        records,
        Command::EditParticipation {
            id: ParticipationId::new(&request.id),
            call_sign_id: CallSignId::new(&request.call_sign_id),
            date,
            departure_airport,
            arrival_airport,
            is_approved: request.is_approved,
            edited_at: OffsetDateTime::now_utc(),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::ParticipationEdited { participation } = &result.outcome else {
        return Err(unexpected_outcome("edit_participation"));
    };

    info!(id = participation.id.value(), "Participation edited");
    let response = EditParticipationResponse {
        participation: ParticipationInfo::from_domain(participation),
        message: String::from("Participation updated"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Creates or adjusts the manual participation count for a call sign.
///
/// # Errors
///
/// Returns an error if the call sign does not exist.
pub fn set_manual_count(
    records: &RecordSet,
    request: &SetManualCountRequest,
) -> Result<ApiResult<SetManualCountResponse>, ApiError> {
    let result = apply(
        records,
        Command::SetManualCount {
            id: ManualCountId::new(&generate_record_id("mc")),
            call_sign_id: CallSignId::new(&request.call_sign_id),
            count: request.count,
            updated_at: OffsetDateTime::now_utc(),
        },
    )
    .map_err(|e| translate_core_error(&e))?;

    let TransitionOutcome::ManualCountSet {
        manual_count,
        created,
    } = &result.outcome
    else {
        return Err(unexpected_outcome("set_manual_count"));
    };

    info!(
        call_sign_id = manual_count.call_sign_id.value(),
        count = manual_count.count,
        created,
        "Manual count set"
    );
    let response = SetManualCountResponse {
        manual_count: ManualCountInfo::from_domain(manual_count),
        created: *created,
        message: String::from("Manual participation count updated"),
    };
    Ok(ApiResult {
        response,
        new_records: result.new_records,
        outcome: result.outcome,
    })
}

/// Lists all call signs, in insertion order.
#[must_use]
pub fn list_call_signs(records: &RecordSet) -> ListCallSignsResponse {
    ListCallSignsResponse {
        call_signs: records
            .call_signs
            .iter()
            .map(CallSignInfo::from_domain)
            .collect(),
    }
}

/// Lists all participation reports, in insertion order.
#[must_use]
pub fn list_participations(records: &RecordSet) -> ListParticipationsResponse {
    ListParticipationsResponse {
        participations: records
            .event_participations
            .iter()
            .map(ParticipationInfo::from_domain)
            .collect(),
    }
}

/// Lists the reports awaiting approval.
#[must_use]
pub fn list_pending_participations(records: &RecordSet) -> ListParticipationsResponse {
    ListParticipationsResponse {
        participations: pending_participations(records)
            .into_iter()
            .map(ParticipationInfo::from_domain)
            .collect(),
    }
}

/// Lists the approved reports.
#[must_use]
pub fn list_approved_participations(records: &RecordSet) -> ListParticipationsResponse {
    ListParticipationsResponse {
        participations: approved_participations(records)
            .into_iter()
            .map(ParticipationInfo::from_domain)
            .collect(),
    }
}

/// Returns participation statistics for a single call sign.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the call sign does not
/// exist.
pub fn get_call_sign_statistics(
    records: &RecordSet,
    call_sign_id: &str,
) -> Result<CallSignStatisticsResponse, ApiError> {
    let id = CallSignId::new(call_sign_id);
    let Some(call_sign) = records.find_call_sign(&id) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Call sign"),
            message: format!("No call sign with id '{call_sign_id}'"),
        });
    };

    let approved: usize = records
        .event_participations
        .iter()
        .filter(|p| p.call_sign_id == id && p.is_approved)
        .count();
    let approved_count: u32 = approved.try_into().unwrap_or(u32::MAX);
    let manual_count: u32 = records.find_manual_count(&id).map_or(0, |mc| mc.count);

    debug!(call_sign = call_sign.code.value(), "Computed call sign statistics");
    Ok(CallSignStatisticsResponse {
        call_sign: CallSignInfo::from_domain(call_sign),
        approved_count,
        manual_count,
        effective_count: approved_count.saturating_add(manual_count),
    })
}

/// Returns the leaderboard: active call signs, descending by effective
/// count, ties in insertion order.
#[must_use]
pub fn get_leaderboard(records: &RecordSet) -> LeaderboardResponse {
    LeaderboardResponse {
        entries: leaderboard(records)
            .iter()
            .map(LeaderboardEntryInfo::from_entry)
            .collect(),
    }
}

fn unexpected_outcome(operation: &str) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected transition outcome for {operation}"),
    }
}
