// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the ASX Event Tracker.
//!
//! This crate sits between the HTTP server and the pure core. It owns
//! the request/response contract, translates core and domain errors
//! into the API taxonomy, and generates record ids so the core stays
//! deterministic.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod id;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, approve_participation, create_call_sign, delete_call_sign, edit_participation,
    get_call_sign_statistics, get_leaderboard, list_approved_participations, list_call_signs,
    list_participations, list_pending_participations, reject_participation, set_manual_count,
    submit_participation, update_call_sign,
};
pub use id::generate_record_id;
pub use request_response::{
    ApproveParticipationRequest, ApproveParticipationResponse, CallSignInfo,
    CallSignStatisticsResponse, CreateCallSignRequest, CreateCallSignResponse,
    DeleteCallSignRequest, DeleteCallSignResponse, EditParticipationRequest,
    EditParticipationResponse, LeaderboardEntryInfo, LeaderboardResponse, ListCallSignsResponse,
    ListParticipationsResponse, ManualCountInfo, ParticipationInfo, RejectParticipationRequest,
    RejectParticipationResponse, SetManualCountRequest, SetManualCountResponse,
    SubmitParticipationRequest, SubmitParticipationResponse, UpdateCallSignRequest,
    UpdateCallSignResponse,
};
