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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use asx_events::{RecordSet, TransitionOutcome};
use asx_events_api::{
    ApiError, ApproveParticipationRequest, ApproveParticipationResponse,
    CallSignStatisticsResponse, CreateCallSignRequest, CreateCallSignResponse,
    DeleteCallSignRequest, DeleteCallSignResponse, EditParticipationRequest,
    EditParticipationResponse, LeaderboardResponse, ListCallSignsResponse,
    ListParticipationsResponse, RejectParticipationRequest, RejectParticipationResponse,
    SetManualCountRequest, SetManualCountResponse, SubmitParticipationRequest,
    SubmitParticipationResponse, UpdateCallSignRequest, UpdateCallSignResponse,
    approve_participation, create_call_sign, delete_call_sign, edit_participation,
    get_call_sign_statistics, get_leaderboard, list_approved_participations, list_call_signs,
    list_participations, list_pending_participations, reject_participation, set_manual_count,
    submit_participation, update_call_sign,
};
use asx_events_notify::{Dispatcher, Notification};
use asx_events_persistence::{PersistenceError, RecordStore, snapshot};

/// ASX Events Server - HTTP server for the ASX Event Tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Discord webhook URL for participation submissions
    #[arg(long)]
    participation_webhook: Option<String>,

    /// Discord webhook URL for milestone announcements
    #[arg(long)]
    milestone_webhook: Option<String>,

    /// Seed an empty database from a JSON record snapshot
    #[arg(long)]
    seed_from: Option<std::path::PathBuf>,
}

/// The single-writer core: the in-memory record mirror and the store
/// it mirrors.
///
/// Mutations persist rows first and only then adopt the new record
/// set, so the mirror never gets ahead of the database.
struct RecordState {
    records: RecordSet,
    store: RecordStore,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    records: Arc<Mutex<RecordState>>,
    dispatcher: Arc<Dispatcher>,
}

/// Wire body for updating a call sign; the id comes from the path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCallSignBody {
    /// The new code.
    code: String,
    /// The new active flag.
    is_active: bool,
}

/// Wire body for editing a participation report; the id comes from
/// the path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditParticipationBody {
    /// The new owning call sign.
    call_sign_id: String,
    /// The new event date (`YYYY-MM-DD`).
    date: String,
    /// The new departure airport code.
    departure_airport: String,
    /// The new arrival airport code.
    arrival_airport: String,
    /// The forced approval flag.
    is_approved: bool,
}

/// Wire body for setting a manual participation count.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetManualCountBody {
    /// The new credit count.
    count: u32,
}

/// Response body for snapshot import.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportSnapshotResponse {
    /// How many call signs were imported.
    call_signs: usize,
    /// How many participation reports were imported.
    participations: usize,
    /// How many manual count records were imported.
    manual_counts: usize,
    /// A success message.
    message: String,
}

/// Wire error body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => {
                warn!(error = %err, "Request targeted a missing record");
                Self {
                    status: StatusCode::NOT_FOUND,
                    message: err.to_string(),
                }
            }
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Writes the rows named by a transition outcome to the store.
///
/// Called with the record lock held, before the in-memory mirror
/// adopts the new record set.
fn persist_outcome(
    store: &mut RecordStore,
    outcome: &TransitionOutcome,
) -> Result<(), PersistenceError> {
    match outcome {
        TransitionOutcome::CallSignCreated { call_sign } => store.insert_call_sign(call_sign),
        TransitionOutcome::CallSignUpdated { call_sign } => store.update_call_sign(call_sign),
        TransitionOutcome::CallSignDeleted { id, .. } => store.delete_call_sign(id),
        TransitionOutcome::ParticipationSubmitted { participation, .. } => {
            store.insert_participation(participation)
        }
        TransitionOutcome::ParticipationApproved(approval) => {
            store.update_participation(&approval.participation)
        }
        TransitionOutcome::ParticipationRejected { id } => store.delete_participation(id),
        TransitionOutcome::ParticipationEdited { participation } => {
            store.update_participation(participation)
        }
        TransitionOutcome::ManualCountSet { manual_count, .. } => {
            store.upsert_manual_count(manual_count)
        }
    }
}

/// Builds the notifications a committed outcome calls for.
fn notifications_for(outcome: &TransitionOutcome) -> Vec<Notification> {
    match outcome {
        TransitionOutcome::ParticipationSubmitted {
            participation,
            call_sign,
        } => vec![Notification::ParticipationSubmitted {
            call_sign_code: call_sign.code.value().to_owned(),
            date: participation.date.value().to_owned(),
            departure_airport: participation.departure_airport.value().to_owned(),
            arrival_airport: participation.arrival_airport.value().to_owned(),
        }],
        TransitionOutcome::ParticipationApproved(approval) => approval
            .milestone
            .map(|milestone| Notification::MilestoneReached {
                call_sign_code: approval.call_sign.code.value().to_owned(),
                milestone,
            })
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

/// Runs a mutation end to end: apply, persist, adopt, notify.
///
/// The handler closure produces an `ApiResult`; its rows are persisted
/// under the lock, the mirror adopts the new record set, and any
/// notifications fire detached after the lock is released.
async fn run_mutation<T, F>(app_state: &AppState, mutate: F) -> Result<Json<T>, HttpError>
where
    F: FnOnce(&RecordSet) -> Result<asx_events_api::ApiResult<T>, ApiError>,
{
    let mut state = app_state.records.lock().await;
    let result = mutate(&state.records).map_err(HttpError::from)?;
    persist_outcome(&mut state.store, &result.outcome)?;
    state.records = result.new_records;
    drop(state);

    for notification in notifications_for(&result.outcome) {
        app_state.dispatcher.dispatch_detached(notification);
    }

    Ok(Json(result.response))
}

/// Handler for GET `/call_signs`.
async fn handle_list_call_signs(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListCallSignsResponse> {
    let state = app_state.records.lock().await;
    Json(list_call_signs(&state.records))
}

/// Handler for POST `/call_signs`.
async fn handle_create_call_sign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCallSignRequest>,
) -> Result<Json<CreateCallSignResponse>, HttpError> {
    run_mutation(&app_state, |records| create_call_sign(records, &req)).await
}

/// Handler for PUT `/call_signs/{id}`.
async fn handle_update_call_sign(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCallSignBody>,
) -> Result<Json<UpdateCallSignResponse>, HttpError> {
    let req = UpdateCallSignRequest {
        id,
        code: body.code,
        is_active: body.is_active,
    };
    run_mutation(&app_state, |records| update_call_sign(records, &req)).await
}

/// Handler for DELETE `/call_signs/{id}`.
async fn handle_delete_call_sign(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteCallSignResponse>, HttpError> {
    let req = DeleteCallSignRequest { id };
    run_mutation(&app_state, |records| delete_call_sign(records, &req)).await
}

/// Handler for GET `/participations`.
async fn handle_list_participations(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListParticipationsResponse> {
    let state = app_state.records.lock().await;
    Json(list_participations(&state.records))
}

/// Handler for GET `/participations/pending`.
async fn handle_list_pending(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListParticipationsResponse> {
    let state = app_state.records.lock().await;
    Json(list_pending_participations(&state.records))
}

/// Handler for GET `/participations/approved`.
async fn handle_list_approved(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListParticipationsResponse> {
    let state = app_state.records.lock().await;
    Json(list_approved_participations(&state.records))
}

/// Handler for POST `/participations`.
async fn handle_submit_participation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitParticipationRequest>,
) -> Result<Json<SubmitParticipationResponse>, HttpError> {
    run_mutation(&app_state, |records| submit_participation(records, &req)).await
}

/// Handler for POST `/participations/{id}/approve`.
async fn handle_approve_participation(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApproveParticipationResponse>, HttpError> {
    let req = ApproveParticipationRequest { id };
    run_mutation(&app_state, |records| approve_participation(records, &req)).await
}

/// Handler for POST `/participations/{id}/reject`.
async fn handle_reject_participation(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RejectParticipationResponse>, HttpError> {
    let req = RejectParticipationRequest { id };
    run_mutation(&app_state, |records| reject_participation(records, &req)).await
}

/// Handler for PUT `/participations/{id}`.
async fn handle_edit_participation(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EditParticipationBody>,
) -> Result<Json<EditParticipationResponse>, HttpError> {
    let req = EditParticipationRequest {
        id,
        call_sign_id: body.call_sign_id,
        date: body.date,
        departure_airport: body.departure_airport,
        arrival_airport: body.arrival_airport,
        is_approved: body.is_approved,
    };
    run_mutation(&app_state, |records| edit_participation(records, &req)).await
}

/// Handler for PUT `/call_signs/{id}/manual_count`.
async fn handle_set_manual_count(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SetManualCountBody>,
) -> Result<Json<SetManualCountResponse>, HttpError> {
    let req = SetManualCountRequest {
        call_sign_id: id,
        count: body.count,
    };
    run_mutation(&app_state, |records| set_manual_count(records, &req)).await
}

/// Handler for GET `/call_signs/{id}/statistics`.
async fn handle_get_statistics(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CallSignStatisticsResponse>, HttpError> {
    let state = app_state.records.lock().await;
    let response = get_call_sign_statistics(&state.records, &id).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/leaderboard`.
async fn handle_get_leaderboard(
    AxumState(app_state): AxumState<AppState>,
) -> Json<LeaderboardResponse> {
    let state = app_state.records.lock().await;
    Json(get_leaderboard(&state.records))
}

/// Handler for GET `/snapshot`.
///
/// Exports the full record set in the snapshot format.
async fn handle_export_snapshot(AxumState(app_state): AxumState<AppState>) -> Json<RecordSet> {
    let state = app_state.records.lock().await;
    Json(state.records.clone())
}

/// Handler for POST `/snapshot`.
///
/// Replaces the entire record set with the posted snapshot.
async fn handle_import_snapshot(
    AxumState(app_state): AxumState<AppState>,
    Json(records): Json<RecordSet>,
) -> Result<Json<ImportSnapshotResponse>, HttpError> {
    let mut state = app_state.records.lock().await;
    state.store.replace_all(&records)?;

    let response = ImportSnapshotResponse {
        call_signs: records.call_signs.len(),
        participations: records.event_participations.len(),
        manual_counts: records.manual_participation_counts.len(),
        message: String::from("Snapshot imported"),
    };
    state.records = records;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/call_signs", get(handle_list_call_signs))
        .route("/call_signs", post(handle_create_call_sign))
        .route("/call_signs/{id}", put(handle_update_call_sign))
        .route(
            "/call_signs/{id}",
            axum::routing::delete(handle_delete_call_sign),
        )
        .route("/call_signs/{id}/manual_count", put(handle_set_manual_count))
        .route("/call_signs/{id}/statistics", get(handle_get_statistics))
        .route("/participations", get(handle_list_participations))
        .route("/participations", post(handle_submit_participation))
        .route("/participations/pending", get(handle_list_pending))
        .route("/participations/approved", get(handle_list_approved))
        .route("/participations/{id}", put(handle_edit_participation))
        .route(
            "/participations/{id}/approve",
            post(handle_approve_participation),
        )
        .route(
            "/participations/{id}/reject",
            post(handle_reject_participation),
        )
        .route("/leaderboard", get(handle_get_leaderboard))
        .route("/snapshot", get(handle_export_snapshot))
        .route("/snapshot", post(handle_import_snapshot))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ASX Events Server");

    let mut store: RecordStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        RecordStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        RecordStore::new_in_memory()?
    };

    let mut records: RecordSet = store.load_records()?;

    if let Some(seed_path) = &args.seed_from {
        if records.call_signs.is_empty() && records.event_participations.is_empty() {
            info!(path = %seed_path.display(), "Seeding empty database from snapshot");
            let seeded: RecordSet = snapshot::read_snapshot(seed_path)?;
            store.replace_all(&seeded)?;
            records = seeded;
        } else {
            warn!("Database is not empty, ignoring --seed-from");
        }
    }

    let dispatcher: Dispatcher =
        if args.participation_webhook.is_none() && args.milestone_webhook.is_none() {
            info!("No webhook URLs configured, notifications disabled");
            Dispatcher::disabled()
        } else {
            Dispatcher::webhook(args.participation_webhook, args.milestone_webhook)?
        };

    let app_state: AppState = AppState {
        records: Arc::new(Mutex::new(RecordState { records, store })),
        dispatcher: Arc::new(dispatcher),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store and a
    /// disabled dispatcher.
    fn create_test_app_state() -> AppState {
        let store: RecordStore =
            RecordStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            records: Arc::new(Mutex::new(RecordState {
                records: RecordSet::new(),
                store,
            })),
            dispatcher: Arc::new(Dispatcher::disabled()),
        }
    }

    async fn send_json(
        app: Router,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> (HttpStatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_get(app: Router, uri: &str) -> (HttpStatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    async fn create_call_sign_via_api(app_state: &AppState, code: &str) -> String {
        let app: Router = build_router(app_state.clone());
        let (status, body) = send_json(
            app,
            "POST",
            "/call_signs",
            serde_json::json!({ "code": code }),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        body["callSign"]["id"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn test_create_call_sign_returns_normalized_record() {
        let app_state = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let (status, body) = send_json(
            app,
            "POST",
            "/call_signs",
            serde_json::json!({ "code": "dal123" }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["callSign"]["code"], "DAL123");
        assert_eq!(body["callSign"]["isActive"], true);
    }

    #[tokio::test]
    async fn test_duplicate_call_sign_code_is_unprocessable() {
        let app_state = create_test_app_state();
        create_call_sign_via_api(&app_state, "DAL123").await;

        let app: Router = build_router(app_state);
        let (status, body) = send_json(
            app,
            "POST",
            "/call_signs",
            serde_json::json!({ "code": "DAL123" }),
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_malformed_code_is_bad_request() {
        let app_state = create_test_app_state();
        let app: Router = build_router(app_state);
        let (status, _) = send_json(
            app,
            "POST",
            "/call_signs",
            serde_json::json!({ "code": "A!" }),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_approve_missing_participation_is_not_found() {
        let app_state = create_test_app_state();
        let app: Router = build_router(app_state);
        let (status, _) = send_json(
            app,
            "POST",
            "/participations/p-ghost/approve",
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_approve_flow_crosses_milestone() {
        let app_state = create_test_app_state();
        let call_sign_id = create_call_sign_via_api(&app_state, "DAL123").await;

        // Manual credit of 9 so the first approval lands on 10.
        let (status, _) = send_json(
            build_router(app_state.clone()),
            "PUT",
            &format!("/call_signs/{call_sign_id}/manual_count"),
            serde_json::json!({ "count": 9 }),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, submitted) = send_json(
            build_router(app_state.clone()),
            "POST",
            "/participations",
            serde_json::json!({
                "callSignId": call_sign_id,
                "date": "2026-02-14",
                "departureAirport": "KLAX",
                "arrivalAirport": "KSFO"
            }),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(submitted["participation"]["isApproved"], false);
        let participation_id = submitted["participation"]["id"].as_str().unwrap().to_owned();

        let (status, approved) = send_json(
            build_router(app_state.clone()),
            "POST",
            &format!("/participations/{participation_id}/approve"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(approved["previousCount"], 9);
        assert_eq!(approved["newCount"], 10);
        assert_eq!(approved["milestone"], 10);

        // The mutation was persisted, not just mirrored.
        let mut state = app_state.records.lock().await;
        let stored = state.store.load_records().unwrap();
        assert_eq!(stored, state.records);
        drop(state);
    }

    #[tokio::test]
    async fn test_reject_removes_pending_participation() {
        let app_state = create_test_app_state();
        let call_sign_id = create_call_sign_via_api(&app_state, "UAL900").await;

        let (_, submitted) = send_json(
            build_router(app_state.clone()),
            "POST",
            "/participations",
            serde_json::json!({
                "callSignId": call_sign_id,
                "date": "2026-02-14",
                "departureAirport": "KLAX",
                "arrivalAirport": "KSFO"
            }),
        )
        .await;
        let participation_id = submitted["participation"]["id"].as_str().unwrap().to_owned();

        let (status, _) = send_json(
            build_router(app_state.clone()),
            "POST",
            &format!("/participations/{participation_id}/reject"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (_, pending) = send_get(build_router(app_state), "/participations/pending").await;
        assert_eq!(pending["participations"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_call_sign_cascades_and_updates_leaderboard() {
        let app_state = create_test_app_state();
        let first = create_call_sign_via_api(&app_state, "DAL123").await;
        let second = create_call_sign_via_api(&app_state, "UAL900").await;

        send_json(
            build_router(app_state.clone()),
            "PUT",
            &format!("/call_signs/{first}/manual_count"),
            serde_json::json!({ "count": 5 }),
        )
        .await;
        send_json(
            build_router(app_state.clone()),
            "PUT",
            &format!("/call_signs/{second}/manual_count"),
            serde_json::json!({ "count": 3 }),
        )
        .await;

        let (status, body) = send_json(
            build_router(app_state.clone()),
            "DELETE",
            &format!("/call_signs/{first}"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["removedManualCount"], true);

        let (_, board) = send_get(build_router(app_state), "/leaderboard").await;
        let entries = board["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["callSign"]["code"], "UAL900");
        assert_eq!(entries[0]["count"], 3);
    }

    #[tokio::test]
    async fn test_statistics_report_effective_count() {
        let app_state = create_test_app_state();
        let call_sign_id = create_call_sign_via_api(&app_state, "DAL123").await;

        send_json(
            build_router(app_state.clone()),
            "PUT",
            &format!("/call_signs/{call_sign_id}/manual_count"),
            serde_json::json!({ "count": 4 }),
        )
        .await;

        let (status, stats) = send_get(
            build_router(app_state),
            &format!("/call_signs/{call_sign_id}/statistics"),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(stats["approvedCount"], 0);
        assert_eq!(stats["manualCount"], 4);
        assert_eq!(stats["effectiveCount"], 4);
    }

    #[tokio::test]
    async fn test_snapshot_round_trips_through_routes() {
        let app_state = create_test_app_state();
        create_call_sign_via_api(&app_state, "DAL123").await;

        let (status, exported) = send_get(build_router(app_state.clone()), "/snapshot").await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(exported["callSigns"].as_array().unwrap().len(), 1);

        // Import into a fresh server.
        let fresh = create_test_app_state();
        let (status, body) = send_json(build_router(fresh.clone()), "POST", "/snapshot", exported)
            .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["callSigns"], 1);

        let (_, listed) = send_get(build_router(fresh), "/call_signs").await;
        assert_eq!(listed["callSigns"][0]["code"], "DAL123");
    }

    #[tokio::test]
    async fn test_failed_snapshot_import_preserves_served_records() {
        let app_state = create_test_app_state();
        create_call_sign_via_api(&app_state, "DAL123").await;

        // A participation pointing at an undefined call sign trips the
        // foreign key mid-import.
        let bad_snapshot = serde_json::json!({
            "callSigns": [],
            "eventParticipations": [{
                "id": "p-x",
                "callSignId": "cs-ghost",
                "date": "2026-03-01",
                "departureAirport": "KLAX",
                "arrivalAirport": "KSFO",
                "isApproved": false,
                "submittedAt": "2026-03-01T12:00:00Z"
            }],
            "manualParticipationCounts": []
        });
        let (status, body) = send_json(
            build_router(app_state.clone()),
            "POST",
            "/snapshot",
            bad_snapshot,
        )
        .await;
        assert_eq!(status, HttpStatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], true);

        // The failed import rolled back: the prior records are both
        // still served and still stored.
        let (status, listed) = send_get(build_router(app_state.clone()), "/call_signs").await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(listed["callSigns"][0]["code"], "DAL123");

        let stored = app_state
            .records
            .lock()
            .await
            .store
            .load_records()
            .unwrap();
        assert_eq!(stored.call_signs.len(), 1);
        assert_eq!(stored.call_signs[0].code.value(), "DAL123");
    }
}
