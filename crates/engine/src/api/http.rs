//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use impostor_domain::{Difficulty, DomainError, EvidenceId, GameSession, SessionId};

use super::views::{AnswerView, CaseView, VerdictView};
use crate::app::App;
use crate::infrastructure::ports::LlmError;
use crate::use_cases::{AccusationError, CaseError, EvidenceError, InterrogationError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/cases", post(open_case))
        .route("/api/cases/{id}", get(get_case).delete(discard_case))
        .route("/api/cases/{id}/begin", post(begin_case))
        .route(
            "/api/cases/{id}/interrogation",
            post(start_interrogation).delete(end_interrogation),
        )
        .route("/api/cases/{id}/questions", post(ask_question))
        .route(
            "/api/cases/{id}/evidence/{evidence_id}/links/{suspect}",
            put(link_evidence).delete(unlink_evidence),
        )
        .route("/api/cases/{id}/notice", delete(dismiss_notice))
        .route("/api/cases/{id}/accusation", post(accuse))
        .route("/api/cases/{id}/reset", post(reset_case))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Deserialize)]
struct OpenCaseRequest {
    difficulty: String,
    /// Reuse a menu-phase session instead of creating a new one.
    #[serde(default)]
    session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
struct SuspectRequest {
    suspect: String,
}

#[derive(Debug, Deserialize)]
struct QuestionRequest {
    suspect: String,
    question: String,
}

// =============================================================================
// Handlers
// =============================================================================

fn view(app: &App, session: &GameSession) -> Json<CaseView> {
    Json(CaseView::new(session, app.clock.now()))
}

async fn open_case(
    State(app): State<Arc<App>>,
    Json(body): Json<OpenCaseRequest>,
) -> Result<(StatusCode, Json<CaseView>), ApiError> {
    let difficulty: Difficulty = body.difficulty.parse()?;
    let session = app
        .use_cases
        .case
        .open
        .execute(difficulty, body.session_id.map(SessionId::from_uuid))
        .await?;
    Ok((StatusCode::CREATED, view(&app, &session)))
}

async fn get_case(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .case
        .get
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(view(&app, &session))
}

async fn begin_case(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .case
        .begin
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(view(&app, &session))
}

async fn reset_case(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .case
        .reset
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(view(&app, &session))
}

async fn discard_case(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .case
        .discard
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn start_interrogation(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<SuspectRequest>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .interrogation
        .start
        .execute(SessionId::from_uuid(id), &body.suspect)
        .await?;
    Ok(view(&app, &session))
}

async fn end_interrogation(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .interrogation
        .end
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(view(&app, &session))
}

async fn ask_question(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<QuestionRequest>,
) -> Result<Json<AnswerView>, ApiError> {
    let session_id = SessionId::from_uuid(id);
    let outcome = app
        .use_cases
        .interrogation
        .ask
        .execute(session_id, &body.suspect, &body.question)
        .await?;
    let session = app
        .sessions
        .get(session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Case not found: {session_id}")))?;
    Ok(Json(AnswerView::new(
        outcome,
        CaseView::new(&session, app.clock.now()),
    )))
}

async fn link_evidence(
    State(app): State<Arc<App>>,
    Path((id, evidence_id, suspect)): Path<(Uuid, String, String)>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .evidence
        .link
        .execute(
            SessionId::from_uuid(id),
            &EvidenceId::new(evidence_id),
            &suspect,
        )
        .await?;
    Ok(view(&app, &session))
}

async fn unlink_evidence(
    State(app): State<Arc<App>>,
    Path((id, evidence_id, suspect)): Path<(Uuid, String, String)>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .evidence
        .unlink
        .execute(
            SessionId::from_uuid(id),
            &EvidenceId::new(evidence_id),
            &suspect,
        )
        .await?;
    Ok(view(&app, &session))
}

async fn dismiss_notice(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseView>, ApiError> {
    let session = app
        .use_cases
        .evidence
        .dismiss_notice
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(view(&app, &session))
}

async fn accuse(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<SuspectRequest>,
) -> Result<Json<VerdictView>, ApiError> {
    let session_id = SessionId::from_uuid(id);
    let stats = app.use_cases.accuse.execute(session_id, &body.suspect).await?;
    let session = app
        .sessions
        .get(session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Case not found: {session_id}")))?;
    Ok(Json(VerdictView {
        stats,
        case: CaseView::new(&session, app.clock.now()),
    }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    DialogueUnavailable(String),
    DialogueRateLimited(String),
    DialogueTimeout(String),
    DialogueFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::DialogueUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::DialogueRateLimited(msg) => (
                StatusCode::TOO_MANY_REQUESTS,
                format!("{msg}. Please wait a moment and ask again."),
            ),
            ApiError::DialogueTimeout(msg) => (
                StatusCode::GATEWAY_TIMEOUT,
                format!("{msg}. Please ask again."),
            ),
            ApiError::DialogueFailed(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::NotFound { .. } => ApiError::NotFound(message),
            DomainError::Validation(_) | DomainError::Parse(_) => ApiError::BadRequest(message),
            DomainError::Constraint(_) | DomainError::InvalidStateTransition(_) => {
                ApiError::Conflict(message)
            }
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        let message = e.to_string();
        match e {
            LlmError::NotConfigured | LlmError::Unauthorized(_) => {
                ApiError::DialogueUnavailable(message)
            }
            LlmError::RateLimited(_) => ApiError::DialogueRateLimited(message),
            LlmError::Timeout(_) => ApiError::DialogueTimeout(message),
            // Unusable answers fall back to canned lines before reaching here.
            LlmError::RequestFailed(_)
            | LlmError::InvalidResponse(_)
            | LlmError::EmptyResponse => ApiError::DialogueFailed(message),
        }
    }
}

impl From<CaseError> for ApiError {
    fn from(e: CaseError) -> Self {
        match e {
            CaseError::SessionNotFound(_) => ApiError::NotFound(e.to_string()),
            CaseError::Domain(e) => e.into(),
        }
    }
}

impl From<InterrogationError> for ApiError {
    fn from(e: InterrogationError) -> Self {
        match e {
            InterrogationError::SessionNotFound(_) => ApiError::NotFound(e.to_string()),
            InterrogationError::Domain(e) => e.into(),
            InterrogationError::Dialogue(e) => e.into(),
        }
    }
}

impl From<EvidenceError> for ApiError {
    fn from(e: EvidenceError) -> Self {
        match e {
            EvidenceError::SessionNotFound(_) => ApiError::NotFound(e.to_string()),
            EvidenceError::Domain(e) => e.into(),
        }
    }
}

impl From<AccusationError> for ApiError {
    fn from(e: AccusationError) -> Self {
        match e {
            AccusationError::SessionNotFound(_) => ApiError::NotFound(e.to_string()),
            AccusationError::Domain(e) => e.into(),
        }
    }
}
