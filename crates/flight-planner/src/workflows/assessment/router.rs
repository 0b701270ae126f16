use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::ResponseSet;
use super::report::{self, ExportError};
use super::session::{AssessmentSessionService, SessionError, SessionId, SessionStore};
use super::validation::ResponseValidator;

/// Router builder exposing the question bank, one-shot assessments, and
/// session endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentSessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<S>))
        .route("/api/v1/assessments", post(assess_handler::<S>))
        .route("/api/v1/sessions/:session_id", delete(reset_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/responses",
            put(update_response_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/progress",
            get(progress_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/submit",
            post(submit_handler::<S>),
        )
        .route("/api/v1/sessions/:session_id/plan", get(plan_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub responses: ResponseSet,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResponseUpdate {
    pub question_id: String,
    pub value: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
) -> Response
where
    S: SessionStore + 'static,
{
    Json(service.questionnaire().questions().to_vec()).into_response()
}

pub(crate) async fn assess_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Json(request): Json<AssessmentRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    if request.strict {
        let validator = ResponseValidator::new(service.questionnaire()).require_complete(true);
        if let Err(report) = validator.validate(&request.responses) {
            warn!(issues = report.issues.len(), "strict assessment rejected");
            let payload = json!({
                "error": report.to_string(),
                "issues": report.issues,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    }

    let plan = service.engine().flight_plan(&request.responses);
    (StatusCode::OK, Json(plan)).into_response()
}

pub(crate) async fn update_response_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Path(session_id): Path<String>,
    Json(update): Json<ResponseUpdate>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.update_response(&id, &update.question_id, update.value) {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn progress_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.progress(&SessionId(session_id)) {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.submit(&SessionId(session_id)) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => session_error_response(err),
    }
}

pub(crate) async fn plan_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Path(session_id): Path<String>,
    Query(query): Query<PlanQuery>,
) -> Response
where
    S: SessionStore + 'static,
{
    let plan = match service.flight_plan(&SessionId(session_id)) {
        Ok(plan) => plan,
        Err(err) => return session_error_response(err),
    };

    let now = Utc::now();
    let rendered = match query.format {
        ExportFormat::Json => report::to_json(&plan, now).map(|body| ("application/json", body)),
        ExportFormat::Csv => {
            report::to_csv(&plan, now.date_naive()).map(|body| ("text/csv", body))
        }
    };

    match rendered {
        Ok((content_type, body)) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(err) => export_error_response(err),
    }
}

pub(crate) async fn reset_handler<S>(
    State(service): State<Arc<AssessmentSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => session_error_response(err),
    }
}

fn session_error_response(err: SessionError) -> Response {
    let status = match &err {
        SessionError::NotFound => StatusCode::NOT_FOUND,
        SessionError::Incomplete { .. } | SessionError::PlanNotReady => StatusCode::CONFLICT,
        SessionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = match &err {
        SessionError::Incomplete { answered, total } => json!({
            "error": err.to_string(),
            "answered": answered,
            "total": total,
        }),
        _ => json!({ "error": err.to_string() }),
    };

    (status, Json(payload)).into_response()
}

fn export_error_response(err: ExportError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
