//! Axum route handlers for the quiz form and the session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FailureKind};
use crate::models::analysis::{AnalysisSource, AptitudeAnalysis};
use crate::models::career::{CareerDetail, CareerMatch};
use crate::models::profile::{question_catalog, AptitudeAnswers, Question, UserProfile};
use crate::session::machine::{Event, Session, Step};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub answers: AptitudeAnswers,
}

#[derive(Debug, Serialize)]
pub struct FormValidity {
    pub profile_valid: bool,
    pub answers_valid: bool,
}

/// What the front-end renders for the current screen.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub generation: u64,
    pub step: Step,
    pub status_message: Option<&'static str>,
    pub display_name: Option<String>,
    pub profile: Option<UserProfile>,
    pub analysis: Option<AptitudeAnalysis>,
    pub analysis_source: Option<AnalysisSource>,
    pub degraded: bool,
    pub careers: Vec<CareerMatch>,
    pub selected_career: Option<CareerDetail>,
    pub failure: Option<FailureKind>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        let degraded = session.is_degraded();
        SessionView {
            generation: session.generation,
            step: session.step,
            status_message: session.step.status_message(),
            display_name: session.profile.as_ref().map(|p| p.name.clone()),
            careers: session
                .careers
                .iter()
                .enumerate()
                .map(|(i, c)| c.summary(i))
                .collect(),
            profile: session.profile,
            analysis: session.analysis,
            analysis_source: session.analysis_source,
            degraded,
            selected_career: session.selected_career,
            failure: session.failure,
            updated_at: session.updated_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_questions() -> Json<Vec<Question>> {
    Json(question_catalog())
}

/// POST /api/v1/quiz/validate
///
/// Evaluates the two "continue" predicates for a partially filled form.
pub async fn handle_validate(Json(form): Json<QuizForm>) -> Json<FormValidity> {
    Json(FormValidity {
        profile_valid: form.profile.is_complete(),
        answers_valid: form.answers.is_complete(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Session handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.workflow.store().snapshot().await.into())
}

/// POST /api/v1/session/submit
///
/// Starts the analysis call in the background; poll the session for the result.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(form): Json<QuizForm>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (session, job) = state.workflow.submit(form.profile, form.answers).await?;
    state.workflow.spawn_analysis(job);
    Ok((StatusCode::ACCEPTED, Json(session.into())))
}

/// POST /api/v1/session/confirm
pub async fn handle_confirm(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (session, job) = state.workflow.confirm().await?;
    state.workflow.spawn_matching(job);
    Ok((StatusCode::ACCEPTED, Json(session.into())))
}

/// POST /api/v1/session/retry
pub async fn handle_retry(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (session, job) = state.workflow.retry().await?;
    state.workflow.spawn_matching(job);
    Ok((StatusCode::ACCEPTED, Json(session.into())))
}

/// POST /api/v1/session/careers/:index/select
pub async fn handle_select(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .workflow
        .store()
        .dispatch(Event::Select { index })
        .await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/session/back
pub async fn handle_back(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let session = state.workflow.store().dispatch(Event::Back).await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let session = state.workflow.store().dispatch(Event::Reset).await?;
    Ok(Json(session.into()))
}
