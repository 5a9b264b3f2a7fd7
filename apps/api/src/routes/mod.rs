pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz form
        .route("/api/v1/quiz/questions", get(handlers::handle_questions))
        .route("/api/v1/quiz/validate", post(handlers::handle_validate))
        // Session
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/submit", post(handlers::handle_submit))
        .route("/api/v1/session/confirm", post(handlers::handle_confirm))
        .route("/api/v1/session/retry", post(handlers::handle_retry))
        .route(
            "/api/v1/session/careers/:index/select",
            post(handlers::handle_select),
        )
        .route("/api/v1/session/back", post(handlers::handle_back))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .with_state(state)
}
