use crate::config::Config;
use crate::session::workflow::Workflow;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the single quiz session and the model used for both calls.
    pub workflow: Workflow,
    pub config: Config,
}
