use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and model wiring.
/// `credential_configured: false` means every quiz will run on fallback data.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "inspire-api",
        "model": MODEL,
        "credential_configured": state.config.gemini_api_key.is_some()
    }))
}
