use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Resume Parser API";

/// GET /
/// Static service identity and the endpoints it exposes.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "parse_resume": "/parse-resume/",
            "health": "/health"
        }
    }))
}

/// GET /health
/// Returns a simple status object with service version and vocabulary size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME,
        "skills": state.matcher.skill_count(),
        "timestamp": chrono::Utc::now()
    }))
}
