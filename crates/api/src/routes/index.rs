use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / -- machine-readable index of the API.
async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Taskboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "projects": "/api/projects/",
            "tasks": "/api/tasks/",
            "dashboard": "/api/dashboard/",
            "external_quotes": "/api/external/quotes/",
            "weather": "/api/external/weather/",
        },
        "documentation": "See README.md for full API documentation",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
