//! `GET /health`: liveness plus a bounded database ping.

use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use taskboard_db::DbPool;

use crate::state::AppState;

/// How long the database ping may take before the service reports `degraded`.
const DB_PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
struct HealthReport {
    status: ServiceStatus,
    version: &'static str,
    db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn ping_database(pool: &DbPool) -> bool {
    match tokio::time::timeout(DB_PING_TIMEOUT, taskboard_db::health_check(pool)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
        Err(_) => {
            tracing::warn!(timeout = ?DB_PING_TIMEOUT, "Database ping timed out");
            false
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::new(ping_database(&state.pool).await))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
