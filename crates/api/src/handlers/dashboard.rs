//! Handler for the aggregate dashboard.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use taskboard_db::models::dashboard::DashboardStats;
use taskboard_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::snapshot(&state.pool, Utc::now()).await?;
    Ok(Json(stats))
}
