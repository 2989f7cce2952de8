//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::types::DbId;
use taskboard_db::models::project::{
    CreateProject, ProjectDetail, ProjectSummary, ReplaceProject, UpdateProject,
};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::ProjectListParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ListResponse<ProjectSummary>>> {
    let filter = params.into_filter();
    let projects = ProjectRepo::list_summaries(&state.pool, &filter).await?;
    Ok(Json(ListResponse::new(projects)))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(ProjectDetail::new(project, Vec::new()))))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let detail = ProjectRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(detail))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ReplaceProject>,
) -> AppResult<Json<ProjectDetail>> {
    apply_update(&state, id, &UpdateProject::from(input)).await
}

/// PATCH /api/projects/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<ProjectDetail>> {
    apply_update(&state, id, &input).await
}

async fn apply_update(
    state: &AppState,
    id: DbId,
    input: &UpdateProject,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let tasks = TaskRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(ProjectDetail::new(project, tasks)))
}

/// DELETE /api/projects/{id}
///
/// Removes the project's tasks as well.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}
