//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{CreateTask, ReplaceTask, Task, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};
use validator::{ValidationError, ValidationErrors};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::TaskListParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// Report a dangling `project` reference as a field error.
async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(&state.pool, project_id).await? {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    errors.add(
        "project",
        ValidationError::new("does_not_exist").with_message(
            format!("Invalid pk \"{project_id}\" - object does not exist.").into(),
        ),
    );
    Err(AppError::Validation(errors))
}

/// GET /api/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<ListResponse<Task>>> {
    let filter = params.into_filter()?;
    let tasks = TaskRepo::list(&state.pool, &filter).await?;
    Ok(Json(ListResponse::new(tasks)))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    ensure_project_exists(&state, input.project_id).await?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ReplaceTask>,
) -> AppResult<Json<Task>> {
    apply_update(&state, id, &UpdateTask::from(input)).await
}

/// PATCH /api/tasks/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    apply_update(&state, id, &input).await
}

async fn apply_update(state: &AppState, id: DbId, input: &UpdateTask) -> AppResult<Json<Task>> {
    if let Some(project_id) = input.project_id {
        ensure_project_exists(state, project_id).await?;
    }
    let task = TaskRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id))
    }
}
