//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{Date, DbId, Timestamp};
use validator::Validate;

use crate::models::deserialize_some;
use crate::models::status::TaskPriority;

/// A task row from the `tasks` table.
///
/// The owning project's id is exposed on the wire as `project`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub name: String,
    pub description: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `medium` if omitted.
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub completed: bool,
    pub due_date: Option<Date>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[serde(default, rename = "project")]
    pub project_id: Option<DbId>,
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<Date>>,
}

/// Body of a full `PUT`.
///
/// `project` and `name` must be present. Omitted optional fields keep their
/// stored values; an explicit `"due_date": null` clears the due date.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceTask {
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub name: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<Date>>,
}

impl From<ReplaceTask> for UpdateTask {
    fn from(input: ReplaceTask) -> Self {
        Self {
            project_id: Some(input.project_id),
            name: Some(input.name),
            description: input.description,
            priority: input.priority,
            completed: input.completed,
            due_date: input.due_date,
        }
    }
}

/// Filters accepted by the task listing.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<DbId>,
    pub completed: Option<bool>,
}
