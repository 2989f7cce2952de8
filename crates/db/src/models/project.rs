//! Project entity model, wire projections and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{Date, DbId, Timestamp};
use validator::Validate;

use crate::models::deserialize_some;
use crate::models::status::ProjectStatus;
use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub client_name: String,
    pub budget: Decimal,
    pub status: ProjectStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List projection: the fields shown in a project listing plus a task count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub client_name: String,
    pub budget: Decimal,
    pub status: ProjectStatus,
    pub start_date: Date,
    pub total_tasks: i64,
    pub created_at: Timestamp,
}

/// Detail projection: every project field, its tasks and task counters.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

impl ProjectDetail {
    /// Attach a project's tasks and derive the counters from them.
    pub fn new(project: Project, tasks: Vec<Task>) -> Self {
        let total_tasks = tasks.len() as i64;
        let completed_tasks = tasks.iter().filter(|t| t.completed).count() as i64;
        Self {
            project,
            tasks,
            total_tasks,
            completed_tasks,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "taskboard_core::validation::validate_client_name"))]
    pub client_name: String,
    #[validate(custom(function = "taskboard_core::validation::validate_budget"))]
    pub budget: Decimal,
    /// Defaults to `planning` if omitted.
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `end_date` distinguishes "absent" (`None`, keep current value) from an
/// explicit `null` (`Some(None)`, clear it).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "taskboard_core::validation::validate_client_name"))]
    pub client_name: Option<String>,
    #[validate(custom(function = "taskboard_core::validation::validate_budget"))]
    pub budget: Option<Decimal>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<Date>>,
}

/// Body of a full `PUT`.
///
/// Title, budget and start date must be present. Omitted optional fields keep
/// their stored values; an explicit `"end_date": null` clears the end date.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceProject {
    #[validate(custom(function = "taskboard_core::validation::validate_title"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "taskboard_core::validation::validate_client_name"))]
    pub client_name: Option<String>,
    #[validate(custom(function = "taskboard_core::validation::validate_budget"))]
    pub budget: Decimal,
    pub status: Option<ProjectStatus>,
    pub start_date: Date,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<Date>>,
}

impl From<ReplaceProject> for UpdateProject {
    fn from(input: ReplaceProject) -> Self {
        Self {
            title: Some(input.title),
            description: input.description,
            client_name: input.client_name,
            budget: Some(input.budget),
            status: input.status,
            start_date: Some(input.start_date),
            end_date: input.end_date,
        }
    }
}

/// Filters accepted by the project listing.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Exact match on the status label.
    pub status: Option<String>,
    /// Case-insensitive substring match on `client_name`.
    pub client: Option<String>,
}
