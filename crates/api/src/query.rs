//! Query parameter types for list endpoints.
//!
//! Values arrive as raw strings so that an empty parameter (`?status=`)
//! can be treated as absent rather than rejected. `completed` is the
//! exception: any value it carries, empty included, is a filter.

use serde::Deserialize;
use taskboard_core::types::DbId;
use taskboard_db::models::project::ProjectFilter;
use taskboard_db::models::task::TaskFilter;

use crate::error::AppError;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `GET /api/projects?status=&client=`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub client: Option<String>,
}

impl ProjectListParams {
    pub fn into_filter(self) -> ProjectFilter {
        ProjectFilter {
            status: non_empty(self.status),
            client: non_empty(self.client),
        }
    }
}

/// `GET /api/tasks?project=&completed=`
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub project: Option<String>,
    pub completed: Option<String>,
}

impl TaskListParams {
    /// `completed` is true only for a case-insensitive `"true"`; any other
    /// value, including an empty one, filters for incomplete tasks.
    pub fn into_filter(self) -> Result<TaskFilter, AppError> {
        let project_id = match non_empty(self.project) {
            Some(raw) => Some(raw.trim().parse::<DbId>().map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid value for 'project': expected a project id, got '{raw}'"
                ))
            })?),
            None => None,
        };
        let completed = self.completed.map(|v| v.eq_ignore_ascii_case("true"));

        Ok(TaskFilter {
            project_id,
            completed,
        })
    }
}

/// `GET /api/external/weather?city=`
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}
