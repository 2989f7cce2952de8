//! Repository for the `tasks` table.

use sqlx::{PgExecutor, PgPool};
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, description, priority, completed, due_date, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Fails with a foreign-key violation if `project_id` does not exist.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, name, description, priority, completed, due_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority)
            .bind(input.completed)
            .bind(input.due_date)
            .fetch_one(executor)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks, most recently created first, optionally filtered by
    /// owning project and completion flag.
    pub async fn list(pool: &PgPool, filter: &TaskFilter) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
               AND ($2::BOOLEAN IS NULL OR completed = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(filter.project_id)
            .bind(filter.completed)
            .fetch_all(pool)
            .await
    }

    /// List all tasks belonging to one project, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        Self::list(
            pool,
            &TaskFilter {
                project_id: Some(project_id),
                completed: None,
            },
        )
        .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                priority = COALESCE($5, priority),
                completed = COALESCE($6, completed),
                due_date = CASE WHEN $7 THEN $8 ELSE due_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority)
            .bind(input.completed)
            .bind(input.due_date.is_some())
            .bind(input.due_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
