//! Repository for the `projects` table.

use sqlx::{PgExecutor, PgPool};
use taskboard_core::types::DbId;

use crate::models::project::{
    CreateProject, Project, ProjectDetail, ProjectFilter, ProjectSummary, UpdateProject,
};
use crate::repositories::TaskRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, client_name, budget, status, \
                       start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, client_name, budget, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.client_name)
            .bind(input.budget)
            .bind(input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(executor)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project together with its tasks (newest first).
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let tasks = TaskRepo::list_by_project(pool, id).await?;
        Ok(Some(ProjectDetail::new(project, tasks)))
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List project summaries, most recently created first.
    ///
    /// `status` must match exactly; `client` is a case-insensitive substring
    /// match on `client_name` with LIKE wildcards taken literally.
    pub async fn list_summaries(
        pool: &PgPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let client_pattern = filter.client.as_deref().map(contains_pattern);
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.title, p.client_name, p.budget, p.status, p.start_date, \
                    (SELECT COUNT(*) FROM tasks t WHERE t.project_id = p.id) AS total_tasks, \
                    p.created_at \
             FROM projects p \
             WHERE ($1::TEXT IS NULL OR p.status::TEXT = $1) \
               AND ($2::TEXT IS NULL OR p.client_name ILIKE $2) \
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(filter.status.as_deref())
        .bind(client_pattern)
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                client_name = COALESCE($4, client_name),
                budget = COALESCE($5, budget),
                status = COALESCE($6, status),
                start_date = COALESCE($7, start_date),
                end_date = CASE WHEN $8 THEN $9 ELSE end_date END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.client_name)
            .bind(input.budget)
            .bind(input.status)
            .bind(input.start_date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and, through the foreign key, all of its tasks.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every project (and every task). Returns the number of projects removed.
    pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects").execute(executor).await?;
        Ok(result.rows_affected())
    }
}

/// Build an `ILIKE` pattern matching `needle` anywhere, escaping the
/// wildcard characters `%` and `_` and the escape character itself.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
