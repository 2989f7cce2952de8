//! Aggregate queries behind the dashboard.

use sqlx::{PgConnection, PgPool};
use taskboard_core::dashboard::{recent_cutoff, TOP_CLIENTS_LIMIT};
use taskboard_core::types::Timestamp;

use crate::models::dashboard::{
    ClientTotalRow, DashboardStats, PriorityCount, ProjectTotals, StatusCount, TaskTotals,
};

/// Read-only aggregates over the `projects` and `tasks` tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the full dashboard payload as of `now`.
    ///
    /// All queries run in one read-only `REPEATABLE READ` transaction so the
    /// counters describe the same snapshot.
    pub async fn snapshot(pool: &PgPool, now: Timestamp) -> Result<DashboardStats, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let totals = Self::project_totals(&mut tx, now).await?;
        let statuses = Self::status_counts(&mut tx).await?;
        let tasks = Self::task_totals(&mut tx).await?;
        let priorities = Self::priority_counts(&mut tx).await?;
        let clients = Self::top_clients(&mut tx, TOP_CLIENTS_LIMIT).await?;

        tx.commit().await?;

        Ok(DashboardStats::assemble(
            totals,
            &statuses,
            tasks,
            &priorities,
            clients,
        ))
    }

    /// Project count, budget sum/average and the recent-project counter.
    pub async fn project_totals(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<ProjectTotals, sqlx::Error> {
        sqlx::query_as::<_, ProjectTotals>(
            "SELECT COUNT(*) AS total_projects, \
                    COALESCE(SUM(budget), 0) AS total_budget, \
                    COALESCE(AVG(budget), 0)::FLOAT8 AS average_budget, \
                    COUNT(*) FILTER (WHERE created_at >= $1) AS recent_projects \
             FROM projects",
        )
        .bind(recent_cutoff(now))
        .fetch_one(conn)
        .await
    }

    /// Project counts per status. Statuses without rows are absent.
    pub async fn status_counts(conn: &mut PgConnection) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM projects GROUP BY status",
        )
        .fetch_all(conn)
        .await
    }

    /// Total and completed task counts.
    pub async fn task_totals(conn: &mut PgConnection) -> Result<TaskTotals, sqlx::Error> {
        sqlx::query_as::<_, TaskTotals>(
            "SELECT COUNT(*) AS total_tasks, \
                    COUNT(*) FILTER (WHERE completed) AS completed_tasks \
             FROM tasks",
        )
        .fetch_one(conn)
        .await
    }

    /// Task counts per priority. Priorities without rows are absent.
    pub async fn priority_counts(
        conn: &mut PgConnection,
    ) -> Result<Vec<PriorityCount>, sqlx::Error> {
        sqlx::query_as::<_, PriorityCount>(
            "SELECT priority, COUNT(*) AS count FROM tasks GROUP BY priority",
        )
        .fetch_all(conn)
        .await
    }

    /// Clients with the most projects; ties are broken by client name.
    pub async fn top_clients(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<ClientTotalRow>, sqlx::Error> {
        sqlx::query_as::<_, ClientTotalRow>(
            "SELECT client_name, \
                    COUNT(id) AS project_count, \
                    SUM(budget) AS total_budget \
             FROM projects \
             GROUP BY client_name \
             ORDER BY project_count DESC, client_name ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }
}
