//! Dashboard aggregate rows and the response payload built from them.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::dashboard::{completion_rate, money_to_f64, pending_tasks};

use crate::models::status::{ProjectStatus, TaskPriority};

// ---------------------------------------------------------------------------
// Raw aggregate rows
// ---------------------------------------------------------------------------

/// Project-wide counters from a single aggregate query.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectTotals {
    pub total_projects: i64,
    pub total_budget: Decimal,
    pub average_budget: f64,
    pub recent_projects: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PriorityCount {
    pub priority: TaskPriority,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TaskTotals {
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

/// One row of the top-clients leaderboard.
#[derive(Debug, Clone, FromRow)]
pub struct ClientTotalRow {
    pub client_name: String,
    pub project_count: i64,
    pub total_budget: Decimal,
}

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_projects: i64,
    pub total_budget: f64,
    pub average_budget: f64,
    pub recent_projects_30_days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskStats {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub pending_tasks: i64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientTotal {
    pub client_name: String,
    pub project_count: i64,
    pub total_budget: f64,
}

/// Body of `GET /api/dashboard`.
///
/// The status and priority maps always carry every enum label, in
/// declaration order, with zero for labels that have no rows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub overview: Overview,
    pub project_status: IndexMap<&'static str, i64>,
    pub tasks: TaskStats,
    pub priority_distribution: IndexMap<&'static str, i64>,
    pub top_clients: Vec<ClientTotal>,
}

impl DashboardStats {
    /// Combine the raw aggregate rows into the response payload.
    pub fn assemble(
        totals: ProjectTotals,
        statuses: &[StatusCount],
        tasks: TaskTotals,
        priorities: &[PriorityCount],
        clients: Vec<ClientTotalRow>,
    ) -> Self {
        let mut project_status: IndexMap<&'static str, i64> =
            ProjectStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
        for row in statuses {
            project_status.insert(row.status.as_str(), row.count);
        }

        let mut priority_distribution: IndexMap<&'static str, i64> =
            TaskPriority::ALL.iter().map(|p| (p.as_str(), 0)).collect();
        for row in priorities {
            priority_distribution.insert(row.priority.as_str(), row.count);
        }

        Self {
            overview: Overview {
                total_projects: totals.total_projects,
                total_budget: money_to_f64(totals.total_budget),
                average_budget: totals.average_budget,
                recent_projects_30_days: totals.recent_projects,
            },
            project_status,
            tasks: TaskStats {
                total_tasks: tasks.total_tasks,
                completed_tasks: tasks.completed_tasks,
                pending_tasks: pending_tasks(tasks.total_tasks, tasks.completed_tasks),
                completion_rate: completion_rate(tasks.completed_tasks, tasks.total_tasks),
            },
            priority_distribution,
            top_clients: clients
                .into_iter()
                .map(|c| ClientTotal {
                    client_name: c.client_name,
                    project_count: c.project_count,
                    total_budget: money_to_f64(c.total_budget),
                })
                .collect(),
        }
    }
}
