//! Sample data for demos and local development.
//!
//! [`populate`] wipes both tables and inserts a fixed set of projects and
//! tasks whose dates are relative to the given day.

use chrono::Duration;
use rust_decimal::Decimal;
use sqlx::PgPool;
use taskboard_core::types::Date;

use crate::models::project::CreateProject;
use crate::models::status::{ProjectStatus, TaskPriority};
use crate::models::task::CreateTask;
use crate::repositories::{ProjectRepo, TaskRepo};

/// Row counts written by [`populate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub tasks: usize,
}

struct SampleProject {
    title: &'static str,
    description: &'static str,
    client_name: &'static str,
    /// Whole currency units.
    budget: i64,
    status: ProjectStatus,
    start_offset_days: i64,
    end_offset_days: Option<i64>,
}

struct SampleTask {
    /// Index into [`SAMPLE_PROJECTS`].
    project: usize,
    name: &'static str,
    description: &'static str,
    priority: TaskPriority,
    completed: bool,
    due_offset_days: i64,
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "E-commerce Website Redesign",
        description: "Complete redesign of the client's e-commerce platform with modern UI/UX and improved performance.",
        client_name: "TechMart Inc",
        budget: 45_000,
        status: ProjectStatus::InProgress,
        start_offset_days: -15,
        end_offset_days: Some(60),
    },
    SampleProject {
        title: "Mobile App Development",
        description: "Native mobile application for iOS and Android with real-time synchronization.",
        client_name: "FitLife Solutions",
        budget: 75_000,
        status: ProjectStatus::Planning,
        start_offset_days: 7,
        end_offset_days: Some(120),
    },
    SampleProject {
        title: "Social Media Marketing Campaign",
        description: "Comprehensive social media marketing strategy with content creation and management.",
        client_name: "GreenLeaf Organics",
        budget: 15_000,
        status: ProjectStatus::Completed,
        start_offset_days: -90,
        end_offset_days: Some(-5),
    },
    SampleProject {
        title: "Brand Identity Refresh",
        description: "Complete brand identity overhaul including logo, color scheme, and brand guidelines.",
        client_name: "Stellar Innovations",
        budget: 28_000,
        status: ProjectStatus::InProgress,
        start_offset_days: -30,
        end_offset_days: Some(15),
    },
    SampleProject {
        title: "Data Analytics Dashboard",
        description: "Interactive dashboard for real-time business analytics and reporting.",
        client_name: "DataDrive Corp",
        budget: 52_000,
        status: ProjectStatus::Planning,
        start_offset_days: 14,
        end_offset_days: None,
    },
];

const SAMPLE_TASKS: &[SampleTask] = &[
    SampleTask {
        project: 0,
        name: "Design mockups",
        description: "Create initial design mockups for all pages",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -10,
    },
    SampleTask {
        project: 0,
        name: "Frontend development",
        description: "Implement responsive frontend with React",
        priority: TaskPriority::High,
        completed: false,
        due_offset_days: 20,
    },
    SampleTask {
        project: 0,
        name: "Backend API setup",
        description: "Set up the REST API",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -5,
    },
    SampleTask {
        project: 0,
        name: "Database optimization",
        description: "Optimize database queries and indexing",
        priority: TaskPriority::Medium,
        completed: false,
        due_offset_days: 30,
    },
    SampleTask {
        project: 1,
        name: "Requirements gathering",
        description: "Document all functional requirements",
        priority: TaskPriority::High,
        completed: false,
        due_offset_days: 5,
    },
    SampleTask {
        project: 1,
        name: "UI/UX wireframes",
        description: "Create wireframes for all app screens",
        priority: TaskPriority::High,
        completed: false,
        due_offset_days: 10,
    },
    SampleTask {
        project: 1,
        name: "API integration planning",
        description: "Plan third-party API integrations",
        priority: TaskPriority::Medium,
        completed: false,
        due_offset_days: 15,
    },
    SampleTask {
        project: 2,
        name: "Content strategy",
        description: "Develop comprehensive content strategy",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -80,
    },
    SampleTask {
        project: 2,
        name: "Content creation",
        description: "Create posts, graphics, and videos",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -60,
    },
    SampleTask {
        project: 2,
        name: "Campaign execution",
        description: "Execute campaign across platforms",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -30,
    },
    SampleTask {
        project: 2,
        name: "Analytics report",
        description: "Prepare final analytics report",
        priority: TaskPriority::Medium,
        completed: true,
        due_offset_days: -7,
    },
    SampleTask {
        project: 3,
        name: "Logo design",
        description: "Design new logo variations",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -20,
    },
    SampleTask {
        project: 3,
        name: "Color palette",
        description: "Develop new color palette",
        priority: TaskPriority::High,
        completed: true,
        due_offset_days: -15,
    },
    SampleTask {
        project: 3,
        name: "Brand guidelines",
        description: "Create comprehensive brand guidelines document",
        priority: TaskPriority::Medium,
        completed: false,
        due_offset_days: 10,
    },
    SampleTask {
        project: 4,
        name: "Requirements analysis",
        description: "Analyze client requirements and data sources",
        priority: TaskPriority::High,
        completed: false,
        due_offset_days: 20,
    },
    SampleTask {
        project: 4,
        name: "Dashboard design",
        description: "Design dashboard layout and visualizations",
        priority: TaskPriority::High,
        completed: false,
        due_offset_days: 35,
    },
    SampleTask {
        project: 4,
        name: "Data pipeline setup",
        description: "Set up automated data pipeline",
        priority: TaskPriority::Medium,
        completed: false,
        due_offset_days: 50,
    },
];

/// Replace the contents of both tables with the sample data.
///
/// Runs in a single transaction: on error nothing is deleted.
pub async fn populate(pool: &PgPool, today: Date) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = ProjectRepo::delete_all(&mut *tx).await?;
    tracing::debug!(removed, "Cleared existing projects and tasks");

    let mut project_ids = Vec::with_capacity(SAMPLE_PROJECTS.len());
    for sample in SAMPLE_PROJECTS {
        let input = CreateProject {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            client_name: sample.client_name.to_string(),
            budget: Decimal::new(sample.budget * 100, 2),
            status: sample.status,
            start_date: today + Duration::days(sample.start_offset_days),
            end_date: sample.end_offset_days.map(|d| today + Duration::days(d)),
        };
        let project = ProjectRepo::create(&mut *tx, &input).await?;
        tracing::info!(project_id = project.id, title = %project.title, "Created sample project");
        project_ids.push(project.id);
    }

    for sample in SAMPLE_TASKS {
        let input = CreateTask {
            project_id: project_ids[sample.project],
            name: sample.name.to_string(),
            description: sample.description.to_string(),
            priority: sample.priority,
            completed: sample.completed,
            due_date: Some(today + Duration::days(sample.due_offset_days)),
        };
        TaskRepo::create(&mut *tx, &input).await?;
    }

    tx.commit().await?;

    Ok(SeedSummary {
        projects: SAMPLE_PROJECTS.len(),
        tasks: SAMPLE_TASKS.len(),
    })
}
