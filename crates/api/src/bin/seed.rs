//! Replace the database contents with sample projects and tasks.

use anyhow::Context;
use chrono::Utc;

use taskboard_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("taskboard_db=info,taskboard_seed=info");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = taskboard_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    taskboard_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let today = Utc::now().date_naive();
    let summary = taskboard_db::seed::populate(&pool, today)
        .await
        .context("Failed to load sample data")?;

    tracing::info!(
        projects = summary.projects,
        tasks = summary.tasks,
        "Sample data loaded"
    );
    Ok(())
}
