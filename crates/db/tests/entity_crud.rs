//! Integration tests for project and task repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create/find/update/delete for both tables
//! - Cascade delete from project to tasks
//! - Foreign key violations
//! - List filters and ordering

use assert_matches::assert_matches;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use taskboard_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use taskboard_db::models::status::{ProjectStatus, TaskPriority};
use taskboard_db::models::task::{CreateTask, TaskFilter, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_project(title: &str, client: &str, status: ProjectStatus) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} description"),
        client_name: client.to_string(),
        budget: Decimal::new(1_000_000, 2),
        status,
        start_date: date(2024, 1, 1),
        end_date: None,
    }
}

fn new_task(project_id: i64, name: &str, completed: bool) -> CreateTask {
    CreateTask {
        project_id,
        name: name.to_string(),
        description: String::new(),
        priority: TaskPriority::Medium,
        completed,
        due_date: None,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_project(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &new_project("Website", "TechMart Inc", ProjectStatus::Planning),
    )
    .await
    .unwrap();
    assert_eq!(created.title, "Website");
    assert_eq!(created.budget, Decimal::new(1_000_000, 2));
    assert_eq!(created.status, ProjectStatus::Planning);
    assert_eq!(created.start_date, date(2024, 1, 1));
    assert!(created.end_date.is_none());

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.title, "Website");
    assert_eq!(found.client_name, "TechMart Inc");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_project_returns_none(pool: PgPool) {
    let found = ProjectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
    assert!(!ProjectRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &new_project("Original", "Acme", ProjectStatus::Planning),
    )
    .await
    .unwrap();

    let update = UpdateProject {
        status: Some(ProjectStatus::Completed),
        end_date: Some(Some(date(2024, 6, 30))),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.title, "Original");
    assert_eq!(updated.budget, created.budget);
    assert_eq!(updated.end_date, Some(date(2024, 6, 30)));
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_clear_end_date(pool: PgPool) {
    let mut input = new_project("Dated", "Acme", ProjectStatus::Planning);
    input.end_date = Some(date(2024, 12, 31));
    let created = ProjectRepo::create(&pool, &input).await.unwrap();

    let untouched = ProjectRepo::update(&pool, created.id, &UpdateProject::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.end_date, Some(date(2024, 12, 31)));

    let cleared = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            end_date: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(cleared.end_date.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_project_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 999_999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_summaries_filters_and_counts(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A", "TechMart Inc", ProjectStatus::Completed))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("B", "FitLife", ProjectStatus::Planning))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("C", "techmart labs", ProjectStatus::Planning))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(a.id, "t1", true)).await.unwrap();
    TaskRepo::create(&pool, &new_task(a.id, "t2", false)).await.unwrap();

    let all = ProjectRepo::list_summaries(&pool, &ProjectFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    // Newest first.
    assert_eq!(all[0].title, "C");
    assert_eq!(all[2].title, "A");
    assert_eq!(all[2].total_tasks, 2);

    let completed = ProjectRepo::list_summaries(
        &pool,
        &ProjectFilter {
            status: Some("completed".to_string()),
            client: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed.iter().all(|p| p.status == ProjectStatus::Completed));

    let techmart = ProjectRepo::list_summaries(
        &pool,
        &ProjectFilter {
            status: None,
            client: Some("TECHMART".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(techmart.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_filter_matches_nothing(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("A", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    let none = ProjectRepo::list_summaries(
        &pool,
        &ProjectFilter {
            status: Some("archived".to_string()),
            client: None,
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_filter_treats_wildcards_literally(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("A", "100% Organic", ProjectStatus::Planning))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("B", "1000 Builders", ProjectStatus::Planning))
        .await
        .unwrap();

    let matched = ProjectRepo::list_summaries(
        &pool,
        &ProjectFilter {
            status: None,
            client: Some("0%".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].client_name, "100% Organic");
}

// ---------------------------------------------------------------------------
// Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_project(pool: PgPool) {
    let project =
        ProjectRepo::create(&pool, &new_project("Cascade", "Acme", ProjectStatus::Planning))
            .await
            .unwrap();
    let keep = ProjectRepo::create(&pool, &new_project("Keep", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    let doomed = TaskRepo::create(&pool, &new_task(project.id, "doomed", false))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(keep.id, "survivor", false))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(TaskRepo::find_by_id(&pool, doomed.id).await.unwrap().is_none());
    let remaining = TaskRepo::list(
        &pool,
        &TaskFilter {
            project_id: Some(project.id),
            completed: None,
        },
    )
    .await
    .unwrap();
    assert!(remaining.is_empty());
    assert_eq!(TaskRepo::list_by_project(&pool, keep.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_project_returns_false(pool: PgPool) {
    assert!(!ProjectRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_foreign_key_violation(pool: PgPool) {
    let result = TaskRepo::create(&pool, &new_task(999_999, "orphan", false)).await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(ref e)) if e.code().as_deref() == Some("23503")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_list_filters(pool: PgPool) {
    let p1 = ProjectRepo::create(&pool, &new_project("P1", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project("P2", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(p1.id, "done", true)).await.unwrap();
    TaskRepo::create(&pool, &new_task(p1.id, "open", false)).await.unwrap();
    TaskRepo::create(&pool, &new_task(p2.id, "other", true)).await.unwrap();

    let p1_done = TaskRepo::list(
        &pool,
        &TaskFilter {
            project_id: Some(p1.id),
            completed: Some(true),
        },
    )
    .await
    .unwrap();
    assert_eq!(p1_done.len(), 1);
    assert_eq!(p1_done[0].name, "done");

    let open = TaskRepo::list(
        &pool,
        &TaskFilter {
            project_id: None,
            completed: Some(false),
        },
    )
    .await
    .unwrap();
    assert_eq!(open.len(), 1);
    assert!(!open[0].completed);

    let all = TaskRepo::list(&pool, &TaskFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "other");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_update_and_delete(pool: PgPool) {
    let p1 = ProjectRepo::create(&pool, &new_project("P1", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project("P2", "Acme", ProjectStatus::Planning))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(p1.id, "move me", false))
        .await
        .unwrap();
    assert_eq!(task.priority, TaskPriority::Medium);

    let updated = TaskRepo::update(
        &pool,
        task.id,
        &UpdateTask {
            project_id: Some(p2.id),
            completed: Some(true),
            priority: Some(TaskPriority::High),
            due_date: Some(Some(date(2024, 2, 1))),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.project_id, p2.id);
    assert!(updated.completed);
    assert_eq!(updated.priority, TaskPriority::High);
    assert_eq!(updated.name, "move me");
    assert_eq!(updated.due_date, Some(date(2024, 2, 1)));

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_detail_embeds_tasks(pool: PgPool) {
    let project =
        ProjectRepo::create(&pool, &new_project("Detail", "Acme", ProjectStatus::Planning))
            .await
            .unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "a", true)).await.unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "b", false)).await.unwrap();

    let detail = ProjectRepo::find_detail(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.total_tasks, 2);
    assert_eq!(detail.completed_tasks, 1);
    assert_eq!(detail.tasks[0].name, "b");

    assert!(ProjectRepo::find_detail(&pool, 999_999).await.unwrap().is_none());
}
