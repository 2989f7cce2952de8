//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Read paths take `&PgPool`; write paths take any Postgres executor so the
//! seeding routine can run them inside a transaction.

pub mod dashboard_repo;
pub mod project_repo;
pub mod task_repo;

pub use dashboard_repo::DashboardRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
