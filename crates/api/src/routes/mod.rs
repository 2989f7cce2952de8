pub mod dashboard;
pub mod external;
pub mod health;
pub mod index;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                 list, create
/// /projects/{id}            get, update (PUT), partial update (PATCH), delete
///
/// /tasks                    list (?project, ?completed), create
/// /tasks/{id}               get, update (PUT), partial update (PATCH), delete
///
/// /dashboard                aggregate statistics (GET)
///
/// /external/quotes          random quote with local fallback (GET)
/// /external/weather         current weather (?city) (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/dashboard", dashboard::router())
        .nest("/external", external::router())
}
