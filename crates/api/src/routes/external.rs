use axum::routing::get;
use axum::Router;

use crate::handlers::external;
use crate::state::AppState;

/// Third-party proxy routes mounted at `/external`.
///
/// ```text
/// GET  /quotes    -> quote
/// GET  /weather   -> weather
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(external::quote))
        .route("/weather", get(external::weather))
}
