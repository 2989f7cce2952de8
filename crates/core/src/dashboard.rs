//! Dashboard arithmetic.
//!
//! The repository layer returns raw counts and sums; the helpers here turn
//! them into the numbers reported by `GET /api/dashboard`.

use chrono::{Duration, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::types::Timestamp;

/// Window used for the "recent projects" counter.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Number of entries in the top-clients leaderboard.
pub const TOP_CLIENTS_LIMIT: i64 = 5;

/// Percentage of completed tasks, rounded to two decimal places.
///
/// Returns `0.0` when there are no tasks.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let rate = Decimal::from(completed) * Decimal::ONE_HUNDRED / Decimal::from(total);
    rate.round_dp(2).to_f64().unwrap_or(0.0)
}

/// Tasks that are not yet completed.
pub fn pending_tasks(total: i64, completed: i64) -> i64 {
    (total - completed).max(0)
}

/// Start of the "recent projects" window: midnight UTC, `RECENT_WINDOW_DAYS`
/// calendar days before `now`.
pub fn recent_cutoff(now: Timestamp) -> Timestamp {
    let day = now.date_naive() - Duration::days(RECENT_WINDOW_DAYS);
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Render a money amount as a JSON number.
pub fn money_to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}
