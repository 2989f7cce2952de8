//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "count": n, "results": [...] }` envelope used by list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Body of a failed external proxy call.
#[derive(Debug, Serialize)]
pub struct ProxyFailure {
    pub success: bool,
    pub error: String,
}

impl ProxyFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
