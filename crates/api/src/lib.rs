//! Taskboard API server library.
//!
//! Exposes config, state, error handling and the assembled router so that
//! integration tests and the binaries share one construction path.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
pub mod telemetry;
