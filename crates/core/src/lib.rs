//! Domain logic shared by the taskboard crates.
//!
//! Nothing in here touches the database or the network; callers pass data
//! in and get plain values (or [`error::CoreError`]) back.

pub mod dashboard;
pub mod error;
pub mod types;
pub mod validation;
