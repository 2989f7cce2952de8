//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

use serde::{Deserialize, Deserializer};

pub mod dashboard;
pub mod project;
pub mod status;
pub mod task;

/// Deserialize a present field into `Some`, so an explicit `null` becomes
/// `Some(None)` while an absent field (via `#[serde(default)]`) stays `None`.
///
/// Used for nullable columns that a PATCH must be able to clear.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
