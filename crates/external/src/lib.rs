//! HTTP clients for the third-party quote and weather providers.
//!
//! Both clients wrap a [`reqwest::Client`] configured with a per-request
//! timeout. The quote client never fails outward (it falls back to a fixed
//! collection); the weather client reports failures as [`WeatherError`].

use std::time::Duration;

pub mod quotes;
pub mod weather;

pub use quotes::{Quote, QuoteClient, QuoteOutcome};
pub use weather::{CurrentWeather, WeatherClient, WeatherError, WeatherReport};

/// Per-request timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    /// The underlying HTTP client could not be built (TLS backend, etc.).
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured endpoint is not a usable base URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
