use std::sync::Arc;

use taskboard_external::{ClientBuildError, QuoteClient, WeatherClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or is already reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the quote proxy.
    pub quotes: Arc<QuoteClient>,
    /// Client for the weather proxy.
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    /// Build the outbound HTTP clients from `config.external`.
    pub fn new(pool: taskboard_db::DbPool, config: ServerConfig) -> Result<Self, ClientBuildError> {
        let external = &config.external;
        let quotes = QuoteClient::new(
            external.quote_api_urls.clone(),
            external.timeout(),
            external.quote_accept_invalid_certs,
        )?;
        let weather = WeatherClient::new(&external.weather_api_url, external.timeout())?;

        Ok(Self {
            pool,
            config: Arc::new(config),
            quotes: Arc::new(quotes),
            weather: Arc::new(weather),
        })
    }
}
