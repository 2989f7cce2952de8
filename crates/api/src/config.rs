use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use taskboard_external::quotes::DEFAULT_QUOTE_API_URLS;
use taskboard_external::weather::DEFAULT_WEATHER_API_URL;

/// A configuration variable that was set but could not be used.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var} ('{value}'): {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from the comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Third-party API settings.
    pub external: ExternalConfig,
}

/// Endpoints and limits for the quote and weather proxies.
#[derive(Debug, Clone)]
pub struct ExternalConfig {
    /// Quote APIs, tried in order.
    pub quote_api_urls: Vec<String>,
    /// Base URL of the wttr.in-compatible weather service.
    pub weather_api_url: String,
    /// Per-call timeout for outbound requests.
    pub timeout_secs: u64,
    /// Skip TLS certificate verification for quote APIs.
    pub quote_accept_invalid_certs: bool,
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            quote_api_urls: DEFAULT_QUOTE_API_URLS.iter().map(|u| u.to_string()).collect(),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            timeout_secs: 5,
            quote_accept_invalid_certs: true,
        }
    }
}

impl ExternalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load from environment variables with defaults.
    ///
    /// | Env Var                      | Default                                    |
    /// |------------------------------|--------------------------------------------|
    /// | `QUOTE_API_URLS`             | quotable.io random, quotes.rest qod         |
    /// | `WEATHER_API_URL`            | `https://wttr.in`                          |
    /// | `EXTERNAL_TIMEOUT_SECS`      | `5`                                        |
    /// | `QUOTE_ACCEPT_INVALID_CERTS` | `true`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let quote_api_urls = match std::env::var("QUOTE_API_URLS") {
            Ok(raw) => split_list(&raw),
            Err(_) => defaults.quote_api_urls,
        };

        Ok(Self {
            quote_api_urls,
            weather_api_url: std::env::var("WEATHER_API_URL")
                .unwrap_or(defaults.weather_api_url),
            timeout_secs: parse_var("EXTERNAL_TIMEOUT_SECS", defaults.timeout_secs)?,
            quote_accept_invalid_certs: parse_var(
                "QUOTE_ACCEPT_INVALID_CERTS",
                defaults.quote_accept_invalid_certs,
            )?,
        })
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Fails on the first variable that is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_var("HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_var("PORT", 8000_u16)?;

        let raw_origins =
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());
        let cors_origins = split_list(&raw_origins)
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|e| ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30_u64)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            external: ExternalConfig::from_env()?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Read and parse `var`, falling back to `default` when it is unset.
fn parse_var<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
