//! Current-conditions client for a wttr.in-compatible weather service.
//!
//! Requests `GET {base}/{city}?format=j1` and flattens the first
//! `current_condition` entry into display strings with units attached.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use crate::ClientBuildError;

pub const DEFAULT_WEATHER_API_URL: &str = "https://wttr.in";
pub const DEFAULT_CITY: &str = "London";
pub const WEATHER_SOURCE: &str = "wttr.in Weather API";

/// Placeholder for any field missing from the upstream payload.
const MISSING: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The service answered with a non-200 status.
    #[error("Failed to fetch weather data")]
    HttpStatus(u16),

    /// Network failure, timeout or an undecodable body.
    #[error("Weather API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Current conditions, every value rendered as a string with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentWeather {
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
    pub feels_like: String,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub current: CurrentWeather,
}

pub struct WeatherClient {
    client: reqwest::Client,
    base_url: Url,
}

impl WeatherClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientBuildError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// URL for `city`, with the city percent-encoded as one path segment.
    pub fn lookup_url(&self, city: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(city);
        }
        url.query_pairs_mut().append_pair("format", "j1");
        url
    }

    /// Fetch current conditions for `city`.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let url = self.lookup_url(city);
        tracing::debug!(%url, "Requesting weather");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(city, status = status.as_u16(), "Weather API returned an error status");
            return Err(WeatherError::HttpStatus(status.as_u16()));
        }

        let body: Value = response.json().await?;
        Ok(WeatherReport {
            city: city.to_string(),
            current: extract_current(&body),
        })
    }
}

/// Flatten a `format=j1` payload. Missing values become `"N/A"` and keep
/// their unit suffix.
pub fn extract_current(body: &Value) -> CurrentWeather {
    let current = body.get("current_condition").and_then(|c| c.get(0));
    let field = |key: &str| {
        current
            .and_then(|c| c.get(key))
            .and_then(scalar_text)
            .unwrap_or_else(|| MISSING.to_string())
    };
    let condition = current
        .and_then(|c| c.get("weatherDesc"))
        .and_then(|d| d.get(0))
        .and_then(|d| d.get("value"))
        .and_then(scalar_text)
        .unwrap_or_else(|| MISSING.to_string());

    CurrentWeather {
        temperature: format!("{}°C", field("temp_C")),
        condition,
        humidity: format!("{}%", field("humidity")),
        wind_speed: format!("{} km/h", field("windspeedKmph")),
        feels_like: format!("{}°C", field("FeelsLikeC")),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
