//! Pass-through endpoints for the quote and weather providers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use taskboard_external::weather::{DEFAULT_CITY, WEATHER_SOURCE};
use taskboard_external::{CurrentWeather, Quote, QuoteOutcome};

use crate::query::WeatherParams;
use crate::response::ProxyFailure;
use crate::state::AppState;

const WEATHER_MESSAGE: &str = "Successfully fetched weather data";

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub source: &'static str,
    pub data: Quote,
    pub message: &'static str,
}

impl From<QuoteOutcome> for QuoteResponse {
    fn from(outcome: QuoteOutcome) -> Self {
        Self {
            success: true,
            source: outcome.source,
            data: outcome.quote,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub source: &'static str,
    pub location: String,
    pub data: CurrentWeather,
    pub message: &'static str,
}

/// GET /api/external/quotes
///
/// Always 200: falls back to a bundled quote when no provider answers.
pub async fn quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let mut rng = StdRng::from_os_rng();
    let outcome = state.quotes.fetch(&mut rng).await;
    tracing::debug!(live = outcome.is_live(), source = outcome.source, "Serving quote");
    Json(QuoteResponse::from(outcome))
}

/// GET /api/external/weather?city=
///
/// 503 with `{success: false, error}` when the provider fails.
pub async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Response {
    let city = params
        .city
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    match state.weather.fetch(&city).await {
        Ok(report) => Json(WeatherResponse {
            success: true,
            source: WEATHER_SOURCE,
            location: report.city,
            data: report.current,
            message: WEATHER_MESSAGE,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(city = %city, error = %e, "Weather lookup failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProxyFailure::new(e.to_string())),
            )
                .into_response()
        }
    }
}
