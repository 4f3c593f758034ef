//! Weather provider client for WeatherAPI integration
//!
//! One GET per advisory cycle against the WeatherAPI forecast endpoint.
//! The engine applies no retry and no backoff of its own; whatever the
//! transport surfaces is collapsed into a single [`FetchFailure`].

use crate::config::DengueWatchConfig;
use crate::error::FetchFailure;
use crate::models::FORECAST_DAYS;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Seam between the advisory engine and the weather transport
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch a validated 14-day forecast for a location query
    async fn fetch_forecast(&self, location: &str) -> std::result::Result<ProviderForecast, FetchFailure>;
}

/// Validated forecast payload: current temperature plus exactly
/// [`FORECAST_DAYS`] days in provider order, index 0 = today.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderForecast {
    pub temperature_c: f64,
    pub days: Vec<ProviderDay>,
}

/// One validated forecast day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDay {
    pub date: NaiveDate,
    /// Rain probability clamped to 0-100
    pub rain_chance: u8,
}

impl TryFrom<weatherapi::ForecastResponse> for ProviderForecast {
    type Error = FetchFailure;

    fn try_from(response: weatherapi::ForecastResponse) -> std::result::Result<Self, FetchFailure> {
        let entries = response.forecast.forecastday;
        if entries.len() != FORECAST_DAYS {
            return Err(FetchFailure::new(format!(
                "expected {FORECAST_DAYS} forecast days, provider returned {}",
                entries.len()
            )));
        }

        let mut days = Vec::with_capacity(FORECAST_DAYS);
        for entry in entries {
            let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d")
                .map_err(|e| FetchFailure::new(format!("bad forecast date '{}': {e}", entry.date)))?;
            let rain_chance = entry.day.daily_chance_of_rain.clamp(0.0, 100.0).round() as u8;
            days.push(ProviderDay { date, rain_chance });
        }

        Ok(ProviderForecast {
            temperature_c: response.current.temp_c,
            days,
        })
    }
}

/// HTTP client for the WeatherAPI forecast endpoint
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    /// Create a new weather API client from configuration
    pub fn new(config: &DengueWatchConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("DengueWatch/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.weather.api_key.clone(),
            base_url: config.weather.base_url.clone(),
        })
    }

    fn forecast_url(&self, location: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(location),
            FORECAST_DAYS
        )
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiClient {
    #[instrument(skip(self))]
    async fn fetch_forecast(&self, location: &str) -> std::result::Result<ProviderForecast, FetchFailure> {
        debug!("Requesting {FORECAST_DAYS}-day forecast for '{location}'");

        let response = self.client.get(self.forecast_url(location)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Weather provider returned {status} for '{location}'");
            return Err(FetchFailure::new(format!("provider returned {status}")));
        }

        let payload: weatherapi::ForecastResponse = response
            .json()
            .await
            .map_err(|e| FetchFailure::new(format!("malformed forecast payload: {e}")))?;

        ProviderForecast::try_from(payload)
    }
}

/// WeatherAPI response structures
pub mod weatherapi {
    use serde::Deserialize;

    /// Forecast response from WeatherAPI
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Current,
        pub forecast: Forecast,
    }

    /// Current conditions block
    #[derive(Debug, Deserialize)]
    pub struct Current {
        pub temp_c: f64,
    }

    /// Forecast block wrapping the per-day entries
    #[derive(Debug, Deserialize)]
    pub struct Forecast {
        pub forecastday: Vec<ForecastDayEntry>,
    }

    /// One forecast day as returned by the provider
    #[derive(Debug, Deserialize)]
    pub struct ForecastDayEntry {
        /// Calendar date, `YYYY-MM-DD`
        pub date: String,
        pub day: Day,
    }

    /// Daily aggregates; only the rain probability is consumed
    #[derive(Debug, Deserialize)]
    pub struct Day {
        pub daily_chance_of_rain: f64,
    }
}
