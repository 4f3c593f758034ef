//! Risk Advisory Engine
//!
//! The single entry point of the advisory cycle: fetch a 14-day forecast
//! through the provider seam, classify today's outbreak risk, synthesize
//! the trailing week, and assemble the complete rendering model. Two
//! terminal outcomes only — a fully populated [`AdvisoryModel`] or a
//! [`FetchFailure`] with no partial data.

use crate::error::FetchFailure;
use crate::models::{
    AdvisoryModel, CurrentConditions, ForecastDay, RiskAssessment, TrailingDay, TRAILING_DAYS,
};
use crate::weather::{ForecastProvider, ProviderForecast};
use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::RngExt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct AdvisoryEngine {
    provider: Arc<dyn ForecastProvider>,
    default_location: String,
}

impl AdvisoryEngine {
    pub fn new(provider: Arc<dyn ForecastProvider>, default_location: String) -> Self {
        Self {
            provider,
            default_location,
        }
    }

    /// Compute an advisory for a location query.
    ///
    /// An empty query falls back to the configured default location. The
    /// engine issues one outbound request per call, with no retry and no
    /// caching; all state lives for the duration of the call.
    #[instrument(skip(self))]
    pub async fn compute(&self, location: &str) -> Result<AdvisoryModel, FetchFailure> {
        let location = if location.trim().is_empty() {
            debug!("Empty location query, using default '{}'", self.default_location);
            self.default_location.as_str()
        } else {
            location
        };

        let forecast = self.provider.fetch_forecast(location).await?;

        let now = Utc::now();
        let trailing_week = synthesize_trailing_week(now.date_naive());
        let model = build_model(location, &forecast, trailing_week, now);

        info!(
            "Computed {} advisory for '{}' ({}% rain today)",
            model.assessment.level, location, model.current.rain_chance_today
        );
        Ok(model)
    }
}

/// Assemble the rendering model from a validated provider forecast.
///
/// Deterministic in everything but the trailing window, which is passed in
/// so identical provider responses yield identical conditions, forecast
/// sequence, and assessment.
#[must_use]
pub fn build_model(
    location: &str,
    forecast: &ProviderForecast,
    trailing_week: Vec<TrailingDay>,
    generated_at: DateTime<Utc>,
) -> AdvisoryModel {
    // Length is validated when the provider payload is parsed
    let today = &forecast.days[0];

    let current = CurrentConditions {
        temperature_c: forecast.temperature_c.round() as i32,
        rain_chance_today: today.rain_chance,
    };

    let forecast_window: Vec<ForecastDay> = forecast
        .days
        .iter()
        .map(|day| ForecastDay {
            date: day.date,
            rain_chance: day.rain_chance,
        })
        .collect();

    AdvisoryModel {
        location: location.to_string(),
        assessment: RiskAssessment::from_rain_chance(today.rain_chance),
        current,
        trailing_week,
        forecast: forecast_window,
        generated_at,
    }
}

/// Synthesize the 7-day trailing window ending today.
///
/// The provider exposes no historical data, so these are illustrative
/// placeholders with fresh randomness on every invocation.
#[must_use]
pub fn synthesize_trailing_week(today: NaiveDate) -> Vec<TrailingDay> {
    let mut rng = rand::rng();
    (0..TRAILING_DAYS)
        .rev()
        .map(|offset| {
            let date = today
                .checked_sub_days(Days::new(offset as u64))
                .unwrap_or(today);
            TrailingDay {
                date,
                rain_chance: rng.random_range(0..100),
            }
        })
        .collect()
}
