//! Rendering model for the dashboard surface
//!
//! Pure mapping from an [`AdvisoryModel`] to the display fields the
//! frontend consumes, plus the fixed degraded state shown when a fetch
//! fails. The service never mutates a rendering surface directly; it hands
//! over one of these snapshots.

use crate::models::{AdvisoryModel, SkyIcon};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder marker for numeric/text fields when data is unavailable
pub const UNAVAILABLE: &str = "N/A";

/// Notice shown in place of a day list when data is unavailable
pub const UNAVAILABLE_NOTICE: &str = "Weather data unavailable";

/// One day entry in the trailing or forecast strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayCell {
    /// Weekday label, e.g. "Sat"
    pub label: String,
    /// Short date, `day/month`
    pub short_date: String,
    /// Rain probability string, e.g. "85%"
    pub rain_chance: String,
    pub icon: SkyIcon,
}

impl DayCell {
    fn new(date: NaiveDate, rain_chance: u8) -> Self {
        Self {
            label: date.format("%a").to_string(),
            short_date: format!("{}/{}", date.day(), date.month()),
            rain_chance: format!("{rain_chance}%"),
            icon: SkyIcon::for_rain_chance(rain_chance),
        }
    }
}

/// A day strip, or a single unavailable notice in its place
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DayStrip {
    Days(Vec<DayCell>),
    Unavailable(String),
}

/// Complete display snapshot for one advisory cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardView {
    pub location: String,
    /// e.g. "31°C"
    pub temperature: String,
    /// e.g. "85%"
    pub rain_probability: String,
    pub risk_level: String,
    pub advisory: String,
    /// Local wall-clock time of the last successful update
    pub updated_at: String,
    pub trailing_week: DayStrip,
    pub forecast: DayStrip,
}

impl DashboardView {
    /// Build the display snapshot from a successful advisory cycle
    #[must_use]
    pub fn from_model(model: &AdvisoryModel) -> Self {
        let trailing = model
            .trailing_week
            .iter()
            .map(|day| DayCell::new(day.date, day.rain_chance))
            .collect();
        let forecast = model
            .forecast
            .iter()
            .map(|day| DayCell::new(day.date, day.rain_chance))
            .collect();

        Self {
            location: model.location.clone(),
            temperature: format!("{}°C", model.current.temperature_c),
            rain_probability: format!("{}%", model.current.rain_chance_today),
            risk_level: model.assessment.level.to_string(),
            advisory: model.assessment.advisory.clone(),
            updated_at: model.generated_at.format("%H:%M:%S").to_string(),
            trailing_week: DayStrip::Days(trailing),
            forecast: DayStrip::Days(forecast),
        }
    }

    /// Fixed degraded state: every field carries its unavailable marker,
    /// and both day strips collapse to a single notice.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            location: String::new(),
            temperature: UNAVAILABLE.to_string(),
            rain_probability: UNAVAILABLE.to_string(),
            risk_level: "Unknown".to_string(),
            advisory: "Weather data unavailable.".to_string(),
            updated_at: UNAVAILABLE.to_string(),
            trailing_week: DayStrip::Unavailable(UNAVAILABLE_NOTICE.to_string()),
            forecast: DayStrip::Unavailable(UNAVAILABLE_NOTICE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{build_model, synthesize_trailing_week};
    use crate::weather::tests::fixture_response;
    use crate::weather::ProviderForecast;
    use chrono::Utc;

    fn sample_view(today_rain: u8) -> DashboardView {
        let forecast = ProviderForecast::try_from(fixture_response(today_rain, 14)).unwrap();
        let model = build_model(
            "Manila",
            &forecast,
            synthesize_trailing_week(Utc::now().date_naive()),
            Utc::now(),
        );
        DashboardView::from_model(&model)
    }

    #[test]
    fn test_display_fields_are_formatted() {
        let view = sample_view(85);
        assert_eq!(view.temperature, "31°C");
        assert_eq!(view.rain_probability, "85%");
        assert_eq!(view.risk_level, "Critical");
        assert!(view.advisory.contains("mosquito activity"));
    }

    #[test]
    fn test_day_strips_are_fully_populated() {
        let view = sample_view(40);
        match (&view.trailing_week, &view.forecast) {
            (DayStrip::Days(trailing), DayStrip::Days(forecast)) => {
                assert_eq!(trailing.len(), 7);
                assert_eq!(forecast.len(), 14);
            }
            _ => panic!("successful cycle must populate both day strips"),
        }
    }

    #[test]
    fn test_day_cell_formatting() {
        let cell = DayCell::new(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(), 55);
        assert_eq!(cell.label, "Sat");
        assert_eq!(cell.short_date, "1/8");
        assert_eq!(cell.rain_chance, "55%");
        assert_eq!(cell.icon, SkyIcon::Rainy);
    }

    #[test]
    fn test_unavailable_view_placeholders() {
        let view = DashboardView::unavailable();
        assert_eq!(view.temperature, "N/A");
        assert_eq!(view.rain_probability, "N/A");
        assert_eq!(view.risk_level, "Unknown");
        assert_eq!(view.advisory, "Weather data unavailable.");
        assert_eq!(view.updated_at, "N/A");
        assert_eq!(
            view.trailing_week,
            DayStrip::Unavailable("Weather data unavailable".to_string())
        );
        assert_eq!(
            view.forecast,
            DayStrip::Unavailable("Weather data unavailable".to_string())
        );
    }

    #[test]
    fn test_day_strip_serializes_untagged() {
        let notice = DayStrip::Unavailable(UNAVAILABLE_NOTICE.to_string());
        let json = serde_json::to_string(&notice).unwrap();
        assert_eq!(json, "\"Weather data unavailable\"");

        let days = DayStrip::Days(vec![DayCell::new(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            10,
        )]);
        let json = serde_json::to_string(&days).unwrap();
        assert!(json.starts_with('['));
    }
}
