//! Data models for the `DengueWatch` application
//!
//! Core domain types for the risk advisory engine: outbreak risk levels,
//! current conditions, forecast windows, and the aggregated advisory model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of days in the provider forecast window
pub const FORECAST_DAYS: usize = 14;

/// Number of days in the synthetic trailing window
pub const TRAILING_DAYS: usize = 7;

/// Dengue outbreak risk derived from today's rain probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a rain-chance percentage into a risk level.
    ///
    /// Thresholds are exclusive lower bounds evaluated high-to-low; the
    /// first match wins, so the mapping is total and non-overlapping.
    #[must_use]
    pub fn classify(rain_chance: u8) -> Self {
        if rain_chance > 70 {
            RiskLevel::Critical
        } else if rain_chance > 50 {
            RiskLevel::High
        } else if rain_chance > 30 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Public health advisory sentence for this tier
    #[must_use]
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::Critical => {
                "Very high rain probability increases standing water. Expect increased mosquito activity."
            }
            RiskLevel::High => {
                "Frequent rain expected. Check and eliminate standing water around your area."
            }
            RiskLevel::Medium => {
                "Moderate rain probability. Stay alert and continue preventive actions."
            }
            RiskLevel::Low => {
                "Normal weather conditions. Maintain regular prevention measures."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Per-area surveillance risk tier used by the cases table and alerts.
///
/// A deliberately closed four-tier palette; each tier owns its badge
/// styling and chart color so no string-keyed lookup can drift out of sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AreaRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl AreaRisk {
    pub const ALL: [AreaRisk; 4] = [
        AreaRisk::Low,
        AreaRisk::Moderate,
        AreaRisk::High,
        AreaRisk::VeryHigh,
    ];

    /// CSS badge classes for the cases table
    #[must_use]
    pub fn badge_classes(&self) -> &'static str {
        match self {
            AreaRisk::Low => "bg-green-100 text-green-800",
            AreaRisk::Moderate => "bg-yellow-100 text-yellow-800",
            AreaRisk::High => "bg-orange-100 text-orange-800",
            AreaRisk::VeryHigh => "bg-red-100 text-red-800",
        }
    }

    /// Hex color for the risk distribution chart
    #[must_use]
    pub fn chart_color(&self) -> &'static str {
        match self {
            AreaRisk::Low => "#4ade80",
            AreaRisk::Moderate => "#fbbf24",
            AreaRisk::High => "#f87171",
            AreaRisk::VeryHigh => "#dc2626",
        }
    }
}

impl std::fmt::Display for AreaRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaRisk::Low => write!(f, "Low"),
            AreaRisk::Moderate => write!(f, "Moderate"),
            AreaRisk::High => write!(f, "High"),
            AreaRisk::VeryHigh => write!(f, "Very High"),
        }
    }
}

impl std::str::FromStr for AreaRisk {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(AreaRisk::Low),
            "moderate" => Ok(AreaRisk::Moderate),
            "high" => Ok(AreaRisk::High),
            "veryhigh" | "very-high" | "very_high" => Ok(AreaRisk::VeryHigh),
            other => Err(format!("unknown risk tier '{other}'")),
        }
    }
}

/// Iconographic category for a day entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkyIcon {
    Sunny,
    PartlyCloudy,
    Rainy,
}

impl SkyIcon {
    #[must_use]
    pub fn for_rain_chance(rain_chance: u8) -> Self {
        if rain_chance > 50 {
            SkyIcon::Rainy
        } else if rain_chance > 30 {
            SkyIcon::PartlyCloudy
        } else {
            SkyIcon::Sunny
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            SkyIcon::Sunny => "☀️",
            SkyIcon::PartlyCloudy => "⛅",
            SkyIcon::Rainy => "🌧️",
        }
    }
}

/// Current weather snapshot for the queried location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentConditions {
    /// Temperature in Celsius, rounded to the nearest degree
    pub temperature_c: i32,
    /// Rain probability for today (0-100)
    pub rain_chance_today: u8,
}

/// One day of the provider forecast window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Rain probability for the day (0-100)
    pub rain_chance: u8,
}

/// One day of the synthetic trailing window.
///
/// Placeholder for historical data the provider does not expose; values are
/// randomized on every invocation and never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrailingDay {
    pub date: NaiveDate,
    pub rain_chance: u8,
}

/// Risk level plus the advisory sentence shown to the public
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub advisory: String,
}

impl RiskAssessment {
    /// Derive the assessment from today's rain probability
    #[must_use]
    pub fn from_rain_chance(rain_chance: u8) -> Self {
        let level = RiskLevel::classify(rain_chance);
        Self {
            level,
            advisory: level.advisory().to_string(),
        }
    }
}

/// Complete rendering model produced by one advisory cycle.
///
/// Always fully populated: a failed fetch produces no model at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryModel {
    /// Location the advisory was computed for
    pub location: String,
    pub current: CurrentConditions,
    pub assessment: RiskAssessment,
    /// Exactly [`TRAILING_DAYS`] synthetic entries, oldest first
    pub trailing_week: Vec<TrailingDay>,
    /// Exactly [`FORECAST_DAYS`] entries in provider order, today first
    pub forecast: Vec<ForecastDay>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, RiskLevel::Low)]
    #[case(30, RiskLevel::Low)]
    #[case(31, RiskLevel::Medium)]
    #[case(50, RiskLevel::Medium)]
    #[case(51, RiskLevel::High)]
    #[case(70, RiskLevel::High)]
    #[case(71, RiskLevel::Critical)]
    #[case(100, RiskLevel::Critical)]
    fn test_classify_boundaries(#[case] rain_chance: u8, #[case] expected: RiskLevel) {
        assert_eq!(RiskLevel::classify(rain_chance), expected);
    }

    #[test]
    fn test_classify_is_total() {
        for rain_chance in 0..=100u8 {
            // Every input maps to exactly one of the four tiers
            let _ = RiskLevel::classify(rain_chance);
        }
    }

    #[test]
    fn test_critical_advisory_text() {
        let assessment = RiskAssessment::from_rain_chance(85);
        assert_eq!(assessment.level, RiskLevel::Critical);
        assert_eq!(
            assessment.advisory,
            "Very high rain probability increases standing water. Expect increased mosquito activity."
        );
    }

    #[test]
    fn test_low_advisory_below_threshold() {
        let assessment = RiskAssessment::from_rain_chance(25);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(
            assessment.advisory,
            "Normal weather conditions. Maintain regular prevention measures."
        );
    }

    #[rstest]
    #[case(0, SkyIcon::Sunny)]
    #[case(30, SkyIcon::Sunny)]
    #[case(31, SkyIcon::PartlyCloudy)]
    #[case(50, SkyIcon::PartlyCloudy)]
    #[case(51, SkyIcon::Rainy)]
    #[case(100, SkyIcon::Rainy)]
    fn test_sky_icon_thresholds(#[case] rain_chance: u8, #[case] expected: SkyIcon) {
        assert_eq!(SkyIcon::for_rain_chance(rain_chance), expected);
    }

    #[test]
    fn test_area_risk_palette_is_distinct() {
        let badges: Vec<_> = AreaRisk::ALL.iter().map(AreaRisk::badge_classes).collect();
        let colors: Vec<_> = AreaRisk::ALL.iter().map(AreaRisk::chart_color).collect();
        for i in 0..badges.len() {
            for j in (i + 1)..badges.len() {
                assert_ne!(badges[i], badges[j]);
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn test_area_risk_parsing() {
        assert_eq!("high".parse::<AreaRisk>(), Ok(AreaRisk::High));
        assert_eq!("VeryHigh".parse::<AreaRisk>(), Ok(AreaRisk::VeryHigh));
        assert!("epidemic".parse::<AreaRisk>().is_err());
    }
}
