//! `DengueWatch` - weather-driven dengue outbreak risk advisory service
//!
//! This library provides the risk advisory engine behind the NCR dengue
//! dashboard: weather retrieval, outbreak risk classification, and the
//! rendering model the dashboard displays, plus the alerts and case-table
//! data surfaces.

pub mod advisory;
pub mod alerts;
pub mod api;
pub mod cases;
pub mod config;
pub mod error;
pub mod models;
pub mod refresh;
pub mod render;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisory::AdvisoryEngine;
pub use alerts::{Alert, AlertBoard, Recommendation, RecommendationBook};
pub use config::DengueWatchConfig;
pub use error::{DengueWatchError, FetchFailure};
pub use models::{AdvisoryModel, AreaRisk, CurrentConditions, ForecastDay, RiskAssessment, RiskLevel};
pub use refresh::{DashboardState, GenerationGate};
pub use render::DashboardView;
pub use weather::{ForecastProvider, WeatherApiClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DengueWatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
