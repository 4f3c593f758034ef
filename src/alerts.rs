//! Outbreak alerts and per-city response recommendations
//!
//! Alert records with severity filtering, and the `RecommendationBook` —
//! an owned map of per-city assessment and recommended actions with an
//! explicit fallback entry. Updating a city's guidance is an observable
//! operation on the book and also rewrites that city's active alerts.

use crate::models::AreaRisk;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One surveillance alert shown on the alerts page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub id: u32,
    pub title: String,
    pub location: String,
    /// Case count summary, e.g. "247 this week"
    pub cases: String,
    /// Week-over-week increase, e.g. "120%"
    pub increase: String,
    pub assessment: String,
    pub updated: String,
    /// Status banner, e.g. "CRITICAL ALERT"
    pub status: String,
    pub severity: AreaRisk,
    pub recommended_actions: Vec<String>,
}

/// Severity filter parsed from the alerts page filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Only(AreaRisk),
}

impl std::str::FromStr for SeverityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SeverityFilter::All)
        } else {
            s.parse::<AreaRisk>().map(SeverityFilter::Only)
        }
    }
}

/// Assessment and recommended actions for one city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub assessment: String,
    pub recommended_actions: Vec<String>,
}

impl Recommendation {
    fn new(assessment: &str, actions: &[&str]) -> Self {
        Self {
            assessment: assessment.to_string(),
            recommended_actions: actions.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Read-only-by-default map of per-city guidance with a fallback entry.
///
/// Lookups for cities without an entry resolve to the fallback, so `get`
/// is total. `update` replaces a city's entry in place.
#[derive(Debug, Clone)]
pub struct RecommendationBook {
    entries: HashMap<String, Recommendation>,
    fallback: Recommendation,
}

impl RecommendationBook {
    /// Seeded per-city guidance for the NCR dashboard
    #[must_use]
    pub fn seeded() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "Manila".to_string(),
            Recommendation::new(
                "This area has exceeded the epidemic threshold with a rapid increase in cases.",
                &[
                    "Conduct immediate fogging operations",
                    "Deploy additional medical teams",
                    "Issue public health advisory",
                ],
            ),
        );
        entries.insert(
            "Quezon City".to_string(),
            Recommendation::new(
                "This area is approaching the epidemic threshold with moderate increase in cases.",
                &[
                    "Increase public awareness campaigns",
                    "Schedule neighborhood cleanups",
                    "Monitor high-risk areas daily",
                ],
            ),
        );
        entries.insert(
            "Caloocan".to_string(),
            Recommendation::new(
                "This area is being monitored for potential outbreak.",
                &[
                    "Conduct immediate fogging operations",
                    "Deploy additional medical teams",
                    "Issue public health advisory",
                ],
            ),
        );

        let fallback = Recommendation::new(
            "This area is being monitored for potential outbreak.",
            &[
                "Continue routine inspections",
                "Educate residents on prevention",
                "Maintain mosquito control measures",
            ],
        );

        Self { entries, fallback }
    }

    /// Guidance for a city, falling back to the default entry
    #[must_use]
    pub fn get(&self, city: &str) -> &Recommendation {
        self.entries.get(city).unwrap_or(&self.fallback)
    }

    /// Replace (or create) a city's guidance
    pub fn update(&mut self, city: &str, recommendation: Recommendation) {
        self.entries.insert(city.to_string(), recommendation);
    }
}

/// Alert list plus the recommendation book behind one handle
#[derive(Debug, Clone)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    recommendations: RecommendationBook,
}

impl AlertBoard {
    /// Seeded alert records for the NCR dashboard
    #[must_use]
    pub fn seeded() -> Self {
        let alerts = vec![
            Alert {
                id: 1,
                title: "Quezon City Outbreak".to_string(),
                location: "Quezon City".to_string(),
                cases: "247 this week".to_string(),
                increase: "120%".to_string(),
                assessment:
                    "This area has exceeded the epidemic threshold with a rapid increase in cases."
                        .to_string(),
                updated: "Today, 10:45 AM".to_string(),
                status: "CRITICAL ALERT".to_string(),
                severity: AreaRisk::High,
                recommended_actions: vec![
                    "Conduct immediate fogging operations".to_string(),
                    "Deploy additional medical teams".to_string(),
                    "Issue public health advisory".to_string(),
                ],
            },
            Alert {
                id: 2,
                title: "Manila Cluster".to_string(),
                location: "Manila".to_string(),
                cases: "87 this week".to_string(),
                increase: "45%".to_string(),
                assessment:
                    "This area is approaching the epidemic threshold with moderate increase in cases."
                        .to_string(),
                updated: "Today, 8:30 AM".to_string(),
                status: "MODERATE ALERT".to_string(),
                severity: AreaRisk::Moderate,
                recommended_actions: vec![
                    "Increase public awareness campaigns".to_string(),
                    "Schedule neighborhood cleanups".to_string(),
                    "Monitor high-risk areas daily".to_string(),
                ],
            },
            Alert {
                id: 3,
                title: "Makati Monitoring".to_string(),
                location: "Makati".to_string(),
                cases: "23 this week".to_string(),
                increase: "15%".to_string(),
                assessment: "This area is being monitored for potential outbreak.".to_string(),
                updated: "Yesterday, 4:15 PM".to_string(),
                status: "LOW ALERT".to_string(),
                severity: AreaRisk::Low,
                recommended_actions: vec![
                    "Continue routine inspections".to_string(),
                    "Educate residents on prevention".to_string(),
                    "Maintain mosquito control measures".to_string(),
                ],
            },
        ];

        Self {
            alerts,
            recommendations: RecommendationBook::seeded(),
        }
    }

    #[must_use]
    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts matching a severity filter
    #[must_use]
    pub fn filtered(&self, filter: SeverityFilter) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|alert| match filter {
                SeverityFilter::All => true,
                SeverityFilter::Only(severity) => alert.severity == severity,
            })
            .collect()
    }

    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    #[must_use]
    pub fn recommendations(&self) -> &RecommendationBook {
        &self.recommendations
    }

    /// Update a city's guidance and rewrite its active alerts to match
    pub fn update_city_guidance(&mut self, city: &str, recommendation: Recommendation) {
        for alert in self.alerts.iter_mut().filter(|a| a.location == city) {
            alert.assessment = recommendation.assessment.clone();
            alert.recommended_actions = recommendation.recommended_actions.clone();
        }
        self.recommendations.update(city, recommendation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_city_resolves_to_fallback() {
        let book = RecommendationBook::seeded();
        let rec = book.get("Pateros");
        assert_eq!(rec.assessment, "This area is being monitored for potential outbreak.");
        assert!(rec
            .recommended_actions
            .contains(&"Continue routine inspections".to_string()));
    }

    #[test]
    fn test_update_is_observable() {
        let mut book = RecommendationBook::seeded();
        let replacement = Recommendation::new("Cases declining.", &["Scale down fogging"]);
        book.update("Manila", replacement.clone());
        assert_eq!(book.get("Manila"), &replacement);
        // Other entries are untouched
        assert_ne!(book.get("Quezon City"), &replacement);
    }

    #[test]
    fn test_update_rewrites_active_alerts() {
        let mut board = AlertBoard::seeded();
        let replacement = Recommendation::new("Threshold crossed.", &["Open evacuation centers"]);
        board.update_city_guidance("Manila", replacement.clone());

        let alert = board.by_id(2).unwrap();
        assert_eq!(alert.assessment, "Threshold crossed.");
        assert_eq!(alert.recommended_actions, replacement.recommended_actions);
        // The Quezon City alert keeps its own guidance
        assert_ne!(board.by_id(1).unwrap().assessment, "Threshold crossed.");
    }

    #[test]
    fn test_filter_by_severity() {
        let board = AlertBoard::seeded();
        assert_eq!(board.filtered(SeverityFilter::All).len(), 3);

        let high = board.filtered(SeverityFilter::Only(AreaRisk::High));
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].location, "Quezon City");

        let very_high = board.filtered(SeverityFilter::Only(AreaRisk::VeryHigh));
        assert!(very_high.is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<SeverityFilter>(), Ok(SeverityFilter::All));
        assert_eq!(
            "moderate".parse::<SeverityFilter>(),
            Ok(SeverityFilter::Only(AreaRisk::Moderate))
        );
        assert!("severe".parse::<SeverityFilter>().is_err());
    }

    #[test]
    fn test_lookup_by_id() {
        let board = AlertBoard::seeded();
        assert_eq!(board.by_id(3).unwrap().location, "Makati");
        assert!(board.by_id(99).is_none());
    }
}
