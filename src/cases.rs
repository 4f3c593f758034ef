//! Reported case counts per NCR city
//!
//! Seeded surveillance figures for the cases table, pending a database
//! feed. Rows are kept sorted by case count descending.

use crate::models::AreaRisk;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the cases table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseReport {
    pub city: String,
    pub cases: u32,
    pub risk: AreaRisk,
    pub last_updated: NaiveDate,
    /// Badge classes derived from the risk tier
    pub badge_classes: String,
}

impl CaseReport {
    fn new(city: &str, cases: u32, risk: AreaRisk, last_updated: NaiveDate) -> Self {
        Self {
            city: city.to_string(),
            cases,
            risk,
            last_updated,
            badge_classes: risk.badge_classes().to_string(),
        }
    }
}

/// Per-tier slice of the risk distribution chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskSlice {
    pub risk: AreaRisk,
    pub count: usize,
    pub color: String,
}

/// Seeded case reports, sorted by case count descending
#[must_use]
pub fn seeded_reports() -> Vec<CaseReport> {
    let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).expect("valid seed date");
    let mut reports = vec![
        CaseReport::new("Quezon City", 247, AreaRisk::High, d(15)),
        CaseReport::new("Manila", 128, AreaRisk::High, d(15)),
        CaseReport::new("Caloocan", 87, AreaRisk::High, d(14)),
        CaseReport::new("Las Piñas", 65, AreaRisk::Moderate, d(14)),
        CaseReport::new("Makati", 45, AreaRisk::Moderate, d(14)),
        CaseReport::new("Malabon", 38, AreaRisk::Moderate, d(13)),
        CaseReport::new("Mandaluyong", 32, AreaRisk::Moderate, d(13)),
        CaseReport::new("Marikina", 28, AreaRisk::Moderate, d(13)),
        CaseReport::new("Muntinlupa", 25, AreaRisk::Low, d(12)),
        CaseReport::new("Navotas", 22, AreaRisk::Low, d(12)),
        CaseReport::new("Parañaque", 19, AreaRisk::Low, d(12)),
        CaseReport::new("Pasay", 16, AreaRisk::Low, d(11)),
        CaseReport::new("Pasig", 14, AreaRisk::Low, d(11)),
        CaseReport::new("San Juan", 12, AreaRisk::Low, d(11)),
        CaseReport::new("Taguig", 10, AreaRisk::Low, d(10)),
        CaseReport::new("Valenzuela", 8, AreaRisk::Low, d(10)),
        CaseReport::new("Pateros", 5, AreaRisk::Low, d(10)),
    ];
    reports.sort_by(|a, b| b.cases.cmp(&a.cases));
    reports
}

/// Count reports per risk tier for the distribution chart
#[must_use]
pub fn risk_distribution(reports: &[CaseReport]) -> Vec<RiskSlice> {
    AreaRisk::ALL
        .iter()
        .map(|&risk| RiskSlice {
            risk,
            count: reports.iter().filter(|r| r.risk == risk).count(),
            color: risk.chart_color().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_sorted_by_cases_descending() {
        let reports = seeded_reports();
        assert_eq!(reports.len(), 17);
        assert_eq!(reports[0].city, "Quezon City");
        for pair in reports.windows(2) {
            assert!(pair[0].cases >= pair[1].cases);
        }
    }

    #[test]
    fn test_badge_classes_follow_risk_tier() {
        for report in seeded_reports() {
            assert_eq!(report.badge_classes, report.risk.badge_classes());
        }
    }

    #[test]
    fn test_risk_distribution_counts() {
        let slices = risk_distribution(&seeded_reports());
        assert_eq!(slices.len(), 4);
        let total: usize = slices.iter().map(|s| s.count).sum();
        assert_eq!(total, 17);

        let high = slices.iter().find(|s| s.risk == AreaRisk::High).unwrap();
        assert_eq!(high.count, 3);
        let very_high = slices.iter().find(|s| s.risk == AreaRisk::VeryHigh).unwrap();
        assert_eq!(very_high.count, 0);
        assert_eq!(very_high.color, "#dc2626");
    }
}
