//! Serializable comparison report.
//!
//! This is the hand-off point to whatever renders charts or maps: a flat,
//! stable shape with every facility and the deliveries it serves.

use serde::{Deserialize, Serialize};

use crate::catalog::STUDY_AREA_CENTER;
use crate::comparator::{Comparison, StrategyOutcome};
use crate::error::PlannerResult;
use crate::model::{AssignedDelivery, FacilityLoad, GeoPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub map_center: GeoPoint,
    pub best: Option<String>,
    pub worst: Option<String>,
    pub improvement_pct: f64,
    pub strategies: Vec<StrategyReport>,
    pub failures: Vec<FailureReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub label: String,
    pub is_best: bool,
    pub is_worst: bool,
    pub facility_count: usize,
    pub active_facility_count: usize,
    pub delivery_point_count: usize,
    pub total_distance_km: f64,
    pub average_distance_km: f64,
    pub facilities: Vec<FacilityReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityReport {
    pub id: usize,
    pub name: String,
    pub site: String,
    pub location: GeoPoint,
    pub snap_distance_km: Option<f64>,
    pub delivery_count: usize,
    pub total_distance_km: f64,
    pub deliveries: Vec<AssignedDelivery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub label: String,
    pub error: String,
}

impl FacilityReport {
    fn from_load(load: &FacilityLoad) -> Self {
        Self {
            id: load.facility.id,
            name: load.facility.display_name(),
            site: load.facility.site.clone(),
            location: load.facility.location,
            snap_distance_km: load.facility.snap_distance_km,
            delivery_count: load.delivery_count(),
            total_distance_km: load.total_distance_km(),
            deliveries: load.deliveries.clone(),
        }
    }
}

impl StrategyReport {
    fn from_outcome(rank: usize, outcome: &StrategyOutcome, last_rank: usize) -> Self {
        let metrics = &outcome.metrics;
        Self {
            rank,
            label: outcome.label.clone(),
            is_best: rank == 1,
            is_worst: rank == last_rank,
            facility_count: metrics.facility_count,
            active_facility_count: metrics.active_facility_count,
            delivery_point_count: metrics.delivery_point_count,
            total_distance_km: metrics.total_distance_km,
            average_distance_km: metrics.average_distance_km,
            facilities: metrics.facilities.iter().map(FacilityReport::from_load).collect(),
        }
    }
}

impl ComparisonReport {
    pub fn from_comparison(comparison: &Comparison) -> Self {
        let last_rank = comparison.ranked.len();
        Self {
            map_center: STUDY_AREA_CENTER,
            best: comparison.best().map(|o| o.label.clone()),
            worst: comparison.worst().map(|o| o.label.clone()),
            improvement_pct: comparison.improvement_pct(),
            strategies: comparison
                .ranked
                .iter()
                .enumerate()
                .map(|(i, outcome)| StrategyReport::from_outcome(i + 1, outcome, last_rank))
                .collect(),
            failures: comparison
                .failed
                .iter()
                .map(|f| FailureReport {
                    label: f.label.clone(),
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> PlannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable headline and one line per strategy.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(best) = &self.best {
            lines.push(format!(
                "Strategy {} gives the best warehouse placement, reducing total travel distance by {:.1}% compared to the worst strategy",
                best, self.improvement_pct
            ));
        }
        for strategy in &self.strategies {
            lines.push(format!(
                "#{} {}: {} warehouses ({} with deliveries), total {:.2} km, avg {:.2} km per delivery",
                strategy.rank,
                strategy.label,
                strategy.facility_count,
                strategy.active_facility_count,
                strategy.total_distance_km,
                strategy.average_distance_km
            ));
        }
        for failure in &self.failures {
            lines.push(format!("{} failed: {}", failure.label, failure.error));
        }
        lines
    }
}
