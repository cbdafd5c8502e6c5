//! Runs every placement strategy end to end and ranks them by total distance.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::assignment::assign;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::model::{CandidateSite, DeliveryPoint, Facility, OptimizationMetrics};
use crate::placement::{place_clustered, place_selected};
use crate::traits::{ClusteringProvider, DistanceProvider};

/// How a strategy produces its facilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Cluster the delivery points into `count` groups.
    Cluster { count: usize },
    /// Use these catalog indices directly.
    Selection(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub label: String,
    pub kind: StrategyKind,
}

impl Strategy {
    pub fn cluster(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            kind: StrategyKind::Cluster { count },
        }
    }

    pub fn selection(label: impl Into<String>, indices: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            kind: StrategyKind::Selection(indices),
        }
    }
}

/// The six strategies the planner compares out of the box.
pub fn default_strategies(config: &PlannerConfig) -> Vec<Strategy> {
    vec![
        Strategy::cluster("K-means", config.cluster_count),
        Strategy::selection("Central Areas", vec![1, 9, 0, 15, 8]),
        Strategy::selection("Distributed", vec![1, 4, 10, 6, 13]),
        Strategy::selection("North-South Corridor", vec![10, 1, 0, 6, 15]),
        Strategy::selection("East-West Corridor", vec![11, 15, 4, 12, 13]),
        Strategy::selection("Population Density", vec![1, 9, 15, 4, 5]),
    ]
}

#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub label: String,
    pub metrics: OptimizationMetrics,
}

#[derive(Debug)]
pub struct StrategyFailure {
    pub label: String,
    pub error: PlannerError,
}

/// Ranked results of a comparison.
#[derive(Debug)]
pub struct Comparison {
    /// Successful runs, shortest total distance first.
    pub ranked: Vec<StrategyOutcome>,
    /// Runs that failed, in strategy order.
    pub failed: Vec<StrategyFailure>,
}

impl Comparison {
    /// Ranks outcomes by ascending total distance.
    ///
    /// The sort is stable, so strategies with equal totals keep the order
    /// they were given in.
    pub fn rank(mut outcomes: Vec<StrategyOutcome>, failed: Vec<StrategyFailure>) -> Self {
        outcomes.sort_by(|a, b| a.metrics.total_distance_km.total_cmp(&b.metrics.total_distance_km));
        Self {
            ranked: outcomes,
            failed,
        }
    }

    pub fn best(&self) -> Option<&StrategyOutcome> {
        self.ranked.first()
    }

    pub fn worst(&self) -> Option<&StrategyOutcome> {
        self.ranked.last()
    }

    /// Percentage by which the best strategy beats the worst.
    ///
    /// `(worst - best) / worst * 100`; 0 when nothing succeeded or the worst
    /// total is 0.
    pub fn improvement_pct(&self) -> f64 {
        match (self.best(), self.worst()) {
            (Some(best), Some(worst)) if worst.metrics.total_distance_km > 0.0 => {
                let worst_km = worst.metrics.total_distance_km;
                (worst_km - best.metrics.total_distance_km) / worst_km * 100.0
            }
            _ => 0.0,
        }
    }
}

/// Compares strategies over a shared, read-only delivery point list.
pub struct Comparator<'a, C, D> {
    pub points: &'a [DeliveryPoint],
    pub catalog: &'a [CandidateSite],
    pub clustering: &'a C,
    pub distance: &'a D,
    pub config: &'a PlannerConfig,
}

impl<'a, C, D> Comparator<'a, C, D>
where
    C: ClusteringProvider + Sync,
    D: DistanceProvider + Sync,
{
    /// Runs placement, assignment and scoring for one strategy.
    pub fn run(&self, strategy: &Strategy) -> PlannerResult<OptimizationMetrics> {
        let span = info_span!("strategy", label = %strategy.label);
        let _guard = span.enter();

        let facilities = self.place(&strategy.kind)?;
        let metrics = assign(&facilities, self.points, self.distance)?.into_metrics();

        info!(
            total_km = metrics.total_distance_km,
            avg_km = metrics.average_distance_km,
            active = metrics.active_facility_count,
            "strategy scored"
        );
        Ok(metrics)
    }

    fn place(&self, kind: &StrategyKind) -> PlannerResult<Vec<Facility>> {
        match kind {
            StrategyKind::Cluster { count } => place_clustered(
                self.points,
                self.catalog,
                *count,
                self.config.seed,
                self.clustering,
                self.distance,
            ),
            StrategyKind::Selection(indices) => place_selected(self.points, self.catalog, indices),
        }
    }

    /// Runs every strategy and ranks the ones that succeed.
    ///
    /// A failing strategy is recorded and the rest still run. Fails only when
    /// `strategies` is empty.
    pub fn compare(&self, strategies: &[Strategy]) -> PlannerResult<Comparison> {
        if strategies.is_empty() {
            return Err(PlannerError::NoStrategies);
        }

        let results: Vec<PlannerResult<OptimizationMetrics>> = if self.config.parallel {
            strategies.par_iter().map(|s| self.run(s)).collect()
        } else {
            strategies.iter().map(|s| self.run(s)).collect()
        };

        let mut outcomes = Vec::with_capacity(strategies.len());
        let mut failed = Vec::new();
        for (strategy, result) in strategies.iter().zip(results) {
            match result {
                Ok(metrics) => outcomes.push(StrategyOutcome {
                    label: strategy.label.clone(),
                    metrics,
                }),
                Err(error) => {
                    warn!(label = %strategy.label, %error, "strategy failed");
                    failed.push(StrategyFailure {
                        label: strategy.label.clone(),
                        error,
                    });
                }
            }
        }

        let comparison = Comparison::rank(outcomes, failed);
        if let (Some(best), Some(worst)) = (comparison.best(), comparison.worst()) {
            info!(
                best = %best.label,
                worst = %worst.label,
                improvement_pct = comparison.improvement_pct(),
                "comparison complete"
            );
        }
        Ok(comparison)
    }
}
