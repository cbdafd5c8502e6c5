//! Planner configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of facilities the clustering strategy places.
    pub cluster_count: usize,
    /// Seed handed to the clustering backend so repeated runs agree.
    pub seed: u64,
    /// Upper bound on K-means iterations.
    pub max_iterations: u64,
    /// K-means convergence tolerance on centroid movement.
    pub tolerance: f64,
    /// Run strategies on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cluster_count: 5,
            seed: 42,
            max_iterations: 300,
            tolerance: 1e-4,
            parallel: false,
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        serde_json::from_str(json).map_err(|err| PlannerError::Config(err.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
