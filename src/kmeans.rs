//! K-means clustering backed by `linfa-clustering`.
//!
//! Coordinates are clustered as plain `(lat, lon)` pairs in degree space,
//! which is accurate enough at city scale. The RNG is seeded from the caller
//! so the same input always yields the same centroids.

use linfa::DatasetBase;
use linfa::prelude::*;
use linfa_clustering::KMeans;
use linfa_nn::distance::L2Dist;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::model::GeoPoint;
use crate::traits::ClusteringProvider;

#[derive(Debug, Clone)]
pub struct KMeansClustering {
    pub max_iterations: u64,
    pub tolerance: f64,
}

impl Default for KMeansClustering {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl KMeansClustering {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl ClusteringProvider for KMeansClustering {
    fn centroids(&self, points: &[GeoPoint], k: usize, seed: u64) -> PlannerResult<Vec<GeoPoint>> {
        if points.is_empty() {
            return Err(PlannerError::EmptyInput);
        }
        if k == 0 || k > points.len() {
            return Err(PlannerError::InvalidArgument(format!(
                "cannot form {} clusters from {} points",
                k,
                points.len()
            )));
        }

        let flat: Vec<f64> = points.iter().flat_map(|p| [p.lat, p.lon]).collect();
        let observations = Array2::from_shape_vec((points.len(), 2), flat)
            .map_err(|err| PlannerError::Clustering(err.to_string()))?;
        let dataset = DatasetBase::from(observations);

        let rng = SmallRng::seed_from_u64(seed);
        let model = KMeans::<f64, L2Dist>::params_with(k, rng, L2Dist)
            .max_n_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .fit(&dataset)
            .map_err(|err| PlannerError::Clustering(err.to_string()))?;

        let centroids: Vec<GeoPoint> = model
            .centroids()
            .rows()
            .into_iter()
            .map(|row| GeoPoint::new(row[0], row[1]))
            .collect();

        debug!(k, seed, centroids = centroids.len(), "k-means converged");
        Ok(centroids)
    }
}
