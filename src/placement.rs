//! Facility placement strategies.
//!
//! Two ways to produce a facility set:
//! - cluster the delivery points and snap every centroid to the closest
//!   candidate site;
//! - pick candidate sites directly by catalog index.

use tracing::{info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::model::{CandidateSite, DeliveryPoint, Facility, GeoPoint};
use crate::traits::{ClusteringProvider, DistanceProvider};

/// Number of catalog indices a direct selection must name.
pub const SELECTION_SIZE: usize = 5;

/// Outcome of validating a direct selection against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSelection {
    /// Indices that can be placed, in the caller's order.
    pub accepted: Vec<usize>,
    /// Indices outside the catalog; they are skipped, not fatal.
    pub rejected: Vec<usize>,
}

/// Checks a direct selection.
///
/// The list as a whole must have exactly [`SELECTION_SIZE`] entries or the
/// call fails. Individual out-of-range entries are only reported back in
/// `rejected`, so a selection with a bad index still places the others.
pub fn validate_selection(indices: &[usize], catalog_len: usize) -> PlannerResult<ValidatedSelection> {
    if indices.len() != SELECTION_SIZE {
        return Err(PlannerError::InvalidArgument(format!(
            "expected exactly {} site indices, got {}",
            SELECTION_SIZE,
            indices.len()
        )));
    }

    let (accepted, rejected): (Vec<usize>, Vec<usize>) = indices.iter().partition(|&&index| index < catalog_len);
    Ok(ValidatedSelection { accepted, rejected })
}

/// Places one facility per valid catalog index.
///
/// Facility ids run `0..n-1` over the sites that were actually placed.
pub fn place_selected(
    points: &[DeliveryPoint],
    catalog: &[CandidateSite],
    indices: &[usize],
) -> PlannerResult<Vec<Facility>> {
    if points.is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    let selection = validate_selection(indices, catalog.len())?;
    for index in &selection.rejected {
        warn!(index, catalog_len = catalog.len(), "skipping invalid site index");
    }

    let facilities: Vec<Facility> = selection
        .accepted
        .iter()
        .enumerate()
        .map(|(id, &index)| Facility::on_site(id, &catalog[index]))
        .collect();

    for facility in &facilities {
        info!(facility = %facility.display_name(), "placed facility");
    }
    info!(placed = facilities.len(), "selection placement done");

    Ok(facilities)
}

/// Places `k` facilities by clustering the delivery points and snapping each
/// centroid to the nearest candidate site.
pub fn place_clustered<C, D>(
    points: &[DeliveryPoint],
    catalog: &[CandidateSite],
    k: usize,
    seed: u64,
    clustering: &C,
    distance: &D,
) -> PlannerResult<Vec<Facility>>
where
    C: ClusteringProvider,
    D: DistanceProvider,
{
    if points.is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    let coords: Vec<GeoPoint> = points.iter().map(|p| p.location).collect();
    let centroids = clustering.centroids(&coords, k, seed)?;

    let mut facilities = Vec::with_capacity(centroids.len());
    for (id, centroid) in centroids.into_iter().enumerate() {
        let (site, snap_km) = nearest_site(centroid, catalog, distance).ok_or_else(|| {
            PlannerError::InvalidArgument("candidate site catalog is empty".to_string())
        })?;

        let mut facility = Facility::on_site(id, site);
        facility.snap_distance_km = Some(snap_km);
        info!(
            facility = %facility.display_name(),
            centroid = %centroid,
            snap_km,
            "snapped centroid to site"
        );
        facilities.push(facility);
    }

    info!(placed = facilities.len(), "cluster placement done");
    Ok(facilities)
}

/// Closest site to `target`, scanning in catalog order.
///
/// Only a strictly smaller distance replaces the current pick, so the first
/// site wins ties.
pub fn nearest_site<'a, D: DistanceProvider>(
    target: GeoPoint,
    catalog: &'a [CandidateSite],
    distance: &D,
) -> Option<(&'a CandidateSite, f64)> {
    let mut best: Option<(&CandidateSite, f64)> = None;
    for site in catalog {
        let km = distance.distance_km(target, site.location);
        match best {
            Some((_, best_km)) if km >= best_km => {}
            _ => best = Some((site, km)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine::Haversine;

    const SITES: &[CandidateSite] = &[
        CandidateSite::new("west", 0.0, -1.0),
        CandidateSite::new("east", 0.0, 1.0),
        CandidateSite::new("far", 40.0, 40.0),
    ];

    /// Returns canned centroids regardless of input.
    struct FixedCentroids(Vec<GeoPoint>);

    impl ClusteringProvider for FixedCentroids {
        fn centroids(&self, _points: &[GeoPoint], _k: usize, _seed: u64) -> PlannerResult<Vec<GeoPoint>> {
            Ok(self.0.clone())
        }
    }

    fn points() -> Vec<DeliveryPoint> {
        vec![DeliveryPoint::new(0, "p0", 0.0, 0.0)]
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        assert!(matches!(
            validate_selection(&[0, 1, 2, 3], 10),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_selection(&[0, 1, 2, 3, 4, 5], 10),
            Err(PlannerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_partitions_indices() {
        let selection = validate_selection(&[0, 12, 1, 2, 99], 3).unwrap();
        assert_eq!(selection.accepted, vec![0, 1, 2]);
        assert_eq!(selection.rejected, vec![12, 99]);
    }

    #[test]
    fn test_selected_ids_renumbered() {
        let facilities = place_selected(&points(), SITES, &[2, 7, 0, 1, 0]).unwrap();
        let ids: Vec<usize> = facilities.iter().map(|f| f.id).collect();
        let sites: Vec<&str> = facilities.iter().map(|f| f.site.as_str()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(sites, vec!["far", "west", "east", "west"]);
    }

    #[test]
    fn test_selected_all_invalid_places_nothing() {
        let facilities = place_selected(&points(), SITES, &[5, 6, 7, 8, 9]).unwrap();
        assert!(facilities.is_empty());
    }

    #[test]
    fn test_selected_requires_points() {
        let err = place_selected(&[], SITES, &[0, 1, 2, 0, 1]).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyInput));
    }

    #[test]
    fn test_nearest_site_first_wins_tie() {
        // The origin is equidistant from "west" and "east".
        let (site, km) = nearest_site(GeoPoint::new(0.0, 0.0), SITES, &Haversine::default()).unwrap();
        assert_eq!(site.name, "west");
        assert!(km > 0.0);
    }

    #[test]
    fn test_nearest_site_empty_catalog() {
        assert!(nearest_site(GeoPoint::new(0.0, 0.0), &[], &Haversine::default()).is_none());
    }

    #[test]
    fn test_clustered_snaps_to_sites() {
        let clustering = FixedCentroids(vec![GeoPoint::new(0.0, 0.9), GeoPoint::new(39.0, 39.0)]);
        let facilities =
            place_clustered(&points(), SITES, 2, 42, &clustering, &Haversine::default()).unwrap();

        assert_eq!(facilities.len(), 2);
        assert_eq!(facilities[0].id, 0);
        assert_eq!(facilities[0].site, "east");
        assert_eq!(facilities[0].display_name(), "Warehouse 0 (east)");
        assert_eq!(facilities[1].site, "far");
        let snap = facilities[0].snap_distance_km.unwrap();
        assert!((snap - 11.12).abs() < 0.05, "0.1 degree snap should be ~11.12km, got {}", snap);
    }

    #[test]
    fn test_clustered_requires_points() {
        let clustering = FixedCentroids(vec![GeoPoint::new(0.0, 0.0)]);
        let err = place_clustered(&[], SITES, 1, 42, &clustering, &Haversine::default()).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyInput));
    }

    #[test]
    fn test_clustered_empty_catalog() {
        let clustering = FixedCentroids(vec![GeoPoint::new(0.0, 0.0)]);
        let err = place_clustered(&points(), &[], 1, 42, &clustering, &Haversine::default()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }
}
