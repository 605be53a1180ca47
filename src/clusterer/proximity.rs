use crate::clusterer::{
    coordinate::GeoPoint,
    haversine::haversine_distance,
    types::{Cluster, ClusterError, ClusterLocation},
};
use crate::records::Report;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Reports closer than this are treated as the same incident site
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

/// Star-shaped proximity grouping of geo-tagged reports.
///
/// Every member of a cluster is within the radius of the cluster's seed,
/// not necessarily within the radius of the other members.
#[derive(Debug, Clone, Copy)]
pub struct ProximityClusterer {
    radius_meters: f64,
}

impl ProximityClusterer {
    pub fn new(radius_meters: f64) -> Result<Self, ClusterError> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(ClusterError::InvalidRadius(radius_meters));
        }
        Ok(Self { radius_meters })
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Group reports using seed-and-sweep and return clusters of two or
    /// more members, largest first.
    pub fn cluster(&self, reports: &[Report]) -> Vec<Cluster> {
        let points: Vec<Option<GeoPoint>> = reports.iter().map(Report::point).collect();
        let mut assigned: HashSet<&str> = HashSet::new();
        let mut clusters = Vec::new();

        for (i, seed) in reports.iter().enumerate() {
            if assigned.contains(seed.id.as_str()) {
                continue;
            }
            let Some(origin) = points[i] else {
                continue;
            };

            // 1. Sweep every other unassigned report, earlier ones included
            let mut neighbours = Vec::new();
            for (j, candidate) in reports.iter().enumerate() {
                if j == i || assigned.contains(candidate.id.as_str()) {
                    continue;
                }
                let Some(point) = points[j] else {
                    continue;
                };

                if haversine_distance(origin, point) <= self.radius_meters {
                    assigned.insert(candidate.id.as_str());
                    neighbours.push(j);
                }
            }

            // 2. A lone seed stays eligible for later sweeps
            if neighbours.is_empty() {
                continue;
            }
            assigned.insert(seed.id.as_str());

            let mut members = Vec::with_capacity(neighbours.len() + 1);
            members.push(seed.clone());
            members.extend(neighbours.into_iter().map(|j| reports[j].clone()));

            clusters.push(Cluster {
                location: ClusterLocation {
                    latitude: origin.latitude,
                    longitude: origin.longitude,
                    label: seed.display_label().to_string(),
                },
                members,
            });
        }

        // 3. Largest first; sort_by is stable so discovery order breaks ties
        clusters.sort_by(|a, b| b.count().cmp(&a.count()));

        debug!(
            reports = reports.len(),
            clusters = clusters.len(),
            radius_m = self.radius_meters,
            "clustered reports"
        );
        clusters
    }
}

impl Default for ProximityClusterer {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }
}

/// Cluster with an ad-hoc radius. An unusable radius yields no clusters.
pub fn cluster_reports(reports: &[Report], radius_meters: f64) -> Vec<Cluster> {
    match ProximityClusterer::new(radius_meters) {
        Ok(clusterer) => clusterer.cluster(reports),
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}
