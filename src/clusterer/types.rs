use crate::records::Report;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ClusterError {
    #[error("Cluster radius must be a positive number of meters, got {0}")]
    InvalidRadius(f64),
}

/// Representative position of a cluster, taken from its seed report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Reports grouped around a seed; recomputed on every call, never stored
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub location: ClusterLocation,
    /// Seed first, then neighbours in scan order
    pub members: Vec<Report>,
}

impl Cluster {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Member identifiers in discovery order
    pub fn ids(&self) -> Vec<&str> {
        self.members.iter().map(|r| r.id.as_str()).collect()
    }
}
