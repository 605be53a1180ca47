mod coordinate;
mod haversine;
mod proximity;
mod types;


pub use coordinate::{GeoPoint, RawCoordinate};
pub use haversine::{EARTH_RADIUS_METERS, haversine_distance};
pub use proximity::{DEFAULT_RADIUS_METERS, ProximityClusterer, cluster_reports};
pub use types::{Cluster, ClusterError, ClusterLocation};
