// Public API exports
pub mod clusterer;
pub mod config;
pub mod console;
pub mod records;
pub mod store;
pub mod workflow;

// Re-export main types for convenience
pub use clusterer::{
    Cluster, ClusterError, ClusterLocation, DEFAULT_RADIUS_METERS, GeoPoint, ProximityClusterer,
    RawCoordinate, cluster_reports, haversine_distance,
};

pub use records::{AdminProfile, NewSpot, ProfileUpdate, Report, Spot, UserAccount, UserStatus};

pub use workflow::{ReportAction, ReportStatus, SpotStatus, WorkflowError};

pub use store::{Document, DocumentStore, Order, SqliteStore, StoreError};

pub use console::{AdminConsole, AdminError, DashboardStats, ReportBoard};

pub use config::Config;
