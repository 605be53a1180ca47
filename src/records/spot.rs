use crate::workflow::SpotStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category used when a spot was saved without one
pub const UNCATEGORIZED: &str = "Tidak Dikategorikan";

/// A registered damage location pinned on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub status: SpotStatus,
    #[serde(default, deserialize_with = "super::lenient::timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Spot {
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }
}

/// Form input for registering a new damage location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSpot {
    pub category: String,
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}
