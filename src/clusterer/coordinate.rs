use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components lie inside the valid degree ranges
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A coordinate exactly as the document backend handed it over.
///
/// Mobile clients write numbers, older web forms wrote strings, so both
/// shapes have to be accepted and interpreted lazily. Anything else is
/// kept as-is and never yields a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawCoordinate {
    /// Interpret as decimal degrees, `None` when unparseable or non-finite
    pub fn to_degrees(&self) -> Option<f64> {
        let value = match self {
            RawCoordinate::Number(n) => *n,
            RawCoordinate::Text(s) => s.trim().parse::<f64>().ok()?,
            RawCoordinate::Other(_) => return None,
        };

        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawCoordinate {
    fn from(value: f64) -> Self {
        RawCoordinate::Number(value)
    }
}

impl From<&str> for RawCoordinate {
    fn from(value: &str) -> Self {
        RawCoordinate::Text(value.to_string())
    }
}
