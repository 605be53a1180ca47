use crate::clusterer::{GeoPoint, RawCoordinate};
use crate::workflow::{ReportStatus, WorkflowError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A citizen-submitted incident report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub report_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<RawCoordinate>,
    #[serde(default)]
    pub longitude: Option<RawCoordinate>,
    /// Raw status string; use [`Report::status`] for the typed value
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    /// Fields this crate does not interpret, kept for round trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    /// Minimal report at a numeric position
    pub fn at(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude: Some(RawCoordinate::Number(latitude)),
            longitude: Some(RawCoordinate::Number(longitude)),
            ..Default::default()
        }
    }

    /// Parsed position, `None` when either coordinate is missing or malformed
    pub fn point(&self) -> Option<GeoPoint> {
        let latitude = self.latitude.as_ref()?.to_degrees()?;
        let longitude = self.longitude.as_ref()?.to_degrees()?;
        Some(GeoPoint::new(latitude, longitude))
    }

    /// Typed workflow state. A report without a status has not been
    /// looked at yet and counts as pending.
    pub fn status(&self) -> Result<ReportStatus, WorkflowError> {
        match self.status.as_deref() {
            None | Some("") => Ok(ReportStatus::Pending),
            Some(raw) => raw.parse(),
        }
    }

    /// Text used to name a cluster seeded by this report
    pub fn display_label(&self) -> &str {
        [self.location.as_deref(), self.report_type.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(self.id.as_str())
    }
}
