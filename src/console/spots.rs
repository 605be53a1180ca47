use crate::clusterer::GeoPoint;
use crate::console::{decode_all, field, to_fields, AdminConsole, AdminError};
use crate::records::{collections, NewSpot, Spot};
use crate::store::{DocumentStore, Order};
use crate::workflow::SpotStatus;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Spot count for one repair state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: SpotStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Every repair state in workflow order, zero counts included
    pub by_status: Vec<StatusCount>,
    pub by_category: BTreeMap<String, usize>,
}

impl DashboardStats {
    pub fn from_spots(spots: &[Spot]) -> Self {
        let by_status = SpotStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                label: status.label(),
                count: spots.iter().filter(|s| s.status == status).count(),
            })
            .collect();

        let mut by_category = BTreeMap::new();
        for spot in spots {
            *by_category
                .entry(spot.category_or_default().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total: spots.len(),
            by_status,
            by_category,
        }
    }

    pub fn count_for(&self, status: SpotStatus) -> usize {
        self.by_status
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }
}

/// Reject forms submitted before a position was picked on the map
fn validate_new_spot(spot: &NewSpot) -> Result<(), AdminError> {
    if spot.title.trim().is_empty() {
        return Err(AdminError::Validation("title must not be empty".into()));
    }

    let point = GeoPoint::new(spot.latitude, spot.longitude);
    if !point.latitude.is_finite() || !point.longitude.is_finite() || !point.in_range() {
        return Err(AdminError::Validation(format!(
            "coordinates out of range: {}, {}",
            spot.latitude, spot.longitude
        )));
    }
    // The map picker starts at 0,0; either axis still at zero means no pick
    if spot.latitude == 0.0 || spot.longitude == 0.0 {
        return Err(AdminError::Validation(
            "select a location on the map first".into(),
        ));
    }
    Ok(())
}

impl<S: DocumentStore> AdminConsole<S> {
    /// All registered damage locations, newest first
    pub fn spots(&self) -> Result<Vec<Spot>, AdminError> {
        let documents = self
            .store
            .fetch_ordered_by_timestamp(collections::SPOTS, Order::Descending)?;
        Ok(decode_all(documents, collections::SPOTS))
    }

    pub fn register_spot(&self, new_spot: NewSpot) -> Result<Spot, AdminError> {
        validate_new_spot(&new_spot)?;

        let mut fields = to_fields(&new_spot)?;
        fields.insert("status".into(), SpotStatus::NotRepaired.code().into());
        let document = self.store.add(collections::SPOTS, fields)?;

        info!(id = %document.id, title = %new_spot.title, "spot registered");
        Ok(document.decode()?)
    }

    /// Move a spot to its next repair state
    pub fn advance_spot(&self, id: &str) -> Result<SpotStatus, AdminError> {
        let spot: Spot = self.require(collections::SPOTS, "Spot", id)?.decode()?;
        let next = spot.status.advance()?;

        self.store
            .update_fields(collections::SPOTS, id, field("status", next.code()))?;

        info!(id, from = %spot.status, to = %next, "spot status changed");
        Ok(next)
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats, AdminError> {
        Ok(DashboardStats::from_spots(&self.spots()?))
    }
}
