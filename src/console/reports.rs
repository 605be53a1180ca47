use crate::clusterer::{Cluster, ProximityClusterer};
use crate::console::{decode_all, field, AdminConsole, AdminError};
use crate::records::{collections, Report};
use crate::store::{DocumentStore, Order};
use crate::workflow::{ReportAction, ReportStatus};
use tracing::info;

impl<S: DocumentStore> AdminConsole<S> {
    /// All reports, newest first
    pub fn reports(&self) -> Result<Vec<Report>, AdminError> {
        let documents = self
            .store
            .fetch_ordered_by_timestamp(collections::REPORTS, Order::Descending)?;
        Ok(decode_all(documents, collections::REPORTS))
    }

    pub fn report(&self, id: &str) -> Result<Report, AdminError> {
        let document = self.require(collections::REPORTS, "Report", id)?;
        Ok(document.decode()?)
    }

    /// Move a report one step through its workflow and persist the new
    /// status. Actions that do not fit the current status are rejected
    /// without touching the store.
    pub fn apply_report_action(
        &self,
        id: &str,
        action: ReportAction,
    ) -> Result<ReportStatus, AdminError> {
        let report = self.report(id)?;
        let current = report.status()?;
        let next = current.apply(action)?;

        self.store
            .update_fields(collections::REPORTS, id, field("status", next.as_str()))?;

        info!(id, from = %current, to = %next, "report status changed");
        Ok(next)
    }

    pub fn delete_report(&self, id: &str) -> Result<(), AdminError> {
        self.require(collections::REPORTS, "Report", id)?;
        self.store.delete(collections::REPORTS, id)?;
        info!(id, "report deleted");
        Ok(())
    }

    /// Fetch reports and group them by proximity
    pub fn report_clusters(
        &self,
        clusterer: &ProximityClusterer,
    ) -> Result<Vec<Cluster>, AdminError> {
        let reports = self.reports()?;
        Ok(clusterer.cluster(&reports))
    }
}
