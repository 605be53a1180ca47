use crate::clusterer::{Cluster, ProximityClusterer};
use crate::console::{AdminConsole, AdminError};
use crate::records::Report;
use crate::store::DocumentStore;
use crate::workflow::ReportAction;

/// In-memory report list with its clusters.
///
/// Clusters are rebuilt from scratch after every local change, so they
/// always describe the current list.
#[derive(Debug, Clone)]
pub struct ReportBoard {
    reports: Vec<Report>,
    clusters: Vec<Cluster>,
    clusterer: ProximityClusterer,
}

impl ReportBoard {
    pub fn new(reports: Vec<Report>, clusterer: ProximityClusterer) -> Self {
        let clusters = clusterer.cluster(&reports);
        Self {
            reports,
            clusters,
            clusterer,
        }
    }

    /// Snapshot the console's reports
    pub fn load<S: DocumentStore>(
        console: &AdminConsole<S>,
        clusterer: ProximityClusterer,
    ) -> Result<Self, AdminError> {
        Ok(Self::new(console.reports()?, clusterer))
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Drop a report from the local list. Returns it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Report> {
        let index = self.reports.iter().position(|r| r.id == id)?;
        let removed = self.reports.remove(index);
        self.recluster();
        Some(removed)
    }

    /// Replace the local status string of a report
    pub fn set_status(&mut self, id: &str, status: &str) -> bool {
        let Some(report) = self.reports.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        report.status = Some(status.to_string());
        self.recluster();
        true
    }

    /// Delete in the backend, then locally
    pub fn delete<S: DocumentStore>(
        &mut self,
        console: &AdminConsole<S>,
        id: &str,
    ) -> Result<(), AdminError> {
        console.delete_report(id)?;
        self.remove(id);
        Ok(())
    }

    /// Apply a workflow action in the backend and mirror it locally
    pub fn apply<S: DocumentStore>(
        &mut self,
        console: &AdminConsole<S>,
        id: &str,
        action: ReportAction,
    ) -> Result<(), AdminError> {
        let status = console.apply_report_action(id, action)?;
        self.set_status(id, status.as_str());
        Ok(())
    }

    fn recluster(&mut self) {
        self.clusters = self.clusterer.cluster(&self.reports);
    }
}
