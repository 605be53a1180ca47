use crate::workflow::WorkflowError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a citizen report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportStatus {
    Pending,
    InProgress,
    Done,
}

/// Admin actions that move a report through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Verify,
    Complete,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Done,
    ];

    /// Value stored in the `status` field of a report document
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Menunggu Verifikasi",
            ReportStatus::InProgress => "Dalam Proses",
            ReportStatus::Done => "Selesai",
        }
    }

    /// Transition table. Anything not listed here is rejected.
    pub fn apply(self, action: ReportAction) -> Result<ReportStatus, WorkflowError> {
        match (self, action) {
            (ReportStatus::Pending, ReportAction::Verify) => Ok(ReportStatus::InProgress),
            (ReportStatus::InProgress, ReportAction::Complete) => Ok(ReportStatus::Done),
            (from, action) => Err(WorkflowError::InvalidTransition {
                from: from.to_string(),
                action: action.to_string(),
            }),
        }
    }

    /// Actions the console may offer for a report in this state
    pub fn available_actions(self) -> &'static [ReportAction] {
        match self {
            ReportStatus::Pending => &[ReportAction::Verify],
            ReportStatus::InProgress => &[ReportAction::Complete],
            ReportStatus::Done => &[],
        }
    }
}

impl FromStr for ReportStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Menunggu Verifikasi" => Ok(ReportStatus::Pending),
            // Older web builds wrote this after verification
            "Dalam Proses" | "Terverifikasi" => Ok(ReportStatus::InProgress),
            "Selesai" => Ok(ReportStatus::Done),
            other => Err(WorkflowError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ReportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportAction::Verify => f.write_str("verify"),
            ReportAction::Complete => f.write_str("complete"),
        }
    }
}
