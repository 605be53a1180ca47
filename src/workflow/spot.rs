use crate::workflow::WorkflowError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Repair state of a registered damage location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum SpotStatus {
    #[default]
    #[serde(rename = "belum_diperbaiki")]
    NotRepaired,
    #[serde(rename = "sedang_diperbaiki")]
    InRepair,
    #[serde(rename = "sudah_diperbaiki")]
    Repaired,
}

impl SpotStatus {
    pub const ALL: [SpotStatus; 3] = [
        SpotStatus::NotRepaired,
        SpotStatus::InRepair,
        SpotStatus::Repaired,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SpotStatus::NotRepaired => "belum_diperbaiki",
            SpotStatus::InRepair => "sedang_diperbaiki",
            SpotStatus::Repaired => "sudah_diperbaiki",
        }
    }

    /// Human readable label shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            SpotStatus::NotRepaired => "Belum Diperbaiki",
            SpotStatus::InRepair => "Sedang Diperbaiki",
            SpotStatus::Repaired => "Sudah Diperbaiki",
        }
    }

    /// Unrecognised codes count as not repaired
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "sedang_diperbaiki" => SpotStatus::InRepair,
            "sudah_diperbaiki" => SpotStatus::Repaired,
            _ => SpotStatus::NotRepaired,
        }
    }

    pub fn advance(self) -> Result<SpotStatus, WorkflowError> {
        match self {
            SpotStatus::NotRepaired => Ok(SpotStatus::InRepair),
            SpotStatus::InRepair => Ok(SpotStatus::Repaired),
            SpotStatus::Repaired => Err(WorkflowError::FinalState(self.label().to_string())),
        }
    }
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SpotStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SpotStatus::from_code).unwrap_or_default())
    }
}
