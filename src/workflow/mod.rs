mod error;
mod report;
mod spot;

#[cfg(test)]
mod tests;

pub use error::WorkflowError;
pub use report::{ReportAction, ReportStatus};
pub use spot::SpotStatus;
