use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Cannot {action} a report that is {from}")]
    InvalidTransition { from: String, action: String },

    #[error("Spot is already {0}")]
    FinalState(String),

    #[error("Unknown status value: {0:?}")]
    UnknownStatus(String),
}
