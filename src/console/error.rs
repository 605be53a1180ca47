use crate::clusterer::ClusterError;
use crate::store::StoreError;
use crate::workflow::WorkflowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Account {0} is not registered as an admin")]
    NotAdmin(String),
}
