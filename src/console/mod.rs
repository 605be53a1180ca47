//! Admin operations over the backend collections.
//!
//! [`AdminConsole`] owns the store client it was built with; nothing in
//! here reaches for a global handle.

mod board;
mod error;
mod profile;
mod reports;
mod spots;
mod users;


pub use board::ReportBoard;
pub use error::AdminError;
pub use spots::{DashboardStats, StatusCount};

use crate::store::{Document, DocumentStore, Fields};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

pub struct AdminConsole<S> {
    store: S,
}

impl<S: DocumentStore> AdminConsole<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch one document or fail with a typed not-found error
    fn require(
        &self,
        collection: &str,
        kind: &'static str,
        id: &str,
    ) -> Result<Document, AdminError> {
        self.store
            .get(collection, id)?
            .ok_or_else(|| AdminError::NotFound {
                kind,
                id: id.to_string(),
            })
    }
}

/// Decode a batch of documents, skipping the ones that do not fit the
/// record shape. Partial data should not take the whole view down.
fn decode_all<T: DeserializeOwned>(documents: Vec<Document>, collection: &str) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|doc| match doc.decode() {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(collection, id = %doc.id, error = %e, "skipping undecodable document");
                None
            }
        })
        .collect()
}

/// Serialize a record into a field map, dropping its `id`
fn to_fields<T: Serialize>(record: &T) -> Result<Fields, AdminError> {
    let value = serde_json::to_value(record).map_err(crate::store::StoreError::from)?;
    let mut fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(AdminError::Validation(format!(
                "expected an object, got {}",
                other
            )))
        }
    };
    fields.remove("id");
    Ok(fields)
}

/// Single-field update map
fn field(name: &str, value: impl Into<Value>) -> Fields {
    let mut fields = Fields::new();
    fields.insert(name.to_string(), value.into());
    fields
}
