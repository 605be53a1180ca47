mod document;
mod error;
mod import;
mod sqlite;

#[cfg(test)]
mod tests;

pub use document::{parse_timestamp, Document, Fields, Order};
pub use error::StoreError;
pub use import::import_documents;
pub use sqlite::SqliteStore;

/// Contract of the external document backend.
///
/// The console only ever talks to the backend through this trait, so the
/// concrete client is chosen once by whoever builds the console.
pub trait DocumentStore {
    /// Every document in a collection, in insertion order
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Every document in a collection ordered by its `timestamp` field
    fn fetch_ordered_by_timestamp(
        &self,
        collection: &str,
        order: Order,
    ) -> Result<Vec<Document>, StoreError>;

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Insert under a generated id. A missing `timestamp` field is filled
    /// with the server time.
    fn add(&self, collection: &str, fields: Fields) -> Result<Document, StoreError>;

    /// Create or overwrite the document with a caller-chosen id
    fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, StoreError>;

    /// Shallow merge of `fields` into an existing document
    fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<Document, StoreError>;

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
