use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Malformed document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("Import entry {index}: {reason}")]
    InvalidImport { index: usize, reason: String },

    #[error("Document {collection}/{id} is not a JSON object")]
    NotAnObject { collection: String, id: String },
}
