use crate::store::{DocumentStore, StoreError};
use serde_json::Value;
use tracing::info;

/// Load exported documents into a collection.
///
/// Entries carrying a string or numeric `id` keep it, entries without one
/// get a generated id. Returns the number of documents written.
pub fn import_documents<S: DocumentStore + ?Sized>(
    store: &S,
    collection: &str,
    documents: Vec<Value>,
) -> Result<usize, StoreError> {
    let mut imported = 0;

    for (index, document) in documents.into_iter().enumerate() {
        let Value::Object(mut fields) = document else {
            return Err(StoreError::InvalidImport {
                index,
                reason: "entry is not an object".to_string(),
            });
        };

        match fields.remove("id") {
            Some(Value::String(id)) => store.set(collection, &id, fields)?,
            Some(Value::Number(id)) => store.set(collection, &id.to_string(), fields)?,
            None | Some(Value::Null) => store.add(collection, fields)?,
            Some(other) => {
                return Err(StoreError::InvalidImport {
                    index,
                    reason: format!("unusable id {}", other),
                })
            }
        };
        imported += 1;
    }

    info!(collection, imported, "import finished");
    Ok(imported)
}
