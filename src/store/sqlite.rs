use crate::store::document::{
    field_timestamp, format_timestamp, server_now, Document, Fields, Order, TIMESTAMP_FIELD,
};
use crate::store::{DocumentStore, StoreError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

/// Document store backed by a local SQLite file.
///
/// Each document is one JSON blob keyed by (collection, id).
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new in-memory store
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open (or create) a store file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        let store = Self { conn };
        store.init_schema()?;
        debug!(path = %path.as_ref().display(), "opened document store");
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            );

            CREATE INDEX IF NOT EXISTS idx_documents_timestamp
                ON documents(collection, timestamp);
            "#,
        )?;
        Ok(())
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> Result<u32, StoreError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![collection],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn query(&self, collection: &str, sql: &str) -> Result<Vec<Document>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![collection], read_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|row| row.into_document(collection))
            .collect()
    }

    fn write(
        &self,
        collection: &str,
        id: &str,
        fields: &Fields,
        timestamp: &DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let data = serde_json::to_string(fields)?;
        self.conn.execute(
            "INSERT INTO documents (collection, id, data, timestamp) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(collection, id) DO UPDATE SET data = excluded.data, timestamp = excluded.timestamp",
            params![collection, id, data, format_timestamp(timestamp)],
        )?;
        Ok(())
    }
}

/// Raw row before the JSON blob is decoded
struct StoredRow {
    id: String,
    data: String,
    timestamp: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<StoredRow> {
    Ok(StoredRow {
        id: row.get(0)?,
        data: row.get(1)?,
        timestamp: row.get(2)?,
    })
}

impl StoredRow {
    fn into_document(self, collection: &str) -> Result<Document, StoreError> {
        let fields = match serde_json::from_str::<Value>(&self.data)? {
            Value::Object(fields) => fields,
            _ => {
                return Err(StoreError::NotAnObject {
                    collection: collection.to_string(),
                    id: self.id,
                })
            }
        };
        let timestamp = match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                warn!(
                    collection,
                    id = %self.id,
                    column = %self.timestamp,
                    error = %e,
                    "unreadable timestamp column"
                );
                field_timestamp(&fields).unwrap_or_default()
            }
        };

        Ok(Document {
            id: self.id,
            fields,
            timestamp,
        })
    }
}

impl DocumentStore for SqliteStore {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.query(
            collection,
            "SELECT id, data, timestamp FROM documents WHERE collection = ?1 ORDER BY rowid",
        )
    }

    fn fetch_ordered_by_timestamp(
        &self,
        collection: &str,
        order: Order,
    ) -> Result<Vec<Document>, StoreError> {
        let sql = match order {
            Order::Ascending => {
                "SELECT id, data, timestamp FROM documents WHERE collection = ?1 ORDER BY timestamp ASC, rowid ASC"
            }
            Order::Descending => {
                "SELECT id, data, timestamp FROM documents WHERE collection = ?1 ORDER BY timestamp DESC, rowid DESC"
            }
        };
        self.query(collection, sql)
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, data, timestamp FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id],
                read_row,
            )
            .optional()?;

        row.map(|row| row.into_document(collection)).transpose()
    }

    fn add(&self, collection: &str, mut fields: Fields) -> Result<Document, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let timestamp = field_timestamp(&fields).unwrap_or_else(server_now);
        if !fields.contains_key(TIMESTAMP_FIELD) {
            fields.insert(
                TIMESTAMP_FIELD.to_string(),
                Value::String(format_timestamp(&timestamp)),
            );
        }

        self.write(collection, &id, &fields, &timestamp)?;
        debug!(collection, id = %id, "added document");

        Ok(Document {
            id,
            fields,
            timestamp,
        })
    }

    fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, StoreError> {
        let timestamp = match field_timestamp(&fields) {
            Some(ts) => ts,
            None => self
                .get(collection, id)?
                .map(|existing| existing.timestamp)
                .unwrap_or_else(server_now),
        };

        self.write(collection, id, &fields, &timestamp)?;

        Ok(Document {
            id: id.to_string(),
            fields,
            timestamp,
        })
    }

    fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<Document, StoreError> {
        let mut document = self
            .get(collection, id)?
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        document.fields.extend(fields);
        if let Some(ts) = field_timestamp(&document.fields) {
            document.timestamp = ts;
        }

        self.write(collection, id, &document.fields, &document.timestamp)?;
        debug!(collection, id, "updated document");
        Ok(document)
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let removed = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
            params![collection, id],
        )?;

        if removed == 0 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        debug!(collection, id, "deleted document");
        Ok(())
    }
}
