use crate::store::StoreError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Field map of a single document
pub type Fields = Map<String, Value>;

/// Field holding the document's ordering time
pub const TIMESTAMP_FIELD: &str = "timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A stored document: id, arbitrary fields and its ordering time
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
    pub timestamp: DateTime<Utc>,
}

impl Document {
    /// Deserialize into a record type. The id is injected as `id`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Server time at the precision the ordering column keeps
pub(crate) fn server_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Canonical text form used for the ordering column. Fixed width so that
/// lexical order equals chronological order.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// The `timestamp` field, when present and readable
pub(crate) fn field_timestamp(fields: &Fields) -> Option<DateTime<Utc>> {
    parse_timestamp(fields.get(TIMESTAMP_FIELD)?)
}

/// Read a timestamp in any of the shapes clients have written: an RFC 3339
/// string, `{ "seconds", "nanoseconds" }` from the hosted backend's export
/// format, or plain epoch seconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        Value::Number(n) => DateTime::from_timestamp(n.as_i64()?, 0),
        Value::Object(map) => {
            let seconds = map.get("seconds").or_else(|| map.get("_seconds"))?.as_i64()?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
        }
        _ => None,
    }
}
