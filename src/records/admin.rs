use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role value that grants console access
pub const ADMIN_ROLE: &str = "admin";

/// Admin profile document, keyed by the identity provider's uid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub no_phone: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(
        default,
        rename = "createdAt",
        deserialize_with = "super::lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminProfile {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub nama: String,
    pub email: String,
    pub no_phone: String,
}
