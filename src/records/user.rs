use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("blocked") => UserStatus::Blocked,
            _ => UserStatus::Active,
        })
    }
}

/// End-user account of the reporting app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

impl UserAccount {
    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }
}
