use crate::console::{to_fields, AdminConsole, AdminError};
use crate::records::{collections, AdminProfile, ProfileUpdate, ADMIN_ROLE};
use crate::store::DocumentStore;
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

fn validate_profile(profile: &ProfileUpdate) -> Result<(), AdminError> {
    if profile.nama.trim().is_empty() {
        return Err(AdminError::Validation("name must not be empty".into()));
    }
    if !profile.email.trim().is_empty() && !profile.email.contains('@') {
        return Err(AdminError::Validation(format!(
            "not an email address: {}",
            profile.email
        )));
    }
    Ok(())
}

impl<S: DocumentStore> AdminConsole<S> {
    /// Write the admin document for an account the identity provider has
    /// just created. Any existing document under `uid` is replaced.
    pub fn register_admin(
        &self,
        uid: &str,
        profile: ProfileUpdate,
    ) -> Result<AdminProfile, AdminError> {
        validate_profile(&profile)?;

        let mut fields = to_fields(&profile)?;
        fields.insert("role".into(), ADMIN_ROLE.into());
        fields.insert(
            "createdAt".into(),
            Utc::now()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
                .into(),
        );
        let document = self.store.set(collections::ADMINS, uid, fields)?;

        info!(uid, "admin registered");
        Ok(document.decode()?)
    }

    pub fn profile(&self, uid: &str) -> Result<AdminProfile, AdminError> {
        Ok(self.require(collections::ADMINS, "Admin", uid)?.decode()?)
    }

    /// Confirm that an authenticated uid belongs to an admin. Identity
    /// itself is established by the external provider.
    pub fn verify_admin(&self, uid: &str) -> Result<AdminProfile, AdminError> {
        let profile = match self.store.get(collections::ADMINS, uid)? {
            Some(document) => document.decode::<AdminProfile>()?,
            None => {
                warn!(uid, "no admin document for account");
                return Err(AdminError::NotAdmin(uid.to_string()));
            }
        };

        if !profile.is_admin() {
            warn!(uid, role = ?profile.role, "account lacks admin role");
            return Err(AdminError::NotAdmin(uid.to_string()));
        }
        Ok(profile)
    }

    pub fn update_profile(
        &self,
        uid: &str,
        update: ProfileUpdate,
    ) -> Result<AdminProfile, AdminError> {
        validate_profile(&update)?;

        self.require(collections::ADMINS, "Admin", uid)?;
        let document = self
            .store
            .update_fields(collections::ADMINS, uid, to_fields(&update)?)?;

        info!(uid, "admin profile updated");
        Ok(document.decode()?)
    }
}
