use crate::console::{decode_all, field, AdminConsole, AdminError};
use crate::records::{collections, UserAccount};
use crate::store::DocumentStore;
use tracing::info;

impl<S: DocumentStore> AdminConsole<S> {
    pub fn users(&self) -> Result<Vec<UserAccount>, AdminError> {
        let documents = self.store.fetch_all(collections::USERS)?;
        Ok(decode_all(documents, collections::USERS))
    }

    /// Block an account. Returns false when it was already blocked.
    pub fn block_user(&self, id: &str) -> Result<bool, AdminError> {
        let user: UserAccount = self.require(collections::USERS, "User", id)?.decode()?;
        if user.is_blocked() {
            return Ok(false);
        }

        self.store
            .update_fields(collections::USERS, id, field("status", "blocked"))?;
        info!(id, "user blocked");
        Ok(true)
    }
}
