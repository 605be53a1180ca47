//! Typed views of the documents held by the backend collections.
//!
//! Every struct carries its document `id` so records can be written back
//! without a second lookup.

mod admin;
mod lenient;
mod report;
mod spot;
mod user;


pub use admin::{AdminProfile, ProfileUpdate, ADMIN_ROLE};
pub use report::Report;
pub use spot::{NewSpot, Spot, UNCATEGORIZED};
pub use user::{UserAccount, UserStatus};

/// Collection names used by the backend
pub mod collections {
    pub const REPORTS: &str = "reports";
    pub const SPOTS: &str = "spots";
    pub const USERS: &str = "users";
    pub const ADMINS: &str = "admins";
}
