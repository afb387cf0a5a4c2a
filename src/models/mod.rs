pub mod activity;
pub mod contact;
pub mod deal;
pub mod task;
pub mod user;

pub use activity::{Activity, ActivityKind};
pub use contact::{Contact, ContactStatus};
pub use deal::{Deal, DealStage};
pub use task::{Task, TaskPriority};
pub use user::{StoredUser, User};

use chrono::Utc;

/// An entity living in one of the CRUD collections.
pub trait Record {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Mint a fresh entity id from the current epoch-millisecond timestamp.
/// Two creates within the same millisecond collide; the demo dataset
/// tolerates that, so it is not enforced.
pub fn fresh_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
