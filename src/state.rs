use crate::collections::Collection;
use crate::fixtures;
use crate::models::{Activity, Contact, Deal, StoredUser, Task, User};
use crate::views::View;

/// The whole mutable application state, owned by the top-level
/// controller and only ever touched from one thread. The collections
/// are re-seeded from fixtures on every bootstrap; only `users` has a
/// durable backing file.
pub struct AppState {
    pub users: Vec<StoredUser>,
    pub session: Option<User>,
    pub view: View,
    pub contacts: Collection<Contact>,
    pub deals: Collection<Deal>,
    pub tasks: Collection<Task>,
    pub activities: Vec<Activity>,
}

impl AppState {
    pub fn seeded(users: Vec<StoredUser>) -> Self {
        Self {
            users,
            session: None,
            view: View::default(),
            contacts: Collection::seeded(fixtures::contacts()),
            deals: Collection::seeded(fixtures::deals()),
            tasks: Collection::seeded(fixtures::tasks()),
            activities: fixtures::activities(),
        }
    }
}
