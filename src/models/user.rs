use serde::{Deserialize, Serialize};

/// Public profile of a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
}

/// A user record as persisted in the credential store. Carries the
/// Argon2id password hash; never handed out past the auth boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub password_hash: String,
}

impl StoredUser {
    /// The hash-free view used for the live session.
    pub fn profile(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            role: self.role.clone(),
        }
    }
}
