use std::fs;
use std::path::{Path, PathBuf};

use crate::auth::password;
use crate::error::AppError;
use crate::models::StoredUser;

pub const USERS_FILE: &str = "users.json";

const SEED_EMAIL: &str = "admin@gmail.com";
const SEED_PASSWORD: &str = "admin123";

/// Durable credential store: a JSON array of user records in the data
/// directory. Loading never fails; anything unreadable is replaced by
/// the seeded administrator record.
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(USERS_FILE),
        }
    }

    /// Read the user list, substituting the one-element seed list when
    /// the file is missing, unreadable, or malformed.
    pub fn load(&self) -> Vec<StoredUser> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return seed_users(),
            Err(e) => {
                tracing::warn!("Failed to read user store, reseeding: {e}");
                return seed_users();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to parse stored users, reseeding: {e}");
                seed_users()
            }
        }
    }

    /// Overwrite the backing file with the given user list. Writes to a
    /// sibling temp file and renames so a crash mid-write never leaves
    /// a truncated store behind.
    pub fn persist(&self, users: &[StoredUser]) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::Io(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(users)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| AppError::Io(tmp.clone(), e))?;
        fs::rename(&tmp, &self.path).map_err(|e| AppError::Io(self.path.clone(), e))?;
        Ok(())
    }
}

/// The administrator record every fresh (or corrupted) store starts
/// with. The demo password is hashed at seed time, not stored.
fn seed_users() -> Vec<StoredUser> {
    let password_hash = match password::hash(SEED_PASSWORD) {
        Ok(hash) => hash,
        Err(e) => {
            // Unreachable with the fixed hashing params; an empty hash
            // verifies against nothing, which fails closed.
            tracing::error!("Failed to hash seed password: {e}");
            String::new()
        }
    };

    vec![StoredUser {
        id: "u1".to_string(),
        name: "Alex Morgan".to_string(),
        email: SEED_EMAIL.to_string(),
        role: "Sales Director".to_string(),
        avatar: "https://picsum.photos/id/64/200/200".to_string(),
        password_hash,
    }]
}
