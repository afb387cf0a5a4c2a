use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const TOKEN_FILE: &str = "session.token";

/// Durable slot for the signed session token, one bare string per
/// file. Absence simply means "not logged in".
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    pub fn store(&self, token: &str) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::Io(dir.to_path_buf(), e))?;
        }
        fs::write(&self.path, token).map_err(|e| AppError::Io(self.path.clone(), e))
    }

    /// Remove the stored token. Idempotent; a missing file is fine.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to clear session token: {e}");
            }
        }
    }
}
