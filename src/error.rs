use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Io(PathBuf, std::io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(path, err) => write!(f, "I/O Error at {}: {err}", path.display()),
            AppError::Serde(err) => write!(f, "Serialization Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(_, err) => Some(err),
            AppError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serde(err)
    }
}
