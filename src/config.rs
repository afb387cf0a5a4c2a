use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub token_secret: String,
    pub session_ttl_hours: i64,
    pub log_level: String,
    pub gemini: Option<GeminiConfig>,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_secret = env_required("NEXUS_TOKEN_SECRET")?;

        let data_dir = match std::env::var("NEXUS_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_local_dir()
                .ok_or_else(|| {
                    AppError::Config(
                        "No local data directory available; set NEXUS_DATA_DIR".to_string(),
                    )
                })?
                .join("nexus-crm"),
        };

        let session_ttl_hours: i64 = env_or("NEXUS_SESSION_TTL_HOURS", "24")
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid NEXUS_SESSION_TTL_HOURS: {e}")))?;

        let log_level = env_or("NEXUS_LOG_LEVEL", "info");

        // The Gemini credential is optional; without it the assistant
        // answers with a fixed advisory string instead of calling out.
        let gemini = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|api_key| GeminiConfig {
                api_key,
                model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
                base_url: env_or(
                    "GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com",
                ),
            });

        Ok(Config {
            data_dir,
            token_secret,
            session_ttl_hours,
            log_level,
            gemini,
        })
    }
}

fn env_required(key: &str) -> Result<String, AppError> {
    std::env::var(key)
        .map_err(|_| AppError::Config(format!("Missing required environment variable: {key}")))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
