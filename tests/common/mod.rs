use std::path::Path;

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use nexus_crm::config::{Config, GeminiConfig};
use nexus_crm::App;

pub const TOKEN_SECRET: &str = "test-secret-do-not-use";

/// A bootstrapped app with a dedicated temp data directory. The
/// directory lives as long as the `TestApp` value.
pub struct TestApp {
    pub app: App,
    pub data_dir: TempDir,
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        token_secret: TOKEN_SECRET.to_string(),
        session_ttl_hours: 24,
        log_level: "debug".to_string(),
        gemini: None,
    }
}

pub fn test_config_with_gemini(data_dir: &Path, base_url: &str) -> Config {
    Config {
        gemini: Some(GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: base_url.to_string(),
        }),
        ..test_config(data_dir)
    }
}

pub fn spawn_app() -> TestApp {
    init_tracing();
    let data_dir = TempDir::new().expect("failed to create temp data dir");
    let app = App::bootstrap(test_config(data_dir.path())).expect("failed to bootstrap app");
    TestApp { app, data_dir }
}

/// Bootstrap a second app over the same data directory, simulating an
/// application restart.
pub fn reopen(test_app: &TestApp) -> App {
    App::bootstrap(test_config(test_app.data_dir.path())).expect("failed to re-bootstrap app")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
