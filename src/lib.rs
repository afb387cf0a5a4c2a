pub mod ai;
pub mod app;
pub mod auth;
pub mod collections;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod state;
pub mod store;
pub mod views;

pub use app::App;
pub use config::{Config, GeminiConfig};
pub use error::AppError;
pub use views::View;
