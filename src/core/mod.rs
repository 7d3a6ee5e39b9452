mod config;
pub use config::{AppConfig, DEFAULT_API_URI};
