//! Application configuration

mod app_config;

pub use app_config::{AppConfig, FlagConfig, LogFormat, LoggingConfig, ServerConfig, SiteConfig};
