//! Flag Generator
//!
//! Serves randomly composed SVG flags:
//! - A page with a freshly generated flag
//! - Click-to-swap of a single flag component via htmx
//! - Stateless components carried in the markup itself

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod render;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.flag.validate()?;
    let dimensions = config.flag.dimensions()?;
    let intro_html = infrastructure::intro::load_intro(&config.site.intro_path);

    info!(
        width = dimensions.width,
        height = dimensions.height,
        "Flag dimensions configured"
    );

    Ok(AppState {
        generator: Arc::new(domain::flag::FlagGenerator::new(
            dimensions,
            config.flag.component_range(),
        )),
        site: Arc::new(config.site.clone()),
        intro_html: Arc::from(intro_html),
    })
}
