//! Application state shared by handlers

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::domain::FlagGenerator;

/// Immutable state; every request is computed from its own payload
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<FlagGenerator>,
    pub site: Arc<SiteConfig>,
    /// Intro markdown rendered at startup
    pub intro_html: Arc<str>,
}
