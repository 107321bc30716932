use std::ops::Range;
use std::path::Path;

use serde::Deserialize;

use crate::domain::flag::FlagDimensions;
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub flag: FlagConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Flag geometry and composition
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    pub height: u32,
    pub aspect_ratio: f64,
    /// Inclusive lower bound on generated components
    pub min_components: u32,
    /// Exclusive upper bound on generated components
    pub max_components: u32,
}

/// Page chrome and static assets
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub static_dir: String,
    pub intro_path: String,
    pub htmx_src: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3006,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            height: 180,
            aspect_ratio: 1.9,
            min_components: 2,
            max_components: 4,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Flag generator".to_string(),
            static_dir: "public".to_string(),
            intro_path: "input.md".to_string(),
            htmx_src: "https://unpkg.com/htmx.org@1.9.12".to_string(),
        }
    }
}

impl FlagConfig {
    /// Resolve the flag dimensions, rejecting degenerate geometry
    pub fn dimensions(&self) -> Result<FlagDimensions, DomainError> {
        if self.height == 0 {
            return Err(DomainError::configuration("flag.height must be greater than 0"));
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(DomainError::configuration(format!(
                "flag.aspect_ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }

        let width = (f64::from(self.height) * self.aspect_ratio).round();

        if width < 1.0 || width > f64::from(u32::MAX) {
            return Err(DomainError::configuration(format!(
                "flag width out of range: {}",
                width
            )));
        }

        Ok(FlagDimensions::new(width as u32, self.height))
    }

    /// Range of component counts drawn for a new flag
    pub fn component_range(&self) -> Range<u32> {
        self.min_components..self.max_components.max(self.min_components)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.dimensions()?;

        if self.min_components > self.max_components {
            return Err(DomainError::configuration(format!(
                "flag.min_components ({}) exceeds flag.max_components ({})",
                self.min_components, self.max_components
            )));
        }

        Ok(())
    }
}

impl AppConfig {
    /// Layer `{dir}/default`, `{dir}/local` and `APP__SECTION__KEY` variables
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join("local")).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration, falling back to defaults on error.
    /// Runs before logging is installed, so the error goes to stderr.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Path::new("config"))
    }

    pub fn load_or_default_from(dir: &Path) -> Self {
        Self::load_from(dir).unwrap_or_else(|e| {
            eprintln!("Invalid configuration, using defaults: {}", e);
            Self::default()
        })
    }
}
