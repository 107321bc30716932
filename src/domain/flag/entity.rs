//! Flag entities and the settings payload carried in the markup

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::kind::{ComponentKind, Shape};
use crate::domain::DomainError;

static HEX_COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Width and height of a flag in SVG user units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDimensions {
    pub width: u32,
    pub height: u32,
}

impl FlagDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Hex color in `#rrggbb` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a new Color after validation
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if !HEX_COLOR_PATTERN.is_match(&value) {
            return Err(DomainError::invalid_color(value));
        }

        Ok(Self(value))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to redraw a component, round-tripped through a hidden input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSettings {
    pub height: u32,
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    pub component_id: String,
    pub component_index: ComponentKind,
}

impl ComponentSettings {
    pub fn dimensions(&self) -> FlagDimensions {
        FlagDimensions::new(self.width, self.height)
    }

    /// Parse the JSON payload of a single hidden input
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::invalid_settings(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Only strings and integers, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A component with its resolved geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub settings: ComponentSettings,
    pub shape: Shape,
}

/// A complete flag ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub dimensions: FlagDimensions,
    pub components: Vec<Component>,
}

impl Flag {
    pub fn component_ids(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|c| c.settings.component_id.as_str())
            .collect()
    }
}
