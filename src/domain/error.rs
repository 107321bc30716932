use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Selection required")]
    MissingSelection,

    #[error("Multiple selected not supported")]
    MultipleSelection,

    #[error("Couldn't find component to remove: {id}")]
    ComponentNotFound { id: String },

    #[error("Invalid component settings: {message}")]
    InvalidSettings { message: String },

    #[error("Invalid component index '{value}'")]
    InvalidComponentIndex { value: String },

    #[error("Invalid color '{value}': expected #rrggbb")]
    InvalidColor { value: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn component_not_found(id: impl Into<String>) -> Self {
        Self::ComponentNotFound { id: id.into() }
    }

    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }

    pub fn invalid_component_index(value: impl Into<String>) -> Self {
        Self::InvalidComponentIndex {
            value: value.into(),
        }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_errors() {
        assert_eq!(DomainError::MissingSelection.to_string(), "Selection required");
        assert_eq!(
            DomainError::MultipleSelection.to_string(),
            "Multiple selected not supported"
        );
    }

    #[test]
    fn test_component_not_found_error() {
        let error = DomainError::component_not_found("component-7");
        assert_eq!(
            error.to_string(),
            "Couldn't find component to remove: component-7"
        );
    }

    #[test]
    fn test_invalid_color_error() {
        let error = DomainError::invalid_color("red");
        assert_eq!(error.to_string(), "Invalid color 'red': expected #rrggbb");
    }
}
