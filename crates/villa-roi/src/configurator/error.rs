use std::fmt;

use super::domain::ConfigField;

/// Rejected configuration mutation. Both variants are caller programming errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfiguratorError {
    #[error("invalid {field} option '{value}'")]
    InvalidOption { field: ConfigField, value: String },
    #[error("unknown configuration field '{0}'")]
    UnknownField(String),
}

impl ConfiguratorError {
    pub(crate) fn invalid(field: ConfigField, value: impl fmt::Display) -> Self {
        Self::InvalidOption {
            field,
            value: value.to_string(),
        }
    }
}
