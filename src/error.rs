// file: src/error.rs
// version: 1.0.0
// guid: 615e43e2-d0f9-42d9-94aa-94b0f88a1b7f

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ReferenceError>;

/// Error types for the Docker command reference
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The command source or settings file is missing, malformed or incomplete.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record reached the renderer without a required field.
    #[error("Invalid record{}: `{field}` is missing or empty", position(.index))]
    InvalidRecord {
        index: Option<usize>,
        field: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at position {}", i),
        None => String::new(),
    }
}

impl ReferenceError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new invalid record error for the named field
    pub fn invalid_record(field: &'static str) -> Self {
        Self::InvalidRecord { index: None, field }
    }

    /// Attach a registry position to an invalid record error
    pub fn at_index(self, i: usize) -> Self {
        match self {
            Self::InvalidRecord { field, .. } => Self::InvalidRecord {
                index: Some(i),
                field,
            },
            other => other,
        }
    }

    /// Whether this error means the command reference cannot be displayed
    pub fn is_display_failure(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InvalidRecord { .. })
    }
}
