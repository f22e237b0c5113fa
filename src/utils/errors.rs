use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackwiseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("Invalid rule pattern `{pattern}`: {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Filename template error: {0}")]
    Template(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PackwiseError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a configuration error tied to a settings file
    pub fn config_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PackwiseError>;
