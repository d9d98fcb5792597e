use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),
}

pub type Result<T> = std::result::Result<T, NameGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
