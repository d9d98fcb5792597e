use std::path::Path;

use crate::error::{NameGuardError, Result};

use super::Config;

/// Default configuration file name, looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".name-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location under `root`.
    ///
    /// # Errors
    /// Returns an error if the config file is missing or cannot be parsed.
    fn load(&self, root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem. Configuration is read fresh on
/// every invocation; nothing is cached across runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self, root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Err(NameGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|source| NameGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
