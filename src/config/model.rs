use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw naming-convention configuration as deserialized from TOML.
///
/// One schema covers both the file and folder checkers. Case names are kept
/// as strings here; `Config::resolve` validates them against the registry
/// and turns unknown names into a fatal configuration error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Default case style applied when no filetype override matches.
    /// Required; a missing default is a configuration error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Per-extension overrides: extension (without dot) -> case name.
    #[serde(default)]
    pub filetypes: IndexMap<String, String>,

    /// Literal file names that are never checked (e.g. "pyproject.toml").
    #[serde(default)]
    pub ignore_files: Vec<String>,

    /// Root-relative (or absolute) directory paths excluded from the folder
    /// checker. Each entry must exist and be a directory at load time.
    #[serde(default)]
    pub ignore_folders: Vec<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
