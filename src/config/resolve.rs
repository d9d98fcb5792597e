use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::convention::CaseStyle;
use crate::error::{NameGuardError, Result};

use super::Config;

/// Validated configuration with case names parsed into styles and ignore
/// folders normalized to root-relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub default_style: CaseStyle,
    pub filetypes: IndexMap<String, CaseStyle>,
    pub ignore_files: HashSet<String>,
    pub ignore_folders: HashSet<PathBuf>,
}

impl ResolvedConfig {
    /// Style for a file extension: filetype override, else the default.
    #[must_use]
    pub fn style_for_extension(&self, extension: &str) -> CaseStyle {
        self.filetypes
            .get(extension)
            .copied()
            .unwrap_or(self.default_style)
    }

    /// Whether a root-relative directory path is excluded from checking.
    /// An entry in `ignore_folders` excludes the directory and everything
    /// below it.
    #[must_use]
    pub fn is_ignored_folder(&self, dir: &Path) -> bool {
        self.ignore_folders
            .iter()
            .any(|ignored| dir.starts_with(ignored))
    }
}

impl Config {
    /// Validate the raw configuration against the convention registry and
    /// the filesystem rooted at `root`.
    ///
    /// # Errors
    /// Returns a configuration error if the default case is missing, any
    /// case name is unrecognized, or an `ignore_folders` entry does not
    /// exist or is not a directory.
    pub fn resolve(&self, root: &Path) -> Result<ResolvedConfig> {
        let Some(default_name) = self.default.as_deref() else {
            return Err(NameGuardError::Config(
                "No default case style defined".to_string(),
            ));
        };

        // Report every unrecognized case name at once, not just the first.
        let mut unrecognized: Vec<&str> = Vec::new();
        let default_style = CaseStyle::parse(default_name).map_or_else(
            || {
                unrecognized.push(default_name);
                CaseStyle::Any
            },
            |style| style,
        );

        let mut filetypes = IndexMap::new();
        for (extension, case_name) in &self.filetypes {
            match CaseStyle::parse(case_name) {
                Some(style) => {
                    filetypes.insert(extension.clone(), style);
                }
                None => {
                    if !unrecognized.contains(&case_name.as_str()) {
                        unrecognized.push(case_name);
                    }
                }
            }
        }

        if !unrecognized.is_empty() {
            return Err(NameGuardError::Config(format!(
                "Unrecognized case style(s): {}",
                unrecognized.join(", ")
            )));
        }

        let ignore_folders = self.resolve_ignore_folders(root)?;

        Ok(ResolvedConfig {
            default_style,
            filetypes,
            ignore_files: self.ignore_files.iter().cloned().collect(),
            ignore_folders,
        })
    }

    fn resolve_ignore_folders(&self, root: &Path) -> Result<HashSet<PathBuf>> {
        let mut resolved = HashSet::new();
        for entry in &self.ignore_folders {
            let path = Path::new(entry);
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };

            if !absolute.exists() {
                return Err(NameGuardError::Config(format!(
                    "ignore_folders entry does not exist: {}",
                    absolute.display()
                )));
            }
            if !absolute.is_dir() {
                return Err(NameGuardError::Config(format!(
                    "ignore_folders entry is not a directory: {}",
                    absolute.display()
                )));
            }

            // Store root-relative so checker paths compare directly.
            let relative = absolute
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or(absolute);
            resolved.insert(relative);
        }
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
