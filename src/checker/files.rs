use std::path::PathBuf;

use indexmap::IndexSet;

use crate::config::ResolvedConfig;
use crate::convention::ConventionRegistry;

use super::{PathKind, StyleSource, Violation};

/// Checks candidate file paths against the configured case styles.
///
/// Candidates are plain path strings and are never required to exist; the
/// caller (pre-commit, git, or the CLI user) decides what to check.
pub struct FileNameChecker<'a> {
    config: &'a ResolvedConfig,
    registry: &'a ConventionRegistry,
}

impl<'a> FileNameChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a ResolvedConfig, registry: &'a ConventionRegistry) -> Self {
        Self { config, registry }
    }

    /// Check each candidate's final segment. Duplicate candidates produce a
    /// single violation; order follows the input.
    #[must_use]
    pub fn check(&self, paths: &[PathBuf]) -> Vec<Violation> {
        let unique: IndexSet<&PathBuf> = paths.iter().collect();

        let mut violations = Vec::new();
        for path in unique {
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            if self.config.ignore_files.contains(file_name) {
                continue;
            }

            let extension = extension_of(file_name);
            let style = self.config.style_for_extension(extension);
            if self.registry.is_match_file_name(style, file_name) {
                continue;
            }

            let source = if self.config.filetypes.contains_key(extension) {
                StyleSource::Filetype(extension.to_string())
            } else {
                StyleSource::Default
            };
            violations.push(Violation {
                path: path.clone(),
                kind: PathKind::File,
                expected: style,
                source,
            });
        }
        violations
    }
}

/// Substring after the last `.`, empty if the name has no dot.
///
/// A name that is only an extension (`.md`) yields `md`: an empty base name
/// plus the extension, so it follows the filetype rule for `md`.
fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or("", |(_, extension)| extension)
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
