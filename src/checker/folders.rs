use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::ResolvedConfig;
use crate::convention::{CaseStyle, ConventionRegistry};

use super::{PathKind, StyleSource, Violation};

/// Checks the directories implied by candidate paths against the universal
/// kebab-case rule.
///
/// The repository root is an explicit parameter; the checker never consults
/// process-global state to find it.
pub struct FolderNameChecker<'a> {
    root: PathBuf,
    config: &'a ResolvedConfig,
    registry: &'a ConventionRegistry,
}

impl<'a> FolderNameChecker<'a> {
    #[must_use]
    pub fn new(root: &Path, config: &'a ResolvedConfig, registry: &'a ConventionRegistry) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            registry,
        }
    }

    /// Derive every ancestor directory of the candidates (root-relative,
    /// root itself excluded), drop ignored folders, and flag each remaining
    /// directory whose final segment is not kebab-case.
    ///
    /// Violations are keyed by the full relative path, so the same leaf name
    /// at different depths yields distinct entries. The result is sorted.
    #[must_use]
    pub fn check(&self, paths: &[PathBuf]) -> Vec<Violation> {
        let directories = self.collect_directories(paths);

        let mut violations = Vec::new();
        for directory in &directories {
            let Some(segment) = directory.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !self
                .registry
                .is_match_segment(CaseStyle::KebabCase, segment)
            {
                violations.push(Violation {
                    path: directory.clone(),
                    kind: PathKind::Folder,
                    expected: CaseStyle::KebabCase,
                    source: StyleSource::FolderRule,
                });
            }
        }
        violations
    }

    /// The distinct directories the candidates imply, after ignore pruning.
    /// Public so reporting can count checked directories.
    #[must_use]
    pub fn collect_directories(&self, paths: &[PathBuf]) -> BTreeSet<PathBuf> {
        let mut directories = BTreeSet::new();
        for path in paths {
            let Some(relative) = self.relative_to_root(path) else {
                continue;
            };

            // The candidate itself counts when it is a directory on disk;
            // pre-commit can hand us empty directories directly.
            if self.root.join(&relative).is_dir() {
                self.insert_directory(&mut directories, &relative);
            }

            for ancestor in relative.ancestors().skip(1) {
                self.insert_directory(&mut directories, ancestor);
            }
        }
        directories
    }

    fn insert_directory(&self, directories: &mut BTreeSet<PathBuf>, dir: &Path) {
        if dir.as_os_str().is_empty() {
            return;
        }
        if self.config.is_ignored_folder(dir) {
            return;
        }
        directories.insert(dir.to_path_buf());
    }

    /// Root-relative form of a candidate. Absolute paths outside the root
    /// are skipped entirely.
    fn relative_to_root(&self, path: &Path) -> Option<PathBuf> {
        if path.is_absolute() {
            path.strip_prefix(&self.root)
                .ok()
                .map(Path::to_path_buf)
        } else {
            Some(path.to_path_buf())
        }
    }
}

#[cfg(test)]
#[path = "folders_tests.rs"]
mod tests;
