mod files;
mod folders;
mod violation;

pub use files::FileNameChecker;
pub use folders::FolderNameChecker;
pub use violation::{PathKind, StyleSource, Violation};

/// Aggregated outcome of one checker run.
///
/// Violation lists are deduplicated and in deterministic order: file
/// violations follow candidate order, folder violations are sorted by path.
#[derive(Debug, Clone, Default)]
pub struct NamingReport {
    pub file_violations: Vec<Violation>,
    pub folder_violations: Vec<Violation>,
    pub checked_files: usize,
    pub checked_folders: usize,
}

impl NamingReport {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.file_violations.is_empty() || !self.folder_violations.is_empty()
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.file_violations.len() + self.folder_violations.len()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
