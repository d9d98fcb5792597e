use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::{NameGuardError, Result};

/// Candidate path providers backed by a git repository.
///
/// All returned paths are relative to the working directory, matching the
/// root-relative form the checkers expect.
pub struct GitFiles {
    repo_path: PathBuf,
    workdir: PathBuf,
}

impl GitFiles {
    /// Discover the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found or it has no working
    /// directory.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| NameGuardError::Git(format!("Failed to discover git repository: {e}")))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| NameGuardError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| NameGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    /// Every file in the index (the `git ls-files` candidate set).
    ///
    /// # Errors
    /// Returns an error if the index cannot be read.
    pub fn tracked_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let index = repo
            .open_index()
            .map_err(|e| NameGuardError::Git(format!("Failed to open git index: {e}")))?;

        let mut files: Vec<PathBuf> = index
            .entries()
            .iter()
            .map(|entry| PathBuf::from(String::from_utf8_lossy(entry.path(&index)).to_string()))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Files staged for commit: index entries whose blob differs from HEAD.
    /// In a repository with no commits yet, every index entry is staged.
    ///
    /// # Errors
    /// Returns an error if the repository cannot be accessed.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let index = repo
            .open_index()
            .map_err(|e| NameGuardError::Git(format!("Failed to open git index: {e}")))?;

        let head_paths = match repo.head_commit() {
            Ok(commit) => {
                let tree = commit
                    .tree()
                    .map_err(|e| NameGuardError::Git(format!("Failed to get HEAD tree: {e}")))?;
                Self::collect_tree_paths(&tree)?
            }
            Err(_) => HashSet::new(),
        };

        let mut staged = Vec::new();
        for entry in index.entries() {
            let path = PathBuf::from(String::from_utf8_lossy(entry.path(&index)).to_string());
            let changed = head_paths
                .iter()
                .find(|(p, _)| p == &path)
                .is_none_or(|(_, head_oid)| *head_oid != entry.id);
            if changed {
                staged.push(path);
            }
        }
        staged.sort();
        Ok(staged)
    }

    /// Files that differ between `base_ref` and HEAD. Files deleted since
    /// `base_ref` are excluded; their names no longer exist to check.
    ///
    /// # Errors
    /// Returns an error if a reference cannot be resolved or the repository
    /// cannot be accessed.
    pub fn changed_files(&self, base_ref: &str) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;

        let base_paths = Self::collect_tree_paths(&Self::tree_for_ref(&repo, base_ref)?)?;
        let head_paths = Self::collect_tree_paths(&Self::tree_for_ref(&repo, "HEAD")?)?;

        let mut changed: Vec<PathBuf> = head_paths
            .iter()
            .filter(|(path, oid)| {
                base_paths
                    .iter()
                    .find(|(base_path, _)| base_path == path)
                    .is_none_or(|(_, base_oid)| base_oid != oid)
            })
            .map(|(path, _)| path.clone())
            .collect();
        changed.sort();
        Ok(changed)
    }

    fn tree_for_ref<'repo>(
        repo: &'repo gix::Repository,
        reference: &str,
    ) -> Result<gix::Tree<'repo>> {
        repo.rev_parse_single(reference)
            .map_err(|e| NameGuardError::Git(format!("Failed to parse reference '{reference}': {e}")))?
            .object()
            .map_err(|e| NameGuardError::Git(format!("Failed to get object for '{reference}': {e}")))?
            .peel_to_commit()
            .map_err(|e| NameGuardError::Git(format!("Failed to peel to commit '{reference}': {e}")))?
            .tree()
            .map_err(|e| NameGuardError::Git(format!("Failed to get tree for '{reference}': {e}")))
    }

    fn collect_tree_paths(tree: &gix::Tree<'_>) -> Result<HashSet<(PathBuf, gix::ObjectId)>> {
        let mut paths = HashSet::new();
        Self::collect_tree_paths_recursive(tree, Path::new(""), &mut paths)?;
        Ok(paths)
    }

    fn collect_tree_paths_recursive(
        tree: &gix::Tree<'_>,
        prefix: &Path,
        paths: &mut HashSet<(PathBuf, gix::ObjectId)>,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry =
                entry.map_err(|e| NameGuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| NameGuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    paths.insert((path, entry.oid().into()));
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry.object().map_err(|e| {
                        NameGuardError::Git(format!("Failed to get subtree object: {e}"))
                    })?;
                    Self::collect_tree_paths_recursive(&subtree.into_tree(), &path, paths)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}
