use std::path::PathBuf;

use crate::convention::CaseStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Folder,
}

/// Why a particular style applied to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// The configured default case.
    Default,
    /// A filetype override for the given extension.
    Filetype(String),
    /// The universal kebab-case rule for folder names.
    FolderRule,
}

/// A path whose final segment failed its applicable case style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub kind: PathKind,
    pub expected: CaseStyle,
    pub source: StyleSource,
}

impl Violation {
    /// Short label for diagnostics, e.g. "default" or "filetype .rs".
    #[must_use]
    pub fn source_label(&self) -> String {
        match &self.source {
            StyleSource::Default => "default".to_string(),
            StyleSource::Filetype(ext) => format!("filetype .{ext}"),
            StyleSource::FolderRule => "folder rule".to_string(),
        }
    }
}
