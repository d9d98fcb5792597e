use serde::Serialize;

use crate::checker::{NamingReport, PathKind, StyleSource, Violation};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    checked_files: usize,
    checked_folders: usize,
    file_violations: usize,
    folder_violations: usize,
}

#[derive(Serialize)]
struct JsonViolation {
    path: String,
    kind: String,
    expected: String,
    source: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &NamingReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                checked_files: report.checked_files,
                checked_folders: report.checked_folders,
                file_violations: report.file_violations.len(),
                folder_violations: report.folder_violations.len(),
            },
            violations: report
                .file_violations
                .iter()
                .chain(&report.folder_violations)
                .map(convert_violation)
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation {
    JsonViolation {
        path: violation.path.display().to_string(),
        kind: match violation.kind {
            PathKind::File => "file".to_string(),
            PathKind::Folder => "folder".to_string(),
        },
        expected: violation.expected.name().to_string(),
        source: match &violation.source {
            StyleSource::Default => "default".to_string(),
            StyleSource::Filetype(ext) => format!("filetype:{ext}"),
            StyleSource::FolderRule => "folder-rule".to_string(),
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
