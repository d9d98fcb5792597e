use std::io::Write as IoWrite;

use crate::checker::{NamingReport, PathKind, Violation};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &Violation, output: &mut Vec<u8>) {
        let path = violation.path.display().to_string();
        let expected = self.colorize(violation.expected.name(), ansi::YELLOW);
        let mark = self.colorize("✗", ansi::RED);

        match violation.kind {
            PathKind::File => {
                writeln!(
                    output,
                    "{mark} {path} is not {expected} ({})",
                    violation.source_label()
                )
                .ok();
            }
            PathKind::Folder => {
                writeln!(output, "{mark} {path}/ is not {expected}").ok();
            }
        }
    }

    fn format_summary(&self, report: &NamingReport) -> String {
        let file_count = report.file_violations.len();
        let folder_count = report.folder_violations.len();

        let mut parts = Vec::new();
        if file_count > 0 {
            parts.push(format!(
                "{} file name(s)",
                self.colorize(&file_count.to_string(), ansi::RED)
            ));
        }
        if folder_count > 0 {
            parts.push(format!(
                "{} folder name(s)",
                self.colorize(&folder_count.to_string(), ansi::RED)
            ));
        }

        format!(
            "Summary: {} file(s) and {} folder(s) checked, {} do not adhere to naming conventions",
            report.checked_files,
            report.checked_folders,
            parts.join(" and ")
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &NamingReport) -> Result<String> {
        let mut output = Vec::new();

        for violation in &report.file_violations {
            self.format_violation(violation, &mut output);
        }
        for violation in &report.folder_violations {
            self.format_violation(violation, &mut output);
        }

        if report.has_violations() {
            writeln!(output, "{}", self.format_summary(report)).ok();
        } else {
            let message = self.colorize(
                "All file and folder names adhere to naming conventions!",
                ansi::GREEN,
            );
            writeln!(output, "{message}").ok();
            if self.verbose >= 1 {
                writeln!(
                    output,
                    "Checked {} file(s) and {} folder(s)",
                    report.checked_files, report.checked_folders
                )
                .ok();
            }
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
