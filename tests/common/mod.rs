#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the name-guard binary.
#[macro_export]
macro_rules! name_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("name-guard"))
    };
}

/// Configuration with a kebab-case default and common overrides.
pub const BASIC_CONFIG: &str = r#"
default = "kebab-case"
ignore_files = ["README.md", "Cargo.toml"]

[filetypes]
rs = "snake_case"
py = "snake_case"
md = "*"
"#;

/// Configuration with a snake_case default and no overrides.
pub const SNAKE_CONFIG: &str = r#"
default = "snake_case"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a name-guard config file at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".name-guard.toml", content);
    }
}
