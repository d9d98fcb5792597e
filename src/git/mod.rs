mod files;

pub use files::GitFiles;

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
