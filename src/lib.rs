pub mod checker;
pub mod cli;
pub mod config;
pub mod convention;
pub mod error;
pub mod git;
pub mod output;

pub use error::{NameGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// Naming violations and configuration errors both exit with 1.
pub const EXIT_VIOLATION: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
