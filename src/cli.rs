use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "name-guard")]
#[command(author, version, about = "Naming convention guard - check file and folder names")]
#[command(long_about = "A tool to check repository file and folder names against \
    configurable naming conventions.\n\n\
    Exit codes:\n  \
    0 - All names adhere to the conventions\n  \
    1 - Naming violations found, or configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check file and folder names against the configured conventions
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Candidate paths to check (pre-commit passes the changed-file list).
    /// With no paths and no provider flag, staged files are checked.
    pub paths: Vec<PathBuf>,

    /// Path to configuration file (default: <root>/.name-guard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository root (default: discovered git working directory, else ".")
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Also check files staged for commit
    #[arg(long)]
    pub staged: bool,

    /// Also check all git-tracked files
    #[arg(long)]
    pub tracked: bool,

    /// Also check files changed since a git reference (branch or commit)
    #[arg(long)]
    pub diff: Option<String>,

    /// Check file names only
    #[arg(long, conflicts_with = "folders_only")]
    pub files_only: bool,

    /// Check folder names only
    #[arg(long)]
    pub folders_only: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only warn, don't fail on naming violations
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".name-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file (default: .name-guard.toml)
        #[arg(short, long, default_value = ".name-guard.toml")]
        config: PathBuf,

        /// Repository root used to resolve ignore_folders entries
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
