use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use indexmap::IndexSet;

use name_guard::checker::{FileNameChecker, FolderNameChecker, NamingReport};
use name_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, InitArgs};
use name_guard::config::{Config, ConfigLoader, FileConfigLoader, ResolvedConfig};
use name_guard::convention::ConventionRegistry;
use name_guard::git::GitFiles;
use name_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use name_guard::{EXIT_SUCCESS, EXIT_VIOLATION};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_VIOLATION
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> name_guard::Result<i32> {
    // 1. Determine the repository root (explicit flag, else git, else ".")
    let root = resolve_root(args.root.as_deref());

    // 2. Load and validate configuration
    let config = load_config(args.config.as_deref(), &root)?;
    let resolved = config.resolve(&root)?;

    // 3. Gather candidate paths
    let candidates = gather_candidates(args, &root)?;

    // 4. Run the checkers
    let registry = ConventionRegistry::new();
    let report = build_report(args, &root, &resolved, &registry, &candidates);

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    if args.warn_only || !report.has_violations() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATION)
    }
}

fn resolve_root(root_arg: Option<&Path>) -> PathBuf {
    if let Some(root) = root_arg {
        return root.to_path_buf();
    }
    GitFiles::discover(Path::new("."))
        .map_or_else(|_| PathBuf::from("."), |git| git.workdir().to_path_buf())
}

fn load_config(config_path: Option<&Path>, root: &Path) -> name_guard::Result<Config> {
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}

/// Candidate paths: positionals plus any git-provided sets. With no
/// positionals and no provider flag, staged files are the default (the
/// pre-commit use case).
fn gather_candidates(args: &CheckArgs, root: &Path) -> name_guard::Result<Vec<PathBuf>> {
    let mut candidates = args.paths.clone();

    let use_staged = args.staged || (candidates.is_empty() && !args.tracked && args.diff.is_none());
    if use_staged || args.tracked || args.diff.is_some() {
        let git = GitFiles::discover(root)?;
        if use_staged {
            candidates.extend(git.staged_files()?);
        }
        if args.tracked {
            candidates.extend(git.tracked_files()?);
        }
        if let Some(base_ref) = &args.diff {
            candidates.extend(git.changed_files(base_ref)?);
        }
    }

    Ok(candidates)
}

fn build_report(
    args: &CheckArgs,
    root: &Path,
    resolved: &ResolvedConfig,
    registry: &ConventionRegistry,
    candidates: &[PathBuf],
) -> NamingReport {
    let mut report = NamingReport::default();

    if !args.folders_only {
        let checker = FileNameChecker::new(resolved, registry);
        report.checked_files = candidates.iter().collect::<IndexSet<_>>().len();
        report.file_violations = checker.check(candidates);
    }

    if !args.files_only {
        let checker = FolderNameChecker::new(root, resolved, registry);
        report.checked_folders = checker.collect_directories(candidates).len();
        report.folder_violations = checker.check(candidates);
    }

    report
}

fn format_output(
    format: OutputFormat,
    report: &NamingReport,
    color_mode: ColorMode,
    verbose: u8,
) -> name_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> name_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_VIOLATION
        }
    }
}

fn run_init_impl(args: &InitArgs) -> name_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(name_guard::NameGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# name-guard configuration file

# Default case style applied when no filetype override matches.
# Recognized styles: camelCase, snake_case, kebab-case, PascalCase,
# UPPER_CASE, and "*" (matches anything).
default = "snake_case"

# Literal file names that are never checked.
ignore_files = ["README.md", "LICENSE", "Cargo.toml"]

# Root-relative directories excluded from the folder checker.
# Each entry must exist and be a directory.
ignore_folders = []

# Per-extension overrides (extension without the dot).
[filetypes]
rs = "snake_case"
py = "snake_case"
ts = "kebab-case"
md = "*"
"#
    .to_string()
}

fn run_config(args: &name_guard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config, root } => run_config_validate(config, root),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path, root: &Path) -> i32 {
    match run_config_validate_impl(config_path, root) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_VIOLATION
        }
    }
}

fn run_config_validate_impl(config_path: &Path, root: &Path) -> name_guard::Result<()> {
    let config = FileConfigLoader::new().load_from_path(config_path)?;
    config.resolve(root)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_VIOLATION
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> name_guard::Result<String> {
    let root = resolve_root(None);
    let config = load_config(config_path, &root)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    let _ = writeln!(
        output,
        "default = {:?}",
        config.default.as_deref().unwrap_or("<missing>")
    );

    if !config.ignore_files.is_empty() {
        let _ = writeln!(output, "ignore_files = {:?}", config.ignore_files);
    }
    if !config.ignore_folders.is_empty() {
        let _ = writeln!(output, "ignore_folders = {:?}", config.ignore_folders);
    }

    if !config.filetypes.is_empty() {
        output.push_str("\n[filetypes]\n");
        for (extension, case_name) in &config.filetypes {
            let _ = writeln!(output, "  {extension} = \"{case_name}\"");
        }
    }

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
