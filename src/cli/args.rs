//! CLI argument definitions.
//!
//! All Clap derive structs for Sitewright command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Section rendering engine and catalog seeder for the Sitewright
/// website builder.
#[derive(Parser, Debug)]
#[command(name = "sitewright", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SITEWRIGHT_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "SITEWRIGHT_LOG_FORMAT"
    )]
    pub log_format: LogFormatChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a section config file to HTML or a JSON render tree.
    Render(RenderArgs),

    /// Validate section config files without rendering.
    Validate(ValidateArgs),

    /// List the section catalog: kinds and default palettes.
    List(ListArgs),

    /// Create and populate a builder database.
    Seed(SeedArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Render Command
// ============================================================================

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Section config file (a config object or an array of them).
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "html")]
    pub format: RenderFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year for footer copyright lines (default: current UTC year).
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog slice to list.
    #[arg(default_value = "all")]
    pub category: ListCategory,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `seed`.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Database file to create and populate.
    #[arg(
        long,
        default_value = "sitewright.db",
        env = "SITEWRIGHT_DATABASE",
        value_name = "PATH"
    )]
    pub database: PathBuf,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatChoice {
    /// Human-readable logs.
    #[default]
    Human,
    /// Newline-delimited JSON logs.
    Json,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Human => Self::Human,
            LogFormatChoice::Json => Self::Json,
        }
    }
}

/// Render output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// Flattened HTML.
    #[default]
    Html,
    /// JSON render tree.
    Json,
}

/// Output format for reports and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Catalog slice for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListCategory {
    /// Section kinds.
    Kinds,
    /// Default theme palettes.
    Palettes,
    /// Everything.
    #[default]
    All,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_parses_with_defaults() {
        let cli = Cli::try_parse_from(["sitewright", "render", "home.json"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.file, PathBuf::from("home.json"));
        assert_eq!(args.format, RenderFormat::Html);
        assert!(args.output.is_none());
        assert!(args.year.is_none());
    }

    #[test]
    fn render_accepts_format_output_and_year() {
        let cli = Cli::try_parse_from([
            "sitewright",
            "render",
            "home.json",
            "--format",
            "json",
            "--output",
            "out.json",
            "--year",
            "2030",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.format, RenderFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.year, Some(2030));
    }

    #[test]
    fn validate_requires_files() {
        let result = Cli::try_parse_from(["sitewright", "validate"]);
        assert!(result.is_err(), "expected error for missing files");
    }

    #[test]
    fn validate_collects_multiple_files() {
        let cli =
            Cli::try_parse_from(["sitewright", "validate", "a.json", "b.json", "--strict"])
                .unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.files.len(), 2);
        assert!(args.strict);
    }

    #[test]
    fn list_defaults_to_all() {
        let cli = Cli::try_parse_from(["sitewright", "list"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.category, ListCategory::All);
    }

    #[test]
    fn list_categories_parse() {
        for category in ["kinds", "palettes", "all"] {
            let cli = Cli::try_parse_from(["sitewright", "list", category]);
            assert!(cli.is_ok(), "failed to parse category={category}");
        }
    }

    #[test]
    fn seed_database_defaults() {
        let cli = Cli::try_parse_from(["sitewright", "seed"]).unwrap();
        let Commands::Seed(args) = cli.command else {
            panic!("expected seed");
        };
        assert_eq!(args.database, PathBuf::from("sitewright.db"));
    }

    #[test]
    fn color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["sitewright", "--color", variant, "list"]);
            assert!(cli.is_ok(), "failed to parse color={variant}");
        }
    }

    #[test]
    fn log_format_converts() {
        assert_eq!(LogFormat::from(LogFormatChoice::Human), LogFormat::Human);
        assert_eq!(LogFormat::from(LogFormatChoice::Json), LogFormat::Json);
    }

    #[test]
    fn completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["sitewright", "completions", shell]);
            assert!(cli.is_ok(), "failed to parse shell={shell}");
        }
    }

    #[test]
    fn verbose_count_and_quiet() {
        let cli = Cli::try_parse_from(["sitewright", "-vvv", "list"]).unwrap();
        assert_eq!(cli.verbose, 3);

        let cli = Cli::try_parse_from(["sitewright", "--quiet", "list"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn help_and_version_exit_via_clap() {
        let err = Cli::try_parse_from(["sitewright", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["sitewright", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn exit_code_mapping() {
        use crate::error::{ConfigError, ExitCode, SeedError, SitewrightError};

        let cases: Vec<(SitewrightError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                SeedError::Schema(sqlx::Error::PoolClosed).into(),
                ExitCode::ERROR,
            ),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "wrong exit code for {err}");
        }
    }
}
