//! CLI argument definitions for `course-grid`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_grid::config::ConfigOverrides;
use course_grid::core::progress::ProgressType;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI progress type argument
///
/// The requirement set the progress panel tracks. Converts to the core
/// [`ProgressType`] for aggregation.
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum ProgressTypeArg {
    /// Major requirements (10 credits)
    #[default]
    Major,
    /// Minor requirements (6 credits)
    Minor,
    /// General education concentration (4 credits)
    Gec,
}

impl From<ProgressTypeArg> for ProgressType {
    fn from(arg: ProgressTypeArg) -> Self {
        match arg {
            ProgressTypeArg::Major => Self::Major,
            ProgressTypeArg::Minor => Self::Minor,
            ProgressTypeArg::Gec => Self::Gec,
        }
    }
}

impl std::fmt::Display for ProgressTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Gec => "gec",
        };
        write!(f, "{as_str}")
    }
}

/// Filter, sort, and selection flags shared by the grid commands
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Path to a catalog JSON file (defaults to config `catalog` when omitted)
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Search text matched against course names and descriptions
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Require an attribute tag (repeatable; a course must carry all of them)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Require a course level (100, 200, 300, Short)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Require a credit value (e.g. 1 or 0.5)
    #[arg(long, value_name = "CREDITS")]
    pub credits: Option<f32>,

    /// Require a department code
    #[arg(long, value_name = "DEPT")]
    pub department: Option<String>,

    /// Sort key: level-asc, level-desc, department, credits-asc,
    /// credits-desc, or tag-group. Unknown keys keep catalog order.
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Mark a course id as selected (repeatable); selected courses pin to
    /// the top of the grid
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<u32>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Browse the course grid.
    ///
    /// Filters and sorts the catalog, pins selected courses to the top,
    /// and prints the composed display list.
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show degree progress for a selection.
    ///
    /// Aggregates credits, 300-level count, and attribute coverage over
    /// the selected courses against the full catalog.
    Progress {
        /// Path to a catalog JSON file (defaults to config `catalog` when omitted)
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Mark a course id as selected (repeatable)
        #[arg(long = "select", value_name = "ID")]
        select: Vec<u32>,

        /// Requirement set to track (changes denominators and visible rings)
        #[arg(long = "type", value_enum, default_value_t = ProgressTypeArg::Major)]
        progress_type: ProgressTypeArg,
    },
    /// Generate a report of the current grid view.
    ///
    /// Renders the composed grid and progress panel to Markdown or HTML.
    Report {
        #[command(flatten)]
        view: ViewArgs,

        /// Requirement set to track (changes denominators and visible rings)
        #[arg(long = "type", value_enum, default_value_t = ProgressTypeArg::Major)]
        progress_type: ProgressTypeArg,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
    /// Export the current grid view to CSV.
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Requirement set to track in the summary rows
        #[arg(long = "type", value_enum, default_value_t = ProgressTypeArg::Major)]
        progress_type: ProgressTypeArg,

        /// Output file path (optional; defaults to config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursegrid",
    about = "course-grid command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--reports-dir`) take precedence over long-form flags (e.g.,
    /// `--config-reports-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: self
                .config_catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_exports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_catalog: None,
            config_reports_dir: None,
            reports_dir: None,
            config_exports_dir: None,
            exports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_progress_type_conversion() {
        assert_eq!(ProgressType::from(ProgressTypeArg::Major), ProgressType::Major);
        assert_eq!(ProgressType::from(ProgressTypeArg::Minor), ProgressType::Minor);
        assert_eq!(ProgressType::from(ProgressTypeArg::Gec), ProgressType::Gec);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.config_catalog = Some(PathBuf::from("/data/catalog.json"));
        cli.reports_dir = Some(PathBuf::from("/output/reports"));
        cli.exports_dir = Some(PathBuf::from("/output/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog, Some("/data/catalog.json".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output/reports".to_string()));
        assert_eq!(overrides.exports_dir, Some("/output/exports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.reports_dir = Some(PathBuf::from("/short/reports"));
        cli.config_exports_dir = Some(PathBuf::from("/long/exports"));
        cli.exports_dir = Some(PathBuf::from("/short/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
        assert_eq!(overrides.exports_dir, Some("/short/exports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.config_exports_dir = Some(PathBuf::from("/long/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
        assert_eq!(overrides.exports_dir, Some("/long/exports".to_string()));
    }
}
