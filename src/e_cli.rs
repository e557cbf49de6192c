use crate::e_config::ReportConfig;
use crate::e_types::SeverityKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "bundle-e is for Errors. Pretty-prints the warnings and errors of a bundler stats dump.", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit.
    #[arg(long, short = 'v', help = "Print version and exit.")]
    pub version: bool,

    #[arg(long, conflicts_with = "errors", help = "Report warnings only.")]
    pub warnings: bool,

    #[arg(long, help = "Report errors only.")]
    pub errors: bool,

    #[arg(long = "no-color", help = "Disable colored titles.")]
    pub no_color: bool,

    #[arg(long, help = "Line printed before and after the report (default: empty line).")]
    pub separator: Option<String>,

    #[arg(long, help = "Print a per-compilation summary table.")]
    pub table: bool,

    #[arg(long, help = "Path to a bundle-e.toml configuration file.")]
    pub config: Option<PathBuf>,

    #[arg(help = "Stats JSON file produced by the bundler, or - for stdin.")]
    pub stats: Option<String>,
}

impl Cli {
    /// `None` when neither `--warnings` nor `--errors` was given.
    pub fn requested_kind(&self) -> Option<SeverityKind> {
        if self.warnings {
            Some(SeverityKind::Warning)
        } else if self.errors {
            Some(SeverityKind::Error)
        } else {
            None
        }
    }

    /// Command-line flags take precedence over file and environment.
    pub fn apply_to(&self, config: &mut ReportConfig) {
        if self.no_color {
            config.color = false;
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
    }
}

/// Print the version string.
pub fn print_version() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    println!("bundle-e {}", version);
}
