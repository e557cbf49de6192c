#![doc = include_str!("../README.md")]

pub mod e_types;
pub use e_types::{CompilationResult, DiagnosticEntry, EntryKind, SeverityKind};
pub mod e_extract;
pub use e_extract::{extract, unique_by_message};
pub mod e_severity;
pub use e_severity::max_severity;
pub mod e_transform;
pub use e_transform::{transform_errors, Transformer};
pub mod e_format;
pub use e_format::format_errors;
pub mod e_reporter;
pub use e_reporter::{print_bundle_errors, print_bundle_warnings, Reporter};
pub mod e_cli;
pub use e_cli::Cli;
pub mod e_config;
pub use e_config::ReportConfig;
pub mod e_fmt;
pub mod e_parser;
pub use e_parser::{parse_stats, read_stats};
pub mod e_reports;
