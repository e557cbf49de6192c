//! # bundle-e
//!
//! `bundle-e` pretty-prints the warnings and errors of a module bundler run.
//! Feed it the stats JSON the bundler wrote (or `-` to read stdin) and it
//! prints the most severe diagnostics followed by a one-line summary.
//!
//! ## Quick Start
//! ```sh
//! webpack --json > stats.json
//! bundle-e stats.json
//! ```

use anyhow::{Context, Result};
use bundle_e::e_cli::print_version;
use bundle_e::e_reports::generate_comfy_report;
use bundle_e::{read_stats, Cli, ReportConfig, Reporter, SeverityKind};
use clap::Parser;
use std::process::exit;

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    log::debug!("CLI options: {:?}", cli);

    if cli.version {
        print_version();
        return Ok(());
    }

    let stats_path = cli
        .stats
        .as_deref()
        .context("missing <STATS> argument (use - to read stdin)")?;

    let mut config = ReportConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    log::debug!("Report configuration: {:?}", config);

    let result = read_stats(stats_path)?;

    if cli.table {
        println!("{}", generate_comfy_report(&result));
    }

    let reporter = Reporter::new(config);
    let error_count = reporter.top_entries(&result, SeverityKind::Error).len();
    let kind = cli.requested_kind().unwrap_or(if error_count > 0 {
        SeverityKind::Error
    } else {
        SeverityKind::Warning
    });

    let summary = reporter.report(&result, kind)?;
    println!("{}", summary);

    if kind == SeverityKind::Error && error_count > 0 {
        exit(1);
    }
    Ok(())
}
