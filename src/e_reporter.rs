use crate::e_config::ReportConfig;
use crate::e_extract::extract;
use crate::e_fmt::format_summary;
use crate::e_format::format_errors;
use crate::e_severity::max_severity;
use crate::e_transform::transform_errors;
use crate::e_types::{CompilationResult, DiagnosticEntry, SeverityKind};
use anyhow::Result;
use std::io::{self, Write};

/// Prints the diagnostics of a compilation result and hands back a summary.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Reporter { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Extracted, transformed, and narrowed to the highest severity.
    pub fn top_entries(&self, result: &CompilationResult, kind: SeverityKind) -> Vec<DiagnosticEntry> {
        let extracted = extract(result, kind);
        let transformed = transform_errors(&extracted);
        let top = max_severity(&transformed);
        log::debug!(
            "{}: {} extracted, {} at max severity",
            kind,
            extracted.len(),
            top.len()
        );
        top
    }

    /// Writes the separator, the formatted blocks, and the separator again to
    /// `out`. Returns e.g. `"3 warnings"`.
    pub fn report_to<W: Write>(
        &self,
        out: &mut W,
        result: &CompilationResult,
        kind: SeverityKind,
    ) -> Result<String> {
        let top = self.top_entries(result, kind);
        let summary = format_summary(top.len(), kind);

        writeln!(out, "{}", self.config.separator)?;
        for line in format_errors(&top, kind, self.config.color) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", self.config.separator)?;
        out.flush()?;

        Ok(summary)
    }

    /// Same as [`Reporter::report_to`] on standard output.
    pub fn report(&self, result: &CompilationResult, kind: SeverityKind) -> Result<String> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.report_to(&mut handle, result, kind)
    }
}

pub fn print_bundle_warnings(result: &CompilationResult) -> Result<String> {
    Reporter::default().report(result, SeverityKind::Warning)
}

pub fn print_bundle_errors(result: &CompilationResult) -> Result<String> {
    Reporter::default().report(result, SeverityKind::Error)
}
