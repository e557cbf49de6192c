//! Rewrites raw bundler entries into display-ready ones.
//!
//! Each [`Transformer`] looks at an entry and either returns it untouched or
//! returns a rewritten copy with a new message, severity or [`EntryKind`].
//! The default chain recognises babel syntax errors, unresolved modules and
//! eslint output.

use crate::e_types::{DiagnosticEntry, EntryKind};
use once_cell::sync::Lazy;
use regex::Regex;

pub const SYNTAX_ERROR_SEVERITY: i64 = 1000;
pub const MODULE_NOT_FOUND_SEVERITY: i64 = 900;

static MODULE_BUILD_FAILED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Module build failed.*:\s").unwrap());
static STACK_FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*at\s.*:\d+:\d+[\s)]*\n").unwrap());
static CANT_RESOLVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Can't resolve '([^']+)'").unwrap());

pub trait Transformer {
    fn name(&self) -> &'static str;
    fn transform(&self, entry: DiagnosticEntry) -> DiagnosticEntry;
}

/// Babel/loader syntax errors: tidied message, stack frames removed.
pub struct SyntaxErrorTransformer;

impl Transformer for SyntaxErrorTransformer {
    fn name(&self) -> &'static str {
        "syntax-error"
    }

    fn transform(&self, entry: DiagnosticEntry) -> DiagnosticEntry {
        let is_syntax_error = entry.name.as_deref() == Some("ModuleBuildError")
            && entry.message.contains("SyntaxError");
        if !is_syntax_error {
            return entry;
        }
        let cleaned = MODULE_BUILD_FAILED
            .replace(&entry.message, "Syntax Error: ")
            .replacen("SyntaxError: ", "", 1);
        let message = STACK_FRAME
            .replace_all(&format!("{}\n", cleaned), "")
            .trim_end()
            .to_string();
        DiagnosticEntry {
            message,
            severity: SYNTAX_ERROR_SEVERITY,
            ..entry
        }
    }
}

/// `Module not found: Error: Can't resolve 'x'` becomes a grouped
/// dependency hint.
pub struct ModuleNotFoundTransformer;

impl Transformer for ModuleNotFoundTransformer {
    fn name(&self) -> &'static str {
        "module-not-found"
    }

    fn transform(&self, entry: DiagnosticEntry) -> DiagnosticEntry {
        if entry.name.as_deref() != Some("ModuleNotFoundError")
            || !entry.message.starts_with("Module not found")
        {
            return entry;
        }
        let request = CANT_RESOLVE
            .captures(&entry.message)
            .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()));
        let Some(request) = request else {
            return entry;
        };
        DiagnosticEntry {
            message: format!("Module not found {}", request),
            severity: MODULE_NOT_FOUND_SEVERITY,
            name: Some("Module not found".to_string()),
            kind: Some(EntryKind::ModuleNotFound),
            module: Some(request),
            ..entry
        }
    }
}

/// Output of eslint-loader / eslint-webpack-plugin.
pub struct LintErrorTransformer;

impl Transformer for LintErrorTransformer {
    fn name(&self) -> &'static str {
        "lint-error"
    }

    fn transform(&self, entry: DiagnosticEntry) -> DiagnosticEntry {
        let mentions_eslint = |text: &str| {
            text.contains("eslint-loader") || text.contains("eslint-webpack-plugin")
        };
        let is_lint = entry.name.as_deref() == Some("ESLintError")
            || mentions_eslint(&entry.message)
            || entry.file.as_deref().is_some_and(mentions_eslint);
        if !is_lint {
            return entry;
        }
        DiagnosticEntry {
            name: Some("Lint error".to_string()),
            kind: Some(EntryKind::LintError),
            ..entry
        }
    }
}

/// The chain applied by [`transform_errors`], in order.
pub fn default_transformers() -> Vec<Box<dyn Transformer>> {
    vec![
        Box::new(SyntaxErrorTransformer),
        Box::new(ModuleNotFoundTransformer),
        Box::new(LintErrorTransformer),
    ]
}

pub fn transform_errors(entries: &[DiagnosticEntry]) -> Vec<DiagnosticEntry> {
    transform_with(entries, &default_transformers())
}

/// Runs every entry through `transformers`, left to right.
pub fn transform_with(
    entries: &[DiagnosticEntry],
    transformers: &[Box<dyn Transformer>],
) -> Vec<DiagnosticEntry> {
    entries
        .iter()
        .cloned()
        .map(|entry| {
            transformers.iter().fold(entry, |acc, t| {
                let before = acc.kind;
                let out = t.transform(acc);
                if out.kind != before {
                    log::debug!("{} tagged {:?}", t.name(), out.message);
                }
                out
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error() {
        let entry = DiagnosticEntry::new(
            "Module build failed (from ./node_modules/babel-loader/lib/index.js):\n\
             SyntaxError: /app/src/a.js: Unexpected token (3:4)\n\
             \x20   at Parser.raise (/app/node_modules/@babel/parser/lib/index.js:10:20)\n\
             \x20 1 | const a = {",
        )
        .with_name("ModuleBuildError");
        let out = SyntaxErrorTransformer.transform(entry);
        assert_eq!(out.severity, SYNTAX_ERROR_SEVERITY);
        assert!(out.message.starts_with("Syntax Error: "));
        assert!(!out.message.contains("SyntaxError: "));
        assert!(!out.message.contains("Parser.raise"));
        assert!(out.message.ends_with("1 | const a = {"));
    }

    #[test]
    fn test_syntax_error_requires_build_error_name() {
        let entry = DiagnosticEntry::new("SyntaxError: nope");
        let out = SyntaxErrorTransformer.transform(entry.clone());
        assert_eq!(out, entry);
    }

    #[test]
    fn test_module_not_found() {
        let entry = DiagnosticEntry::new(
            "Module not found: Error: Can't resolve 'lodash' in '/app/src'",
        )
        .with_name("ModuleNotFoundError")
        .with_file("./src/main.js");
        let out = ModuleNotFoundTransformer.transform(entry);
        assert_eq!(out.kind, Some(EntryKind::ModuleNotFound));
        assert_eq!(out.module.as_deref(), Some("lodash"));
        assert_eq!(out.message, "Module not found lodash");
        assert_eq!(out.severity, MODULE_NOT_FOUND_SEVERITY);
        assert_eq!(out.file.as_deref(), Some("./src/main.js"));
    }

    #[test]
    fn test_lint_error_keeps_severity() {
        let entry = DiagnosticEntry::new("Module Error (from ./node_modules/eslint-loader/index.js):")
            .with_severity(7);
        let out = LintErrorTransformer.transform(entry);
        assert_eq!(out.kind, Some(EntryKind::LintError));
        assert_eq!(out.name.as_deref(), Some("Lint error"));
        assert_eq!(out.severity, 7);
    }

    #[test]
    fn test_plain_entries_pass_through() {
        let entries = vec![DiagnosticEntry::new("just a warning").with_file("./a.js")];
        assert_eq!(transform_errors(&entries), entries);
    }
}
