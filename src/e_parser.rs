use crate::e_types::CompilationResult;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

/// Parses a bundler stats dump into a [`CompilationResult`].
///
/// Accepts the compilation object itself or a wrapper holding it under
/// `compilation`.
///
/// # Example
/// ```
/// use bundle_e::e_parser::parse_stats;
///
/// let result = parse_stats(r#"{"compilation": {"errors": ["boom"], "warnings": []}}"#).unwrap();
/// assert_eq!(result.errors[0].message, "boom");
/// ```
pub fn parse_stats(json: &str) -> Result<CompilationResult> {
    let mut value: Value = serde_json::from_str(json).context("stats are not valid JSON")?;
    if let Some(inner) = value.get_mut("compilation") {
        log::trace!("Unwrapping `compilation` field");
        value = inner.take();
    }
    serde_json::from_value(value).context("stats do not describe a compilation result")
}

/// Reads stats from `path`, or from stdin when `path` is `-`.
pub fn read_stats(path: &str) -> Result<CompilationResult> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stats from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read stats {}", path))?
    };
    parse_stats(&contents).with_context(|| format!("in {}", path))
}
