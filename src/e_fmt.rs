use crate::e_types::SeverityKind;

/// `"<count> <label>"`, plural unless `count == 1`.
///
/// # Example
/// ```
/// use bundle_e::e_fmt::format_summary;
/// use bundle_e::SeverityKind;
///
/// assert_eq!(format_summary(1, SeverityKind::Warning), "1 warning");
/// assert_eq!(format_summary(0, SeverityKind::Warning), "0 warnings");
/// assert_eq!(format_summary(5, SeverityKind::Error), "5 errors");
/// ```
pub fn format_summary(count: usize, kind: SeverityKind) -> String {
    format!("{} {}", count, pluralize(kind.label(), count))
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Strips a webpack loader chain, keeping the resource after the last `!`.
pub fn remove_loaders(file: &str) -> &str {
    file.rsplit('!').next().unwrap_or(file)
}
