use crate::e_types::DiagnosticEntry;

/// Keeps only the entries at the highest severity present (floor 0), in
/// their original order.
///
/// # Example
/// ```
/// use bundle_e::{max_severity, DiagnosticEntry};
///
/// let entries = vec![
///     DiagnosticEntry::new("a").with_severity(1),
///     DiagnosticEntry::new("b").with_severity(3),
/// ];
/// let top = max_severity(&entries);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].message, "b");
/// ```
pub fn max_severity(entries: &[DiagnosticEntry]) -> Vec<DiagnosticEntry> {
    let max = entries.iter().map(|e| e.severity).fold(0, i64::max);
    entries
        .iter()
        .filter(|e| e.severity == max)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_severities(severities: &[i64]) -> Vec<DiagnosticEntry> {
        severities
            .iter()
            .enumerate()
            .map(|(i, s)| DiagnosticEntry::new(format!("entry {}", i)).with_severity(*s))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(max_severity(&[]).is_empty());
    }

    #[test]
    fn test_ties_keep_order() {
        let top = max_severity(&with_severities(&[1, 3, 3, 2]));
        let names: Vec<_> = top.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(names, vec!["entry 1", "entry 2"]);
    }

    #[test]
    fn test_all_zero_keeps_everything() {
        assert_eq!(max_severity(&with_severities(&[0, 0, 0])).len(), 3);
    }

    #[test]
    fn test_negative_below_floor_is_dropped() {
        assert!(max_severity(&with_severities(&[-1, -5])).is_empty());
    }
}
