use crate::e_types::{CompilationResult, DiagnosticEntry, SeverityKind};
use std::collections::HashSet;

/// Nodes nested deeper than this are not visited.
pub const MAX_DEPTH: usize = 64;

/// Collects the `kind` diagnostics of a compilation result tree.
///
/// A node's own list wins: children are only visited when that list is
/// empty. The result is deduplicated by message text, first occurrence kept.
///
/// # Example
/// ```
/// use bundle_e::{extract, CompilationResult, DiagnosticEntry, SeverityKind};
///
/// let child = CompilationResult {
///     warnings: vec![DiagnosticEntry::new("a"), DiagnosticEntry::new("a")],
///     ..Default::default()
/// };
/// let root = CompilationResult {
///     children: Some(vec![child]),
///     ..Default::default()
/// };
///
/// let found = extract(&root, SeverityKind::Warning);
/// assert_eq!(found.len(), 1);
/// ```
pub fn extract(root: &CompilationResult, kind: SeverityKind) -> Vec<DiagnosticEntry> {
    collect(root, kind, 0)
}

fn collect(node: &CompilationResult, kind: SeverityKind, depth: usize) -> Vec<DiagnosticEntry> {
    let mut entries = node.entries(kind).to_vec();
    if entries.is_empty() && node.children.is_some() {
        if depth >= MAX_DEPTH {
            log::warn!(
                "Not descending into {} child compilation(s) below depth {}",
                node.children().len(),
                MAX_DEPTH
            );
        } else {
            for child in node.children() {
                entries.extend(collect(child, kind, depth + 1));
            }
        }
    }
    log::trace!(
        "depth {} ({}): {} {} entries before dedup",
        depth,
        node.name.as_deref().unwrap_or("root"),
        entries.len(),
        kind
    );
    unique_by_message(entries)
}

/// Drops entries whose message text was already seen, keeping order.
pub fn unique_by_message(entries: Vec<DiagnosticEntry>) -> Vec<DiagnosticEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.message.clone()))
        .collect()
}
