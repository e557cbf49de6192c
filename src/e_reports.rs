use crate::e_extract::MAX_DEPTH;
use crate::e_types::{CompilationResult, SeverityKind};
use comfy_table::{Cell, ContentArrangement, Row, Table};

/// One row of the per-compilation overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationRow {
    pub path: String,
    pub warnings: usize,
    pub errors: usize,
}

/// Flattens the result tree depth-first. Children are named by their
/// `name` or their index, joined with `/`.
pub fn collect_rows(result: &CompilationResult) -> Vec<CompilationRow> {
    let mut rows = Vec::new();
    walk(result, result.name.clone().unwrap_or_else(|| "<root>".to_string()), 0, &mut rows);
    rows
}

fn walk(node: &CompilationResult, path: String, depth: usize, rows: &mut Vec<CompilationRow>) {
    rows.push(CompilationRow {
        path: path.clone(),
        warnings: node.entries(SeverityKind::Warning).len(),
        errors: node.entries(SeverityKind::Error).len(),
    });
    if depth >= MAX_DEPTH {
        return;
    }
    for (i, child) in node.children().iter().enumerate() {
        let name = child.name.clone().unwrap_or_else(|| i.to_string());
        walk(child, format!("{}/{}", path, name), depth + 1, rows);
    }
}

pub fn generate_comfy_report(result: &CompilationResult) -> String {
    let current_time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut metadata_table = Table::new();
    metadata_table.set_content_arrangement(ContentArrangement::Dynamic);
    metadata_table.set_width(80);
    metadata_table.add_row(Row::from(vec![
        Cell::new("Bundle Report"),
        Cell::new(result.name.as_deref().unwrap_or("<root>")),
    ]));
    metadata_table.add_row(Row::from(vec![
        Cell::new("generated on"),
        Cell::new(current_time),
    ]));
    metadata_table.add_row(Row::from(vec![
        Cell::new("bundle-e version"),
        Cell::new(env!("CARGO_PKG_VERSION")),
    ]));

    let mut report = metadata_table.to_string();
    report.push_str("\n\n");

    let mut result_table = Table::new();
    result_table.set_content_arrangement(ContentArrangement::Dynamic);
    result_table.set_width(100);
    result_table.set_header(vec!["compilation", "warnings", "errors"]);
    for row in collect_rows(result) {
        result_table.add_row(Row::from(vec![
            Cell::new(row.path),
            Cell::new(row.warnings),
            Cell::new(row.errors),
        ]));
    }
    report.push_str(&result_table.to_string());
    report
}
