//! Turns display-ready entries into printable lines.
//!
//! Formatters run in a fixed order (module-not-found, lint, default) and
//! each only picks up the entries it owns, so every entry is rendered once.

use crate::e_fmt::remove_loaders;
use crate::e_types::{DiagnosticEntry, EntryKind, SeverityKind};
use nu_ansi_term::Color;

/// Renders `entries` as console lines for `kind`.
pub fn format_errors(entries: &[DiagnosticEntry], kind: SeverityKind, color: bool) -> Vec<String> {
    let mut lines = format_module_not_found(entries);
    lines.extend(format_lint_errors(entries, kind, color));
    lines.extend(format_default(entries, kind, color));
    lines
}

fn title(kind: SeverityKind, color: bool) -> String {
    let label = kind.label().to_uppercase();
    if !color {
        return label;
    }
    let background = match kind {
        SeverityKind::Error => Color::Red,
        SeverityKind::Warning => Color::Yellow,
    };
    Color::Black
        .on(background)
        .paint(format!(" {} ", label))
        .to_string()
}

fn title_line(entry: &DiagnosticEntry, kind: SeverityKind, color: bool) -> String {
    match entry.file.as_deref().map(remove_loaders).filter(|f| !f.is_empty()) {
        Some(file) => format!("{} in {}", title(kind, color), file),
        None => title(kind, color),
    }
}

fn is_relative(module: &str) -> bool {
    module.starts_with("./") || module.starts_with("../") || module.starts_with('/')
}

/// Groups unresolved modules into one "not found" block with an install hint.
pub fn format_module_not_found(entries: &[DiagnosticEntry]) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for entry in entries.iter().filter(|e| e.kind == Some(EntryKind::ModuleNotFound)) {
        let Some(module) = entry.module.as_deref() else {
            continue;
        };
        let file = entry.file.as_deref().map(remove_loaders);
        match groups.iter_mut().find(|(m, _)| *m == module) {
            Some((_, files)) => files.extend(file),
            None => groups.push((module, file.into_iter().collect())),
        }
    }
    if groups.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        if groups.len() == 1 {
            "This dependency was not found:".to_string()
        } else {
            "These dependencies were not found:".to_string()
        },
        String::new(),
    ];
    for (module, files) in &groups {
        if files.is_empty() {
            lines.push(format!("* {}", module));
        } else {
            lines.push(format!("* {} in {}", module, files.join(", ")));
        }
    }

    let installable: Vec<&str> = groups
        .iter()
        .map(|(m, _)| *m)
        .filter(|m| !is_relative(m))
        .collect();
    if !installable.is_empty() {
        lines.push(String::new());
        lines.push(if installable.len() == 1 {
            "To install it, you can run: npm install --save ".to_string() + installable[0]
        } else {
            format!(
                "To install them, you can run: npm install --save {}",
                installable.join(" ")
            )
        });
    }
    lines
}

pub fn format_lint_errors(entries: &[DiagnosticEntry], kind: SeverityKind, color: bool) -> Vec<String> {
    let lint: Vec<_> = entries
        .iter()
        .filter(|e| e.kind == Some(EntryKind::LintError))
        .collect();
    if lint.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for entry in lint {
        lines.push(title_line(entry, kind, color));
        lines.push(entry.message.clone());
        lines.push(String::new());
    }
    lines.push("You may use special comments to disable some warnings.".to_string());
    lines.push("Use // eslint-disable-next-line to ignore the next line.".to_string());
    lines.push("Use /* eslint-disable */ to ignore all warnings in a file.".to_string());
    lines
}

/// Anything no other formatter claimed.
pub fn format_default(entries: &[DiagnosticEntry], kind: SeverityKind, color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in entries.iter().filter(|e| e.kind.is_none()) {
        lines.push(title_line(entry, kind, color));
        lines.push(String::new());
        lines.push(entry.message.clone());
        if let Some(origin) = entry.origin.as_deref().filter(|o| !o.is_empty()) {
            lines.push(origin.to_string());
        }
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(module: &str, file: &str) -> DiagnosticEntry {
        DiagnosticEntry {
            kind: Some(EntryKind::ModuleNotFound),
            module: Some(module.to_string()),
            ..DiagnosticEntry::new(format!("Module not found {}", module)).with_file(file)
        }
    }

    #[test]
    fn test_default_block() {
        let entry = DiagnosticEntry::new("Unexpected thing")
            .with_file("./node_modules/babel-loader!./src/a.js")
            .with_origin("\n @ ./src/index.js 1:0-10");
        let lines = format_errors(&[entry], SeverityKind::Warning, false);
        assert_eq!(
            lines,
            vec![
                "WARNING in ./src/a.js",
                "",
                "Unexpected thing",
                "\n @ ./src/index.js 1:0-10",
                "",
            ]
        );
    }

    #[test]
    fn test_default_block_without_file() {
        let lines = format_errors(&[DiagnosticEntry::new("oops")], SeverityKind::Error, false);
        assert_eq!(lines, vec!["ERROR", "", "oops", ""]);
    }

    #[test]
    fn test_module_not_found_grouped() {
        let entries = vec![
            not_found("vue", "./src/main.js"),
            not_found("./missing", "./src/a.js"),
            not_found("vue", "./src/b.js"),
            not_found("lodash", "./src/c.js"),
        ];
        let lines = format_module_not_found(&entries);
        assert_eq!(
            lines,
            vec![
                "These dependencies were not found:",
                "",
                "* vue in ./src/main.js, ./src/b.js",
                "* ./missing in ./src/a.js",
                "* lodash in ./src/c.js",
                "",
                "To install them, you can run: npm install --save vue lodash",
            ]
        );
    }

    #[test]
    fn test_relative_only_has_no_install_hint() {
        let lines = format_module_not_found(&[not_found("../x", "./src/a.js")]);
        assert_eq!(lines, vec!["This dependency was not found:", "", "* ../x in ./src/a.js"]);
    }

    #[test]
    fn test_lint_block() {
        let entry = DiagnosticEntry {
            kind: Some(EntryKind::LintError),
            ..DiagnosticEntry::new("  1:1  error  no-undef").with_file("./src/a.js")
        };
        let lines = format_errors(&[entry], SeverityKind::Error, false);
        assert_eq!(lines[0], "ERROR in ./src/a.js");
        assert_eq!(lines[1], "  1:1  error  no-undef");
        assert!(lines.last().unwrap().contains("eslint-disable"));
    }

    #[test]
    fn test_color_title_is_painted() {
        let lines = format_errors(&[DiagnosticEntry::new("x")], SeverityKind::Error, true);
        assert!(lines[0].contains(" ERROR "));
        assert!(lines[0].contains('\u{1b}'));
    }

    #[test]
    fn test_deterministic() {
        let entries = vec![not_found("vue", "./a.js"), DiagnosticEntry::new("plain")];
        assert_eq!(
            format_errors(&entries, SeverityKind::Error, false),
            format_errors(&entries, SeverityKind::Error, false)
        );
    }
}
