use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Selects which diagnostic list of a [`CompilationResult`] is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityKind {
    Warning,
    Error,
}

impl SeverityKind {
    /// The lowercase label used in summaries (`"warning"` / `"error"`).
    pub fn label(&self) -> &'static str {
        match self {
            SeverityKind::Warning => "warning",
            SeverityKind::Error => "error",
        }
    }
}

impl fmt::Display for SeverityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type tag assigned by a transformer. Entries without one go through the
/// default formatter.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EntryKind {
    ModuleNotFound,
    LintError,
}

/// One warning or error produced by the bundler.
///
/// `payload` keeps the raw bundler object untouched; the other fields are
/// lifted out of it so the transform and format stages stay typed.
///
/// # Example
/// ```
/// use bundle_e::DiagnosticEntry;
///
/// let entry = DiagnosticEntry::new("Module not found")
///     .with_severity(900)
///     .with_file("./src/main.js");
///
/// assert_eq!(entry.severity, 900);
/// assert_eq!(entry.file.as_deref(), Some("./src/main.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiagnosticEntry {
    pub message: String,
    pub severity: i64,
    pub name: Option<String>,
    pub file: Option<String>,
    pub origin: Option<String>,
    pub kind: Option<EntryKind>,
    pub module: Option<String>,
    pub payload: Value,
}

impl DiagnosticEntry {
    pub fn new(message: impl Into<String>) -> Self {
        DiagnosticEntry {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_severity(mut self, severity: i64) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Builds an entry from a raw stats value.
    ///
    /// Stats may hold a bare string or an object with `message`, `name`,
    /// `moduleName`/`file`, `severity` and `moduleTrace`. Without `name`, the
    /// class prefix of `stack` is used. Anything else is rendered as its
    /// JSON text.
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::String(text) => DiagnosticEntry {
                message: text.clone(),
                payload: value,
                ..Default::default()
            },
            Value::Object(map) => {
                let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
                DiagnosticEntry {
                    message: text("message").unwrap_or_default(),
                    severity: map.get("severity").and_then(Value::as_i64).unwrap_or(0),
                    name: text("name").or_else(|| text("stack").and_then(|s| stack_class_name(&s))),
                    file: text("moduleName").or_else(|| text("file")),
                    origin: map.get("moduleTrace").and_then(module_trace_origin),
                    kind: None,
                    module: None,
                    payload: value,
                }
            }
            other => DiagnosticEntry {
                message: other.to_string(),
                payload: value,
                ..Default::default()
            },
        }
    }
}

impl<'de> Deserialize<'de> for DiagnosticEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DiagnosticEntry::from_value)
    }
}

/// Webpack's JSON stats carry no `name`; the error class only shows up as the
/// `ModuleNotFoundError:` prefix of `stack`.
fn stack_class_name(stack: &str) -> Option<String> {
    let (head, _) = stack.split_once(':')?;
    let head = head.trim();
    if !head.is_empty() && head.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(head.to_string())
    } else {
        None
    }
}

/// Lists written as `null` read as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DiagnosticEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DiagnosticEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders a stats `moduleTrace` as the `@ issuer` chain shown under a
/// diagnostic, one issuer per line.
fn module_trace_origin(trace: &Value) -> Option<String> {
    let items = trace.as_array()?;
    let mut origin = String::new();
    for item in items {
        let Some(issuer) = item.get("originName").and_then(Value::as_str) else {
            continue;
        };
        origin.push_str("\n @ ");
        origin.push_str(issuer);
        if let Some(deps) = item.get("dependencies").and_then(Value::as_array) {
            for loc in deps.iter().filter_map(|d| d.get("loc").and_then(Value::as_str)) {
                origin.push(' ');
                origin.push_str(loc);
            }
        }
    }
    if origin.is_empty() {
        None
    } else {
        Some(origin)
    }
}

/// A node of the bundler's result tree. Multi-compiler builds nest their
/// sub-results under `children`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CompilationResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warnings: Vec<DiagnosticEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<DiagnosticEntry>,
    #[serde(default)]
    pub children: Option<Vec<CompilationResult>>,
}

impl CompilationResult {
    /// The node's own list for `kind`.
    pub fn entries(&self, kind: SeverityKind) -> &[DiagnosticEntry] {
        match kind {
            SeverityKind::Warning => &self.warnings,
            SeverityKind::Error => &self.errors,
        }
    }

    pub fn children(&self) -> &[CompilationResult] {
        self.children.as_deref().unwrap_or(&[])
    }
}
