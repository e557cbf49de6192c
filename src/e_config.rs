use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "bundle-e.toml";

/// Display settings for the reporter.
///
/// ```toml
/// color = false
/// separator = "----"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub color: bool,
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            color: true,
            separator: String::new(),
        }
    }
}

impl ReportConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid report configuration")
    }

    /// Defaults, then the TOML file, then `NO_COLOR`.
    ///
    /// An explicit `path` must exist; the implicit `bundle-e.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None if Path::new(CONFIG_FILE_NAME).exists() => Self::read(Path::new(CONFIG_FILE_NAME))?,
            None => ReportConfig::default(),
        };
        if std::env::var_os("NO_COLOR").is_some() {
            log::debug!("NO_COLOR set, disabling color");
            config.color = false;
        }
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        log::debug!("Reading report configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
