#![allow(dead_code)]
use bundle_e::{CompilationResult, DiagnosticEntry};
use std::fs;
use std::io::Result as IoResult;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// A temporary working directory holding a stats dump.
pub struct StatsFixture {
    /// When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    pub stats_path: PathBuf,
}

impl StatsFixture {
    pub fn new(stats_json: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let stats_path = temp_dir.path().join("stats.json");
        fs::write(&stats_path, stats_json)?;
        Ok(StatsFixture {
            temp_dir,
            stats_path,
        })
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn write_config(&self, contents: &str) -> IoResult<PathBuf> {
        let path = self.temp_dir.path().join("bundle-e.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }
}

pub fn entries(messages: &[&str]) -> Vec<DiagnosticEntry> {
    messages.iter().map(|m| DiagnosticEntry::new(*m)).collect()
}

pub fn warnings_node(messages: &[&str]) -> CompilationResult {
    CompilationResult {
        warnings: entries(messages),
        ..Default::default()
    }
}

pub fn messages(entries: &[DiagnosticEntry]) -> Vec<String> {
    entries.iter().map(|e| e.message.clone()).collect()
}
