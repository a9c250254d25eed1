//! File-backed shift source
//!
//! Reads a shift export (JSON array or YAML list of shift records) from
//! disk. The file is re-read on every load so edits between runs are seen.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shiftwatch_core::{domain::Shift, ports::IShiftSource};

/// Serialization of a shift export
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// YAML for `.yaml`/`.yml`, JSON otherwise
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FileFormat::Yaml
            }
            _ => FileFormat::Json,
        }
    }
}

/// Parses a list of shifts from `content`
pub fn parse_shifts(content: &str, format: FileFormat) -> Result<Vec<Shift>> {
    let shifts = match format {
        FileFormat::Json => {
            serde_json::from_str(content).context("Failed to parse shifts as JSON")?
        }
        FileFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse shifts as YAML")?
        }
    };
    Ok(shifts)
}

/// [`IShiftSource`] adapter over a file on disk
pub struct FileShiftSource {
    path: PathBuf,
}

impl FileShiftSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl IShiftSource for FileShiftSource {
    async fn load_shifts(&self) -> Result<Vec<Shift>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_shifts(&content, FileFormat::from_path(&self.path))
    }
}
