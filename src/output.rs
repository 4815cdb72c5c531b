//! Writing processed sections to disk as JSON or CSV.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::parser::ProcessedSection;

const CSV_HEADER: &str = "id,original_text,transformed_text";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(OutputFormat::Json),
            Some("csv") => Ok(OutputFormat::Csv),
            _ => Err(Error::UnsupportedOutput(path.to_path_buf())),
        }
    }
}

pub fn render(records: &[ProcessedSection], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => Ok(render_csv(records)),
    }
}

fn render_csv(records: &[ProcessedSection]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{}\n",
            r.id,
            csv_field(&r.original_text),
            csv_field(&r.transformed_text)
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Remove a leftover output file from a previous run, if any.
pub fn clear_previous(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
        info!(path = %path.display(), "removed previous output");
    }
    Ok(())
}

pub fn write(path: &Path, records: &[ProcessedSection]) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    fs::write(path, render(records, format)?)?;
    info!(path = %path.display(), records = records.len(), ?format, "output written");
    Ok(())
}

// ── Tests ──
