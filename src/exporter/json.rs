// file: src/exporter/json.rs
// description: json export utilities for assembled dictionary entries

use crate::error::{DictionaryError, Result};
use crate::models::DictionaryEntry;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub exported_at: String,
    pub total_entries: usize,
    pub entries: &'a [DictionaryEntry],
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `{stem}.json` holding every entry in order.
    pub fn export_entries(
        &self,
        stem: &str,
        entries: &[DictionaryEntry],
        pretty: bool,
    ) -> Result<PathBuf> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_entries: entries.len(),
            entries,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&manifest)
        } else {
            serde_json::to_string(&manifest)
        }
        .map_err(|e| DictionaryError::Serialization(e.to_string()))?;

        let path = self.output_dir.join(format!("{}.json", stem));
        fs::write(&path, json)?;

        info!(
            "Export complete: {} entries exported",
            manifest.total_entries
        );
        Ok(path)
    }
}
