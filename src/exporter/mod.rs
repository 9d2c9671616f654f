// file: src/exporter/mod.rs
// description: writes rendered documents and entry exports to disk
// reference: filesystem export utilities

pub mod json;

pub use json::{ExportManifest, JsonExporter};

use crate::document::GeneratedFile;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes a rendered document into `dir`, creating it if needed.
pub fn write_file(dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&file.file_name);
    fs::write(&path, &file.bytes)?;
    info!("Wrote {} ({} bytes)", path.display(), file.bytes.len());
    Ok(path)
}
