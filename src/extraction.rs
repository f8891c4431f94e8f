//! Persistence of salvage results.
//!
//! The core hands back in-memory results only; this module owns output
//! naming and writing. Every filename carries the run stamp so repeated
//! invocations never collide, and carved images additionally carry their
//! per-format index. A JSON manifest records offsets and digests for each
//! image written.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::{Result, SalvageError};
use crate::types::CarvedImage;

pub struct ExtractionReport {
    pub extracted: Vec<PathBuf>,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
struct ManifestEntry {
    filename: String,
    format: String,
    start_offset: usize,
    end_offset: usize,
    file_size: usize,
    sha256: String,
    recovered_at: String,
}

/// One stamp per invocation; every file persisted by that run shares it.
pub fn run_stamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn generate_filename(stamp: &str, image: &CarvedImage) -> String {
    format!(
        "recovered_{stamp}_{:03}.{}",
        image.index,
        image.format.extension()
    )
}

/// Writes a text artifact as `<stem>_<stamp>.txt` under `output_dir`,
/// creating the directory if needed.
pub fn save_text(output_dir: &Path, stem: &str, stamp: &str, content: &str) -> Result<PathBuf> {
    ensure_dir(output_dir)?;

    let path = output_dir.join(format!("{stem}_{stamp}.txt"));
    fs::write(&path, content).map_err(|source| SalvageError::SinkWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Writes one file per carved image plus the manifest. A single image
/// failing to write is warned and counted, not fatal; the manifest itself
/// is best-effort since the images are already on disk by then.
pub fn extract_images(
    buffer: &[u8],
    images: &[CarvedImage],
    output_dir: &Path,
    stamp: &str,
) -> Result<ExtractionReport> {
    ensure_dir(output_dir)?;

    let recovered_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut extracted = Vec::with_capacity(images.len());
    let mut failed = 0;
    let mut manifest = Vec::with_capacity(images.len());

    for image in images {
        let filename = generate_filename(stamp, image);
        let path = output_dir.join(&filename);
        let payload = image.bytes(buffer);

        match write_payload(&path, payload) {
            Ok(()) => {
                manifest.push(ManifestEntry {
                    filename,
                    format: image.format.to_string(),
                    start_offset: image.start,
                    end_offset: image.end,
                    file_size: payload.len(),
                    sha256: hex::encode(Sha256::digest(payload)),
                    recovered_at: recovered_at.clone(),
                });
                extracted.push(path);
            }
            Err(e) => {
                warn!("failed to write {}: {e}", path.display());
                failed += 1;
            }
        }
    }

    let manifest_path = output_dir.join(format!("manifest_{stamp}.json"));
    match serde_json::to_string_pretty(&manifest) {
        Ok(json) => {
            if let Err(e) = fs::write(&manifest_path, json) {
                warn!("failed to write {}: {e}", manifest_path.display());
            }
        }
        Err(e) => warn!("failed to serialize manifest: {e}"),
    }

    Ok(ExtractionReport { extracted, failed })
}

fn write_payload(path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut out = File::create(path)?;
    out.write_all(payload)?;
    out.sync_all()?;
    Ok(())
}

fn ensure_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| SalvageError::SinkWrite {
        path: output_dir.to_path_buf(),
        source,
    })
}
