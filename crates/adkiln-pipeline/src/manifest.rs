//! Run manifest
//!
//! Records the provenance of every newly generated asset in a run (provider,
//! prompt, content hash, timing) so a campaign's assets can be audited and
//! reproduced later. Reused assets are not re-recorded; their provenance is in
//! the manifest of the run that created them.

use adkiln_core::{KilnError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::writer::now_stamp;

/// Provenance for a single generated asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub product: String,
    /// Aspect ratio tag, e.g. "9x16"
    pub ratio: String,
    pub variant: u32,
    pub provider: String,
    pub prompt: String,
    /// "sha256:..." hash of the written bytes
    pub content_hash: String,
    pub output_path: String,
    pub duration_secs: f64,
    pub generated_at: String,
}

/// All assets generated by one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub generated_at: String,
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

/// TOML wrapper
#[derive(Debug, Serialize, Deserialize)]
struct ManifestFile {
    manifest: RunManifest,
}

impl RunManifest {
    pub fn new() -> Self {
        Self {
            generated_at: now_stamp(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ManifestFile = toml::from_str(&content).map_err(|e| {
            KilnError::Parse(format!("Failed to parse manifest {}: {}", path.display(), e))
        })?;
        Ok(file.manifest)
    }

    /// Save the manifest as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = ManifestFile {
            manifest: self.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for RunManifest {
    fn default() -> Self {
        Self::new()
    }
}
