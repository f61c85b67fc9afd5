//! Output writer
//!
//! Persists generated image bytes under the stable output layout:
//! `output_root/{product}/{tag}/{product}_{tag}_v{variant}_{timestamp}.png`.
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write never leaves a file the asset index would mistake for a
//! completed asset.

use adkiln_core::Result;
use std::path::{Path, PathBuf};

use crate::ratio::AspectRatio;

/// Writes assets into the output tree
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Persist one asset and return its final absolute path.
    ///
    /// The write-time timestamp in the filename keeps repeated runs for the
    /// same variant index from colliding.
    pub fn write(
        &self,
        product: &str,
        ratio: AspectRatio,
        variant: u32,
        bytes: &[u8],
    ) -> Result<PathBuf> {
        let dir = self.root.join(product).join(ratio.tag());
        std::fs::create_dir_all(&dir)?;

        let filename = asset_filename(product, ratio, variant, &now_stamp());
        let tmp = dir.join(format!(".{}.tmp", filename));
        std::fs::write(&tmp, bytes)?;

        let path = dir.join(&filename);
        std::fs::rename(&tmp, &path)?;

        Ok(path.canonicalize()?)
    }
}

/// The one filename convention the asset index parses back
pub fn asset_filename(product: &str, ratio: AspectRatio, variant: u32, stamp: &str) -> String {
    format!("{}_{}_v{}_{}.png", product, ratio.tag(), variant, stamp)
}

/// Current UTC time as a sortable `YYYYMMDD_HHMMSS` stamp
pub(crate) fn now_stamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    stamp_from_unix(secs)
}

fn stamp_from_unix(secs: u64) -> String {
    let days = secs / 86400;
    let tod = secs % 86400;

    let mut year = 1970u64;
    let mut remaining = days;
    loop {
        let len = if is_leap(year) { 366 } else { 365 };
        if remaining < len {
            break;
        }
        remaining -= len;
        year += 1;
    }

    let mut month = 1u64;
    for len in month_lengths(year) {
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        year,
        month,
        remaining + 1,
        tod / 3600,
        (tod % 3600) / 60,
        tod % 60
    )
}

fn is_leap(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn month_lengths(year: u64) -> [u64; 12] {
    [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ]
}
