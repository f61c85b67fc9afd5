//! Asset repository index
//!
//! Discovers previously generated assets by scanning the output tree. The
//! filename is the only metadata store: `{product}_{tag}_v{variant}_{stamp}.png`
//! parses back into its variant index. Files that do not match the convention
//! are ignored rather than treated as errors, so stray files in the output
//! tree cannot break a run.

use adkiln_core::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::ratio::AspectRatio;

/// One asset discovered on disk
#[derive(Debug, Clone)]
pub struct AssetRecord {
    pub product: String,
    pub ratio: AspectRatio,
    pub variant: u32,
    /// Creation stamp parsed out of the filename, `YYYYMMDD_HHMMSS`
    pub timestamp: String,
    /// Absolute path to the asset file
    pub path: PathBuf,
}

/// Read-only view over the assets already present under an output root
pub struct AssetIndex {
    root: PathBuf,
}

impl AssetIndex {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All assets for a (product, ratio) pair, sorted by filename.
    ///
    /// A missing directory means no assets yet, not an error.
    pub fn existing_assets(&self, product: &str, ratio: AspectRatio) -> Result<Vec<AssetRecord>> {
        let dir = self.root.join(product).join(ratio.tag());
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let dir = dir.canonicalize()?;

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let filename = entry.file_name();
            let Some(name) = filename.to_str() else {
                continue;
            };
            if let Some((variant, timestamp)) = parse_variant(name, product, ratio) {
                records.push(AssetRecord {
                    product: product.to_string(),
                    ratio,
                    variant,
                    timestamp,
                    path: dir.join(name),
                });
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }

    /// The set of variant indices already satisfied for a (product, ratio)
    /// pair. Multiple files for one index count once.
    pub fn existing_variants(&self, product: &str, ratio: AspectRatio) -> Result<BTreeSet<u32>> {
        Ok(self
            .existing_assets(product, ratio)?
            .into_iter()
            .map(|r| r.variant)
            .collect())
    }
}

/// Parse `(variant, timestamp)` out of a filename following the output
/// convention for the given product and ratio. Returns `None` for anything
/// that does not match exactly.
pub fn parse_variant(filename: &str, product: &str, ratio: AspectRatio) -> Option<(u32, String)> {
    let stem = filename.strip_suffix(".png")?;
    let rest = stem.strip_prefix(&format!("{}_{}_v", product, ratio.tag()))?;
    let (index, stamp) = rest.split_once('_')?;

    let variant: u32 = index.parse().ok()?;
    if variant == 0 {
        return None;
    }

    // stamp must be YYYYMMDD_HHMMSS
    let ok = stamp.len() == 15
        && stamp
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 8 { b == b'_' } else { b.is_ascii_digit() });
    if !ok {
        return None;
    }

    Some((variant, stamp.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::asset_filename;

    fn temp_root() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("adkiln_index_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn seed(root: &Path, product: &str, ratio: AspectRatio, variant: u32, stamp: &str) {
        let dir = root.join(product).join(ratio.tag());
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(asset_filename(product, ratio, variant, stamp)), b"x").unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty_set() {
        let root = temp_root();
        let index = AssetIndex::new(&root);
        let variants = index
            .existing_variants("never_generated", AspectRatio::Square)
            .unwrap();
        assert!(variants.is_empty());
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_discovers_seeded_variants() {
        let root = temp_root();
        seed(&root, "trail_mix", AspectRatio::Square, 1, "20250807_100000");
        seed(&root, "trail_mix", AspectRatio::Square, 3, "20250807_100001");

        let index = AssetIndex::new(&root);
        let variants = index
            .existing_variants("trail_mix", AspectRatio::Square)
            .unwrap();
        assert_eq!(variants.into_iter().collect::<Vec<_>>(), vec![1, 3]);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_duplicate_indices_count_once() {
        let root = temp_root();
        seed(&root, "trail_mix", AspectRatio::Story, 1, "20250807_100000");
        seed(&root, "trail_mix", AspectRatio::Story, 1, "20250807_110000");

        let index = AssetIndex::new(&root);
        let records = index
            .existing_assets("trail_mix", AspectRatio::Story)
            .unwrap();
        let variants = index
            .existing_variants("trail_mix", AspectRatio::Story)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(variants.len(), 1);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_stray_files_ignored() {
        let root = temp_root();
        let dir = root.join("trail_mix").join("1x1");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.join("trail_mix_1x1_vX_20250807_100000.png"), b"x").unwrap();
        std::fs::write(dir.join("other_product_1x1_v1_20250807_100000.png"), b"x").unwrap();
        std::fs::write(dir.join(".trail_mix_1x1_v1_20250807_100000.png.tmp"), b"x").unwrap();
        seed(&root, "trail_mix", AspectRatio::Square, 2, "20250807_100000");

        let index = AssetIndex::new(&root);
        let variants = index
            .existing_variants("trail_mix", AspectRatio::Square)
            .unwrap();
        assert_eq!(variants.into_iter().collect::<Vec<_>>(), vec![2]);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_parse_roundtrip() {
        for ratio in AspectRatio::ALL {
            for variant in [1u32, 2, 10, 999] {
                let name = asset_filename("fizzy_water", ratio, variant, "20250807_235959");
                let parsed = parse_variant(&name, "fizzy_water", ratio);
                assert_eq!(parsed, Some((variant, "20250807_235959".to_string())));
            }
        }
    }

    #[test]
    fn test_parse_rejects_zero_and_bad_stamp() {
        assert_eq!(
            parse_variant("tea_1x1_v0_20250807_100000.png", "tea", AspectRatio::Square),
            None
        );
        assert_eq!(
            parse_variant("tea_1x1_v1_2025_bad.png", "tea", AspectRatio::Square),
            None
        );
    }

    #[test]
    fn test_parse_handles_underscored_product() {
        // product names may contain '_'; the parse is prefix-anchored
        let name = asset_filename("trail_mix_deluxe", AspectRatio::Story, 7, "20250807_100000");
        let parsed = parse_variant(&name, "trail_mix_deluxe", AspectRatio::Story);
        assert_eq!(parsed, Some((7, "20250807_100000".to_string())));
    }
}
