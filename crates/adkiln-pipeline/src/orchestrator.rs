//! Pipeline orchestration
//!
//! For a brief and a requested variant count, computes the full set of
//! (aspect_ratio, variant_index) work items, skips items the asset index
//! already satisfies (unless forced), drives the generation provider for the
//! remainder, and commits results through the output writer.
//!
//! A single failed generation never aborts the run; the failure is recorded
//! and the gap shows up as a shortfall in the summary's per-ratio counts.
//! Filesystem failures are fatal and abort the whole run.

use adkiln_core::{ContentHash, KilnError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Instant;

use crate::brief::Brief;
use crate::index::AssetIndex;
use crate::manifest::{ManifestEntry, RunManifest};
use crate::prompt;
use crate::provider::GenerationProvider;
use crate::ratio::AspectRatio;
use crate::writer::OutputWriter;

/// One work item that could not be generated
#[derive(Debug, Clone)]
pub struct GenerationFailure {
    pub ratio: AspectRatio,
    pub variant: u32,
    pub reason: String,
}

/// Result of one pipeline run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Ratio tag -> asset paths, reused assets first (discovery order),
    /// then newly generated assets (generation order)
    pub assets: BTreeMap<String, Vec<PathBuf>>,
    /// Per-item generation failures; never raised as errors
    pub failures: Vec<GenerationFailure>,
    /// Provenance for the assets this run generated
    pub manifest: RunManifest,
}

impl RunSummary {
    /// Asset count for one ratio. Callers wanting strict success compare
    /// this against the requested variant count.
    pub fn count(&self, ratio: AspectRatio) -> usize {
        self.assets.get(ratio.tag()).map(|p| p.len()).unwrap_or(0)
    }

    pub fn total_assets(&self) -> usize {
        self.assets.values().map(|p| p.len()).sum()
    }
}

/// Drives brief -> prompts -> provider -> output tree
pub struct Orchestrator {
    output_root: PathBuf,
    provider: Box<dyn GenerationProvider>,
}

impl Orchestrator {
    /// Construct with an explicit output root and provider; the orchestrator
    /// never reads ambient configuration itself.
    pub fn new<P: Into<PathBuf>>(output_root: P, provider: Box<dyn GenerationProvider>) -> Self {
        Self {
            output_root: output_root.into(),
            provider,
        }
    }

    /// Run the pipeline for one brief.
    ///
    /// With `skip_existing`, variant indices already present on disk are
    /// reused instead of regenerated. Without it, every index in
    /// `1..=num_variants` is regenerated; pre-existing files stay on disk
    /// (the filename timestamp keeps new files from colliding with them).
    pub fn run(&self, brief: &Brief, num_variants: u32, skip_existing: bool) -> Result<RunSummary> {
        if num_variants == 0 {
            return Err(KilnError::InvalidVariantCount(num_variants));
        }

        let index = AssetIndex::new(&self.output_root);
        let writer = OutputWriter::new(&self.output_root);
        let mut summary = RunSummary::default();

        for ratio in AspectRatio::ALL {
            println!("--- Processing {} aspect ratio ---", ratio);

            let mut paths = Vec::new();
            let mut present = BTreeSet::new();

            if skip_existing {
                // Reuse one path per satisfied variant index, in discovery
                // order; duplicates from earlier forced runs count once.
                for record in index.existing_assets(&brief.product, ratio)? {
                    if (1..=num_variants).contains(&record.variant)
                        && present.insert(record.variant)
                    {
                        println!("  v{}: reusing {}", record.variant, record.path.display());
                        paths.push(record.path);
                    }
                }
            }

            for variant in 1..=num_variants {
                if present.contains(&variant) {
                    continue;
                }

                let prompt = prompt::build_variant_prompt(brief, ratio, variant);
                let started = Instant::now();

                match self
                    .provider
                    .generate(&prompt, ratio.width(), ratio.height())
                {
                    Ok(image) => {
                        let path = writer.write(&brief.product, ratio, variant, &image.bytes)?;
                        println!("  v{}: saved {}", variant, path.display());
                        summary.manifest.add_entry(ManifestEntry {
                            product: brief.product.clone(),
                            ratio: ratio.tag().to_string(),
                            variant,
                            provider: self.provider.name().to_string(),
                            prompt,
                            content_hash: ContentHash::from_bytes(&image.bytes).prefixed(),
                            output_path: path.display().to_string(),
                            duration_secs: started.elapsed().as_secs_f64(),
                            generated_at: crate::writer::now_stamp(),
                        });
                        paths.push(path);
                    }
                    Err(e) => {
                        println!("  v{}: FAILED: {}", variant, e);
                        summary.failures.push(GenerationFailure {
                            ratio,
                            variant,
                            reason: e.to_string(),
                        });
                    }
                }
            }

            summary.assets.insert(ratio.tag().to_string(), paths);
        }

        Ok(summary)
    }
}
