//! Adkiln Pipeline - campaign briefs to creative image assets
//!
//! Turns a validated campaign brief into localized creative assets across
//! three fixed aspect ratios: computes the required (ratio, variant) work
//! items, skips assets already on disk, drives a generation provider for the
//! gaps, and commits results to a stable output layout with per-run
//! provenance.

pub mod brief;
pub mod config;
pub mod index;
pub mod manifest;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod ratio;
pub mod writer;

pub use brief::Brief;
pub use config::PipelineConfig;
pub use index::{AssetIndex, AssetRecord};
pub use manifest::{ManifestEntry, RunManifest};
pub use orchestrator::{GenerationFailure, Orchestrator, RunSummary};
pub use provider::{GeneratedImage, GenerationProvider, ProviderStatus};
pub use ratio::AspectRatio;
pub use writer::OutputWriter;
