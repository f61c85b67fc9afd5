//! The `generate` command: run the full pipeline for one brief

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use adkiln_pipeline::{providers, AspectRatio, Brief, Orchestrator, PipelineConfig};

pub struct GenerateArgs {
    pub brief: String,
    pub variants: u32,
    pub no_skip: bool,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub output: Option<String>,
    pub manifest: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let brief = Brief::from_file(Path::new(&args.brief))
        .with_context(|| format!("failed to load brief {}", args.brief))?;

    let mut config = PipelineConfig::load()?;
    if let Some(model) = args.model {
        config.generation.model = model;
    }
    if let Some(output) = args.output {
        config.generation.output_root = PathBuf::from(output);
    }

    let provider_name = args
        .provider
        .unwrap_or_else(|| config.generation.provider.clone());
    let provider = providers::create_provider(&provider_name, &config)?;

    println!("============================================================");
    println!("Creative Automation Pipeline");
    println!("============================================================");
    println!("Product:          {}", brief.product);
    println!("Target region:    {}", brief.target_region);
    println!("Target audience:  {}", brief.target_audience);
    println!("Campaign message: {}", brief.localized_message("en"));
    println!("Provider:         {}", provider_name);
    println!();

    let output_root = config.generation.output_root.clone();
    let orchestrator = Orchestrator::new(output_root.clone(), provider);
    let summary = orchestrator.run(&brief, args.variants, !args.no_skip)?;

    println!();
    println!("============================================================");
    println!("Pipeline complete: {} assets", summary.total_assets());
    for ratio in AspectRatio::ALL {
        println!("  {}: {} variants", ratio, summary.count(ratio));
    }
    if !summary.failures.is_empty() {
        println!("  {} generation failures:", summary.failures.len());
        for failure in &summary.failures {
            println!(
                "    {} v{}: {}",
                failure.ratio, failure.variant, failure.reason
            );
        }
    }
    println!(
        "Output directory: {}",
        output_root.join(&brief.product).display()
    );

    if let Some(manifest_path) = args.manifest {
        summary
            .manifest
            .save(Path::new(&manifest_path))
            .with_context(|| format!("failed to write manifest {}", manifest_path))?;
        println!("Manifest written: {}", manifest_path);
    }

    Ok(())
}
