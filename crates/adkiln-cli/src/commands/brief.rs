//! The `brief` command: validate a brief and show its contents

use anyhow::{Context, Result};
use std::path::Path;

use adkiln_pipeline::Brief;

pub fn run(path: &str) -> Result<()> {
    let brief = Brief::from_file(Path::new(path))
        .with_context(|| format!("failed to load brief {}", path))?;

    println!("Brief is valid.");
    println!("  product:          {}", brief.product);
    println!("  target_region:    {}", brief.target_region);
    println!("  target_audience:  {}", brief.target_audience);
    println!("  campaign_message: {}", brief.campaign_message);
    if !brief.brand_colors.is_empty() {
        println!("  brand_colors:     {}", brief.brand_colors.join(", "));
    }
    if !brief.key_features.is_empty() {
        println!("  key_features:     {}", brief.key_features.join(", "));
    }

    Ok(())
}
