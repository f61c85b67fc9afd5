//! The `providers` command: list providers with health status

use anyhow::Result;

use adkiln_pipeline::{providers, PipelineConfig, ProviderStatus};

pub fn run() -> Result<()> {
    let config = PipelineConfig::load()?;

    println!("Generation providers:");
    for name in providers::available_providers() {
        match providers::create_provider(name, &config) {
            Ok(provider) => match provider.health_check() {
                Ok(ProviderStatus::Available) => println!("  {:<10} available", name),
                Ok(ProviderStatus::NoApiKey) => println!("  {:<10} no API key", name),
                Ok(ProviderStatus::Unavailable(reason)) => {
                    println!("  {:<10} unavailable: {}", name, reason)
                }
                Err(e) => println!("  {:<10} health check failed: {}", name, e),
            },
            Err(e) => println!("  {:<10} not configured: {}", name, e),
        }
    }

    Ok(())
}
