//! Provider registry
//!
//! Maps provider names to concrete implementations.

pub mod gemini;
pub mod mock;

use adkiln_core::{KilnError, Result};

use crate::config::PipelineConfig;
use crate::provider::GenerationProvider;

/// Create a provider by name with configuration
pub fn create_provider(
    name: &str,
    config: &PipelineConfig,
) -> Result<Box<dyn GenerationProvider>> {
    match name {
        "mock" => Ok(Box::new(mock::MockProvider::new())),
        "gemini" => Ok(Box::new(gemini::GeminiProvider::from_config(config)?)),
        _ => Err(KilnError::Config(format!(
            "Unknown provider '{}'. Available: gemini, mock",
            name
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["gemini", "mock"]
}
