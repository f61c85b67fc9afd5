//! Layered configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `ADKILN_{PROVIDER}_API_KEY`
//! 2. Project-local: `.adkiln/config.toml`
//! 3. Global: `~/.adkiln/config.toml`
//!
//! The resolved config is constructed once at startup and passed into the
//! pipeline; core logic never reads the environment itself.

use adkiln_core::{KilnError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Provider-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Provider used when the CLI does not name one
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model passed to the gemini provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Root directory for generated assets
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            output_root: default_output_root(),
        }
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}
fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}
fn default_output_root() -> PathBuf {
    PathBuf::from("generated_assets")
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfigFile {
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub providers: HashMap<String, ProviderConfig>,
    pub generation: GenerationConfig,
}

impl PipelineConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = PipelineConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".adkiln/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_env_overrides(&mut config);

        Ok(PipelineConfig {
            providers: config.providers,
            generation: config.generation,
        })
    }

    /// Load config from a specific file path only (for testing)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(PipelineConfig {
            providers: config.providers,
            generation: config.generation,
        })
    }

    /// Get API key for a provider
    pub fn api_key(&self, provider_name: &str) -> Option<&str> {
        self.providers
            .get(provider_name)
            .and_then(|p| p.api_key.as_deref())
    }

    /// Get API URL override for a provider
    pub fn api_url(&self, provider_name: &str) -> Option<&str> {
        self.providers
            .get(provider_name)
            .and_then(|p| p.api_url.as_deref())
    }

    /// Check if a provider is enabled
    pub fn is_enabled(&self, provider_name: &str) -> bool {
        self.providers
            .get(provider_name)
            .map(|p| p.enabled)
            .unwrap_or(true)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".adkiln").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<PipelineConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfigFile = toml::from_str(&content).map_err(|e| {
            KilnError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut PipelineConfigFile, overlay: PipelineConfigFile) {
        for (name, provider) in overlay.providers {
            let entry = base.providers.entry(name).or_default();
            if provider.api_key.is_some() {
                entry.api_key = provider.api_key;
            }
            if provider.api_url.is_some() {
                entry.api_url = provider.api_url;
            }
            entry.enabled = provider.enabled;
        }

        if overlay.generation.provider != default_provider() {
            base.generation.provider = overlay.generation.provider;
        }
        if overlay.generation.model != default_model() {
            base.generation.model = overlay.generation.model;
        }
        if overlay.generation.output_root != default_output_root() {
            base.generation.output_root = overlay.generation.output_root;
        }
    }

    fn apply_env_overrides(config: &mut PipelineConfigFile) {
        for name in ["gemini"] {
            let env_key = format!("ADKILN_{}_API_KEY", name.to_uppercase());
            if let Ok(key) = std::env::var(&env_key) {
                let entry = config.providers.entry(name.to_string()).or_default();
                entry.api_key = Some(key);
            }
        }
    }
}
