//! Generation provider trait and result types

use adkiln_core::Result;

/// A successfully generated image, sized to the requested dimensions
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// PNG-encoded bytes
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Status returned by a provider health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    Unavailable(String),
    NoApiKey,
}

/// Trait implemented by each generation provider (Gemini, Mock).
///
/// Providers are opaque image factories: prompt and target dimensions in,
/// PNG bytes out. The pipeline does not interpret provider-specific error
/// detail beyond the failure message.
pub trait GenerationProvider: Send {
    /// Provider name (e.g. "gemini", "mock")
    fn name(&self) -> &str;

    /// Check whether the provider can be used (API key set, service reachable)
    fn health_check(&self) -> Result<ProviderStatus>;

    /// Generate one image, blocking until it is complete or fails
    fn generate(&self, prompt: &str, width: u32, height: u32) -> Result<GeneratedImage>;
}
