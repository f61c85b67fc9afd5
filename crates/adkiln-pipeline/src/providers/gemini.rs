//! Gemini image generation provider
//!
//! Calls the Generative Language API's `generateContent` endpoint. The model
//! returns the image inline as base64, so there is no separate download step;
//! the decoded image is resized to the exact requested dimensions because the
//! model does not honor precise pixel sizes on its own.

use adkiln_core::{KilnError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::io::Cursor;
use std::time::Duration;

use crate::config::PipelineConfig;
use crate::provider::{GeneratedImage, GenerationProvider, ProviderStatus};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_RETRIES: usize = 3;
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Gemini provider for AI image generation
pub struct GeminiProvider {
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new GeminiProvider from config
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let api_key = config
            .api_key("gemini")
            .ok_or_else(|| {
                KilnError::Config(
                    "Gemini API key not configured. Set ADKILN_GEMINI_API_KEY or add to .adkiln/config.toml".to_string(),
                )
            })?
            .to_string();

        let api_url = config
            .api_url("gemini")
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        Ok(Self {
            api_key,
            api_url,
            model: config.generation.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    fn post_json_with_retry(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        for attempt in 0..MAX_RETRIES {
            let agent = build_agent();
            let response = agent
                .post(&self.endpoint())
                .header("x-goog-api-key", &self.api_key)
                .header("Content-Type", "application/json")
                .send_json(payload);

            match response {
                Ok(mut ok) => {
                    return ok.body_mut().read_json().map_err(|e| {
                        KilnError::Generation(format!("Failed to parse Gemini response: {}", e))
                    });
                }
                Err(e) => {
                    if attempt + 1 < MAX_RETRIES && is_retryable_error(&e) {
                        sleep_backoff(attempt);
                        continue;
                    }
                    return Err(KilnError::Generation(format!(
                        "Gemini API request failed: {}",
                        e
                    )));
                }
            }
        }

        Err(KilnError::Generation(
            "Gemini API request failed after retries".to_string(),
        ))
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

fn is_retryable_error(e: &ureq::Error) -> bool {
    match e {
        ureq::Error::Timeout(_)
        | ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => true,
        ureq::Error::StatusCode(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
        _ => false,
    }
}

fn sleep_backoff(attempt: usize) {
    let delay_ms = RETRY_BASE_DELAY_MS.saturating_mul(1u64 << attempt);
    std::thread::sleep(Duration::from_millis(delay_ms));
}

impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        if self.api_key.is_empty() {
            return Ok(ProviderStatus::NoApiKey);
        }
        Ok(ProviderStatus::Available)
    }

    fn generate(&self, prompt: &str, width: u32, height: u32) -> Result<GeneratedImage> {
        let payload = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self.post_json_with_retry(&payload)?;
        let encoded = extract_inline_image(&response)?;

        let raw = BASE64
            .decode(encoded)
            .map_err(|e| KilnError::Generation(format!("Invalid image payload: {}", e)))?;

        let bytes = resize_to(&raw, width, height)?;

        Ok(GeneratedImage {
            bytes,
            width,
            height,
        })
    }
}

/// Pull the first inline image (base64) out of a generateContent response
pub fn extract_inline_image(response: &serde_json::Value) -> Result<&str> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            KilnError::Generation(format!(
                "Unexpected Gemini response format: {}",
                serde_json::to_string_pretty(response).unwrap_or_default()
            ))
        })?;

    parts
        .iter()
        .find_map(|part| {
            part.get("inlineData")
                .and_then(|d| d.get("data"))
                .and_then(|d| d.as_str())
        })
        .ok_or_else(|| KilnError::Generation("No image data in Gemini response".to_string()))
}

/// Decode, resize to exactly (width, height), re-encode as PNG
fn resize_to(raw: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let img = image::load_from_memory(raw)
        .map_err(|e| KilnError::Generation(format!("Undecodable image from provider: {}", e)))?;

    if img.width() == width && img.height() == height {
        return Ok(raw.to_vec());
    }

    let resized = img.resize_exact(width, height, image::imageops::FilterType::Lanczos3);
    let mut out = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| KilnError::Generation(format!("Failed to encode PNG: {}", e)))?;
    Ok(out)
}
