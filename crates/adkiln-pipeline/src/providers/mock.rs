//! Mock provider for tests and offline runs
//!
//! Renders a solid-color PNG at the exact requested dimensions without any
//! network calls. The fill color is derived from the prompt hash so different
//! prompts produce visibly different placeholders.

use adkiln_core::{KilnError, Result};
use std::io::Cursor;

use crate::provider::{GeneratedImage, GenerationProvider, ProviderStatus};

/// A provider that generates placeholder images locally
#[derive(Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl GenerationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        Ok(ProviderStatus::Available)
    }

    fn generate(&self, prompt: &str, width: u32, height: u32) -> Result<GeneratedImage> {
        let hash_val = prompt
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        let r = ((hash_val >> 16) & 0xFF) as u8;
        let g = ((hash_val >> 8) & 0xFF) as u8;
        let b = (hash_val & 0xFF) as u8;

        let mut img_data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..(width * height) {
            img_data.extend_from_slice(&[r, g, b, 255]);
        }

        let img = image::RgbaImage::from_raw(width, height, img_data)
            .ok_or_else(|| KilnError::Generation("Failed to create image buffer".to_string()))?;

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| KilnError::Generation(format!("Failed to encode PNG: {}", e)))?;

        Ok(GeneratedImage {
            bytes,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_health() {
        let provider = MockProvider::new();
        assert_eq!(provider.health_check().unwrap(), ProviderStatus::Available);
    }

    #[test]
    fn test_mock_generates_valid_png_at_size() {
        let provider = MockProvider::new();
        let result = provider.generate("fizzy water on a beach", 64, 36).unwrap();

        let img = image::load_from_memory(&result.bytes).unwrap();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 36);
    }

    #[test]
    fn test_mock_is_deterministic_per_prompt() {
        let provider = MockProvider::new();
        let a = provider.generate("same prompt", 8, 8).unwrap();
        let b = provider.generate("same prompt", 8, 8).unwrap();
        let c = provider.generate("other prompt", 8, 8).unwrap();
        assert_eq!(a.bytes, b.bytes);
        assert_ne!(a.bytes, c.bytes);
    }
}
