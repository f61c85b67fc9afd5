//! Campaign brief loading and validation
//!
//! A `Brief` is the validated, immutable input to a pipeline run. Briefs are
//! authored as JSON or YAML; format detection goes by file extension. The
//! orchestration core only ever sees a brief that has already passed
//! validation, so it never re-checks field presence.

use adkiln_core::{KilnError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A validated campaign brief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    /// Product identifier, used as an output path segment
    pub product: String,
    /// Target market, e.g. "US" or "DACH"
    pub target_region: String,
    /// Audience description fed into the prompt
    pub target_audience: String,
    /// Core campaign message
    pub campaign_message: String,
    /// Ordered brand colors as hex strings
    #[serde(default)]
    pub brand_colors: Vec<String>,
    /// Ordered product features to highlight
    #[serde(default)]
    pub key_features: Vec<String>,
}

impl Brief {
    /// Strict constructor: validates before handing out a value
    pub fn new(
        product: impl Into<String>,
        target_region: impl Into<String>,
        target_audience: impl Into<String>,
        campaign_message: impl Into<String>,
        brand_colors: Vec<String>,
        key_features: Vec<String>,
    ) -> Result<Self> {
        let brief = Self {
            product: product.into(),
            target_region: target_region.into(),
            target_audience: target_audience.into(),
            campaign_message: campaign_message.into(),
            brand_colors,
            key_features,
        };
        brief.validate()?;
        Ok(brief)
    }

    /// Load a brief from a JSON or YAML file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let brief: Brief = match ext {
            "json" => serde_json::from_str(&content).map_err(|e| {
                KilnError::Parse(format!("Failed to parse brief {}: {}", path.display(), e))
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| {
                KilnError::Parse(format!("Failed to parse brief {}: {}", path.display(), e))
            })?,
            other => {
                return Err(KilnError::Brief(format!(
                    "Brief must be JSON or YAML, got extension '{}'",
                    other
                )))
            }
        };

        brief.validate()?;
        Ok(brief)
    }

    /// Check required fields and path safety of the product identifier
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("product", &self.product),
            ("target_region", &self.target_region),
            ("target_audience", &self.target_audience),
            ("campaign_message", &self.campaign_message),
        ] {
            if value.trim().is_empty() {
                return Err(KilnError::Brief(format!("missing required field '{}'", field)));
            }
        }

        // product becomes a directory name and a filename prefix
        if !self
            .product
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(KilnError::Brief(format!(
                "product '{}' must contain only letters, digits, '-' and '_'",
                self.product
            )));
        }

        Ok(())
    }

    /// Campaign message for a locale. English passthrough; other locales are
    /// not implemented and fall back to the English message.
    pub fn localized_message(&self, locale: &str) -> &str {
        if locale != "en" {
            println!(
                "Note: localization for '{}' not yet implemented, using English",
                locale
            );
        }
        &self.campaign_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_brief(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("adkiln_brief_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_valid_brief() {
        let brief = Brief::new(
            "trail_mix",
            "US",
            "outdoor enthusiasts 25-40",
            "Fuel the climb",
            vec!["#2E5339".to_string()],
            vec!["organic".to_string(), "high protein".to_string()],
        )
        .unwrap();
        assert_eq!(brief.product, "trail_mix");
        assert_eq!(brief.key_features.len(), 2);
    }

    #[test]
    fn test_missing_required_field() {
        let result = Brief::new("trail_mix", "US", "", "Fuel the climb", vec![], vec![]);
        assert!(matches!(result, Err(KilnError::Brief(_))));
    }

    #[test]
    fn test_unsafe_product_rejected() {
        let result = Brief::new("trail/mix", "US", "hikers", "Fuel the climb", vec![], vec![]);
        assert!(matches!(result, Err(KilnError::Brief(_))));
    }

    #[test]
    fn test_load_json_brief() {
        let path = temp_brief(
            "summer.json",
            r##"{
                "product": "iced_tea",
                "target_region": "US",
                "target_audience": "young professionals",
                "campaign_message": "Cool down, level up",
                "brand_colors": ["#FFB300", "#104E8B"]
            }"##,
        );

        let brief = Brief::from_file(&path).unwrap();
        assert_eq!(brief.product, "iced_tea");
        assert_eq!(brief.brand_colors.len(), 2);
        assert!(brief.key_features.is_empty());

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_yaml_brief() {
        let path = temp_brief(
            "summer.yaml",
            r#"
product: iced_tea
target_region: US
target_audience: young professionals
campaign_message: Cool down, level up
key_features:
  - zero sugar
  - real brewed
"#,
        );

        let brief = Brief::from_file(&path).unwrap();
        assert_eq!(brief.product, "iced_tea");
        assert_eq!(brief.key_features, vec!["zero sugar", "real brewed"]);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = temp_brief("summer.toml", "product = \"iced_tea\"");
        assert!(Brief::from_file(&path).is_err());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_invalid_brief_file_rejected() {
        let path = temp_brief(
            "empty_product.json",
            r#"{
                "product": "",
                "target_region": "US",
                "target_audience": "anyone",
                "campaign_message": "hello"
            }"#,
        );
        assert!(matches!(Brief::from_file(&path), Err(KilnError::Brief(_))));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_localized_message_passthrough() {
        let brief =
            Brief::new("iced_tea", "US", "anyone", "Cool down", vec![], vec![]).unwrap();
        assert_eq!(brief.localized_message("en"), "Cool down");
        assert_eq!(brief.localized_message("de"), "Cool down");
    }
}
