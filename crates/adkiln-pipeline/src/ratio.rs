//! The three fixed output aspect ratios
//!
//! Each ratio carries a filesystem-safe tag (used in output paths) and the
//! fixed pixel dimensions requested from the generation provider. The set is
//! closed; campaign tooling downstream depends on exactly these three.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed output framing for a creative asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 1:1, Instagram feed and Facebook posts
    Square,
    /// 9:16, Instagram/Facebook Stories
    Story,
    /// 16:9, display ads and YouTube
    Landscape,
}

impl AspectRatio {
    /// All ratios in canonical processing order
    pub const ALL: [AspectRatio; 3] = [AspectRatio::Square, AspectRatio::Story, AspectRatio::Landscape];

    /// Filesystem-safe tag used in directory names and filenames
    pub fn tag(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1x1",
            AspectRatio::Story => "9x16",
            AspectRatio::Landscape => "16x9",
        }
    }

    /// Target pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Story => (576, 1024),
            AspectRatio::Landscape => (1024, 576),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Look up a ratio by its filesystem tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.tag() == tag)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Square => write!(f, "1:1"),
            AspectRatio::Story => write!(f, "9:16"),
            AspectRatio::Landscape => write!(f, "16:9"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_filesystem_safe() {
        for ratio in AspectRatio::ALL {
            assert!(ratio.tag().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(AspectRatio::Square.dimensions(), (1024, 1024));
        assert_eq!(AspectRatio::Story.dimensions(), (576, 1024));
        assert_eq!(AspectRatio::Landscape.dimensions(), (1024, 576));
    }

    #[test]
    fn test_from_tag_roundtrip() {
        for ratio in AspectRatio::ALL {
            assert_eq!(AspectRatio::from_tag(ratio.tag()), Some(ratio));
        }
        assert_eq!(AspectRatio::from_tag("4x3"), None);
    }

    #[test]
    fn test_display_form() {
        assert_eq!(AspectRatio::Story.to_string(), "9:16");
    }
}
