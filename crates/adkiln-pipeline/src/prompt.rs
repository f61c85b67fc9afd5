//! Prompt construction
//!
//! Pure functions from (brief, ratio) to the natural-language instruction sent
//! to the generation provider. Fully deterministic so prompts can be asserted
//! in tests and reproduced from a run manifest.

use crate::brief::Brief;
use crate::ratio::AspectRatio;

/// Rotating style cues so variants of the same ratio differ visually
const VARIANT_STYLES: [&str; 3] = [
    "lifestyle shot with natural lighting",
    "close-up product detail with premium aesthetic",
    "environmental context showing product in use",
];

/// Build the base generation prompt for one (brief, ratio) pair
pub fn build_prompt(brief: &Brief, ratio: AspectRatio) -> String {
    let mut prompt = format!(
        "Create a professional marketing photograph for {}.\n\n\
         Target audience: {}\n\
         Message: {}\n\
         Market: {}\n\n\
         Visual requirements:\n\
         - Product prominently displayed and clearly visible\n\
         - Professional studio-quality lighting\n\
         - {}\n\
         - High-quality, photo-realistic rendering\n\
         - Suitable for {} social media format",
        display_name(&brief.product),
        brief.target_audience,
        brief.campaign_message,
        brief.target_region,
        framing(ratio),
        ratio,
    );

    if !brief.key_features.is_empty() {
        let features: Vec<&str> = brief.key_features.iter().take(2).map(|s| s.as_str()).collect();
        prompt.push_str(&format!("\n\nKey features to highlight: {}", features.join(", ")));
    }

    if !brief.brand_colors.is_empty() {
        prompt.push_str(&format!("\nBrand palette: {}", brief.brand_colors.join(", ")));
    }

    prompt
}

/// Base prompt plus the rotating style cue for a specific variant index
pub fn build_variant_prompt(brief: &Brief, ratio: AspectRatio, variant: u32) -> String {
    let cue = VARIANT_STYLES[(variant as usize - 1) % VARIANT_STYLES.len()];
    format!("{}\n\nStyle emphasis: {}", build_prompt(brief, ratio), cue)
}

fn framing(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Square => "Balanced square composition suited to feed placements",
        AspectRatio::Story => "Vertical story framing with headroom for overlay text",
        AspectRatio::Landscape => "Wide landscape framing with the product off-center",
    }
}

/// "trail_mix" -> "Trail Mix"
fn display_name(product: &str) -> String {
    product
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
