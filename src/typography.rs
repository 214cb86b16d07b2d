use crate::types::{FontWeight, Language, LargeTextRule, Situation};

/// CSS reference pixel to point conversion under the 96-DPI assumption.
const PX_TO_PT: f64 = 0.75;

/// Weights at or above this resolve as bold.
const BOLD_MIN_WEIGHT: u32 = 700;

/// Large-text size boundaries (points) for one language bucket.
struct SizeTable {
    bold_min_pt: f64,
    normal_min_pt: f64,
    /// Lower normal-weight boundary, used only by `LargeTextRule::TwoTier`.
    two_tier_normal_min_pt: f64,
}

// ja and en currently share identical boundaries, but every lookup goes
// through its own bucket's table so diverging one language is a local edit.
const JA_SIZES: SizeTable = SizeTable {
    bold_min_pt: 18.0,
    normal_min_pt: 18.0,
    two_tier_normal_min_pt: 14.0,
};
const EN_SIZES: SizeTable = SizeTable {
    bold_min_pt: 18.0,
    normal_min_pt: 18.0,
    two_tier_normal_min_pt: 14.0,
};

/// Classifier output for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub point_size: f64,
    /// Resolved numeric weight.
    pub weight: u32,
    pub is_bold: bool,
    pub situation: Situation,
}

/// Bucket a language tag. Tags beginning with `ja` (case-insensitive) are
/// Japanese; unknown, unrecognized, and missing tags fall back to `en`.
pub fn language_bucket(tag: &str) -> Language {
    match tag.trim().get(..2) {
        Some(head) if head.eq_ignore_ascii_case("ja") => Language::Ja,
        _ => Language::En,
    }
}

/// Resolve a computed font-weight to its numeric value.
///
/// The browser usually reports a numeric string, but keyword values
/// survive in older engines: `bold`/`bolder` resolve to 700, `lighter`
/// to 300, `normal` and anything unrecognized to 400.
pub fn resolve_weight(weight: &FontWeight) -> u32 {
    match weight {
        FontWeight::Numeric(n) => *n,
        FontWeight::Keyword(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<u32>() {
                return n;
            }
            match s.to_ascii_lowercase().as_str() {
                "bold" | "bolder" => 700,
                "lighter" => 300,
                _ => 400,
            }
        }
    }
}

/// Classify an element's typography into its contrast situation.
///
/// Size is converted to points (px * 0.75); the large-text decision then
/// depends on boldness and the configured rule. Bold text is large at
/// 18pt under either rule; normal-weight text is large at 18pt under
/// `Unified` and already at 14pt under `TwoTier`.
pub fn classify(
    font_size_px: f64,
    weight: &FontWeight,
    language: Language,
    rule: LargeTextRule,
) -> Typography {
    let point_size = font_size_px * PX_TO_PT;
    let resolved = resolve_weight(weight);
    let is_bold = resolved >= BOLD_MIN_WEIGHT;

    let sizes = size_table(language);
    let large = if is_bold {
        point_size >= sizes.bold_min_pt
    } else {
        match rule {
            LargeTextRule::Unified => point_size >= sizes.normal_min_pt,
            LargeTextRule::TwoTier => point_size >= sizes.two_tier_normal_min_pt,
        }
    };

    Typography {
        point_size,
        weight: resolved,
        is_bold,
        situation: if large { Situation::B } else { Situation::A },
    }
}

fn size_table(language: Language) -> &'static SizeTable {
    match language {
        Language::Ja => &JA_SIZES,
        Language::En => &EN_SIZES,
    }
}
