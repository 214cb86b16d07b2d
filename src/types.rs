use serde::{Deserialize, Serialize};

use crate::math::color::ParseError;

/// Text-element descriptor handed over by the DOM-extraction collaborator.
/// Field names mirror the in-page extraction payload (camelCase JSON).
/// The exclusion flag is decided upstream (disabled controls, aria-hidden,
/// logo and image text); the engine only honors it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub xpath: String,
    pub color: String,
    pub background_color: String,
    /// Computed font size in device pixels.
    pub font_size: f64,
    pub font_weight: FontWeight,
    /// Raw language tag; may be empty when the page declares none.
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub excluded: bool,
    #[serde(default)]
    pub exclusion_reason: Option<String>,
}

/// Computed font-weight as the browser reports it: a number (`400`) or a
/// keyword (`"bold"`). Resolution to a numeric weight lives in
/// `typography::resolve_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u32),
    Keyword(String),
}

/// Coarse language bucket used for size-table lookup and report
/// segmentation. Unknown and missing tags fall back to `En`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
}

/// Contrast classification bucket per WCAG 1.4.3:
/// A = normal text (4.5:1), B = large text (3:1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Situation {
    A,
    B,
}

/// Which size boundary makes normal-weight text "large".
///
/// The published size tables carry two tiers per language whose
/// combination is ambiguous. `Unified` treats 18pt as the single
/// large-text boundary regardless of weight; `TwoTier` keeps the lower
/// 14pt boundary for normal-weight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LargeTextRule {
    #[default]
    Unified,
    TwoTier,
}

/// Engine-level options, passed by reference into every evaluation.
/// Holds no mutable state, so concurrent passes cannot interact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOptions {
    #[serde(default)]
    pub large_text_rule: LargeTextRule,
}

/// Result record for one evaluated element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub text: String,
    pub tag_name: String,
    pub id: String,
    pub class_name: String,
    pub xpath: String,
    pub color: String,
    pub background_color: String,
    pub font_size: f64,
    /// Resolved numeric weight (keywords already mapped).
    pub font_weight: u32,
    pub point_size: f64,
    pub is_bold: bool,
    pub language: Language,
    pub situation: Situation,
    pub required_ratio: f64,
    /// Contrast ratio rounded to 2 decimals for reporting; pass/fail was
    /// decided on the full-precision value.
    pub ratio: f64,
    pub pass: bool,
}

/// Element skipped on the upstream collaborator's say-so.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excluded {
    pub text: String,
    pub tag_name: String,
    pub xpath: String,
    pub reason: Option<String>,
}

/// Element whose colors could not be parsed. The error is retained so the
/// report can show what went wrong instead of silently dropping the
/// element or skewing the compliance rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unevaluable {
    pub text: String,
    pub tag_name: String,
    pub xpath: String,
    pub color: String,
    pub background_color: String,
    pub error: ParseError,
}

/// Per-element outcome. Excluded and unevaluable elements are first-class
/// outcomes so the aggregate reports them distinctly from pass/fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outcome {
    Verdict(Verdict),
    Excluded(Excluded),
    Unevaluable(Unevaluable),
}

impl Outcome {
    /// The verdict, when the element was actually evaluated.
    pub fn as_verdict(&self) -> Option<&Verdict> {
        match self {
            Outcome::Verdict(v) => Some(v),
            _ => None,
        }
    }
}
