//! Contrast evaluation engine for WCAG 1.4.3/1.4.6 page audits.
//!
//! Consumes text-element descriptors extracted by a browser/DOM
//! collaborator, computes luminance-based contrast ratios, classifies
//! each element into its size/weight situation, and aggregates a
//! compliance report for the presentation layer.

pub mod checker;
pub mod engine;
pub mod math;
pub mod report;
pub mod typography;
pub mod types;

pub use engine::{elements_from_json, evaluate_all, report_to_json, run_audit, AuditResult};
pub use math::color::{parse_color, ParseError, Rgb};
pub use math::wcag::{contrast_ratio, relative_luminance, required_ratio};
pub use report::{aggregate, GroupCounts, Report, Summary};
pub use typography::{classify, language_bucket, resolve_weight, Typography};
pub use types::{
    CheckOptions, Excluded, FontWeight, Language, LargeTextRule, Outcome, RawElement, Situation,
    Unevaluable, Verdict,
};
