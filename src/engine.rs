use rayon::prelude::*;
use tracing::debug;

use crate::checker;
use crate::report::{self, Report};
use crate::types::{CheckOptions, Outcome, RawElement};

/// Everything one audit pass produces: the per-element records plus the
/// aggregate, so the presentation layer never re-derives a number.
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub outcomes: Vec<Outcome>,
    pub report: Report,
}

/// Evaluate extracted elements in parallel.
///
/// Uses Rayon's `par_iter()` - each element is evaluated independently
/// with no shared mutable state, and `collect()` preserves input order,
/// which the report's record lists rely on.
pub fn evaluate_all(elements: &[RawElement], options: &CheckOptions) -> Vec<Outcome> {
    elements
        .par_iter()
        .map(|element| checker::evaluate(element, options))
        .collect()
}

/// Evaluate a batch and aggregate its compliance report.
pub fn run_audit(elements: &[RawElement], options: &CheckOptions) -> AuditResult {
    let outcomes = evaluate_all(elements, options);
    let report = report::aggregate(&outcomes);
    debug!(
        total = report.summary.total,
        passed = report.summary.passed,
        failed = report.summary.failed,
        excluded = report.summary.excluded,
        unevaluable = report.summary.unevaluable,
        "contrast audit complete"
    );
    AuditResult { outcomes, report }
}

/// Deserialize the extraction collaborator's element batch (a JSON array
/// of descriptors as produced by the in-page script).
pub fn elements_from_json(json: &str) -> serde_json::Result<Vec<RawElement>> {
    serde_json::from_str(json)
}

/// Serialize a report for the presentation collaborator.
pub fn report_to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
