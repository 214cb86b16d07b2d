use serde::{Deserialize, Serialize};

use crate::types::{Excluded, Language, Outcome, Situation, Unevaluable, Verdict};

/// Headline numbers for one evaluation pass. Excluded and unevaluable
/// elements are counted apart from pass/fail so the compliance rate is
/// never skewed by input the engine refused to judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Every outcome considered, including excluded and unevaluable.
    pub total: usize,
    /// passed + failed.
    pub evaluated: usize,
    pub passed: usize,
    pub failed: usize,
    pub excluded: usize,
    pub unevaluable: usize,
    /// Percentage of evaluable elements that passed. Defined as 100 when
    /// nothing was evaluable; `zero_evaluated` makes that case explicit.
    pub compliance_rate: f64,
    pub zero_evaluated: bool,
    /// True when no evaluable element failed (the page-level WCAG 1.4.3 bit).
    pub fully_compliant: bool,
}

/// Passed/failed counts for one (situation, language) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCounts {
    pub situation: Situation,
    pub language: Language,
    pub passed: usize,
    pub failed: usize,
}

/// Aggregate over one evaluation pass. The counts are order-independent;
/// the record lists preserve input order so rendered reports are stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: Summary,
    /// Fixed grid: A/en, A/ja, B/en, B/ja.
    pub groups: Vec<GroupCounts>,
    pub passed: Vec<Verdict>,
    pub failed: Vec<Verdict>,
    pub excluded: Vec<Excluded>,
    pub unevaluable: Vec<Unevaluable>,
}

const GROUP_GRID: [(Situation, Language); 4] = [
    (Situation::A, Language::En),
    (Situation::A, Language::Ja),
    (Situation::B, Language::En),
    (Situation::B, Language::Ja),
];

/// Fold a sequence of outcomes into a compliance report.
pub fn aggregate(outcomes: &[Outcome]) -> Report {
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    let mut excluded = Vec::new();
    let mut unevaluable = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Verdict(v) if v.pass => passed.push(v.clone()),
            Outcome::Verdict(v) => failed.push(v.clone()),
            Outcome::Excluded(e) => excluded.push(e.clone()),
            Outcome::Unevaluable(u) => unevaluable.push(u.clone()),
        }
    }

    let groups = GROUP_GRID
        .iter()
        .map(|&(situation, language)| GroupCounts {
            situation,
            language,
            passed: count_in(&passed, situation, language),
            failed: count_in(&failed, situation, language),
        })
        .collect();

    let evaluated = passed.len() + failed.len();
    let zero_evaluated = evaluated == 0;
    let compliance_rate = if zero_evaluated {
        100.0
    } else {
        100.0 * passed.len() as f64 / evaluated as f64
    };

    Report {
        summary: Summary {
            total: outcomes.len(),
            evaluated,
            passed: passed.len(),
            failed: failed.len(),
            excluded: excluded.len(),
            unevaluable: unevaluable.len(),
            compliance_rate,
            zero_evaluated,
            fully_compliant: failed.is_empty(),
        },
        groups,
        passed,
        failed,
        excluded,
        unevaluable,
    }
}

fn count_in(verdicts: &[Verdict], situation: Situation, language: Language) -> usize {
    verdicts
        .iter()
        .filter(|v| v.situation == situation && v.language == language)
        .count()
}
