use tracing::trace;

use crate::math::color::{parse_color, ParseError};
use crate::math::wcag;
use crate::typography;
use crate::types::{CheckOptions, Excluded, Outcome, RawElement, Unevaluable, Verdict};

/// Longest text snippet carried into result records.
const TEXT_SNIPPET_MAX: usize = 100;

/// Evaluate a single extracted element.
///
/// Excluded elements short-circuit before any color or typography work.
/// A color that fails to parse turns the element into `Unevaluable` with
/// the error retained; the rest of the batch is unaffected. Everything
/// else gets a full verdict: language bucket and situation are resolved
/// first, the threshold follows from them, and pass/fail compares the
/// full-precision ratio against it.
pub fn evaluate(element: &RawElement, options: &CheckOptions) -> Outcome {
    if element.excluded {
        return Outcome::Excluded(Excluded {
            text: snippet(&element.text),
            tag_name: element.tag_name.clone(),
            xpath: element.xpath.clone(),
            reason: element.exclusion_reason.clone(),
        });
    }

    let foreground = match parse_color(&element.color) {
        Ok(c) => c,
        Err(e) => return unevaluable(element, e),
    };
    let background = match parse_color(&element.background_color) {
        Ok(c) => c,
        Err(e) => return unevaluable(element, e),
    };

    let language = typography::language_bucket(&element.language);
    let typo = typography::classify(
        element.font_size,
        &element.font_weight,
        language,
        options.large_text_rule,
    );
    let required_ratio = wcag::required_ratio(typo.situation);

    let ratio_raw = wcag::contrast_ratio(foreground, background);
    // Report a 2-decimal ratio; pass/fail is decided before rounding.
    let ratio = (ratio_raw * 100.0).round() / 100.0;
    let pass = ratio_raw >= required_ratio;

    Outcome::Verdict(Verdict {
        text: snippet(&element.text),
        tag_name: element.tag_name.clone(),
        id: element.id.clone(),
        class_name: element.class_name.clone(),
        xpath: element.xpath.clone(),
        color: element.color.clone(),
        background_color: element.background_color.clone(),
        font_size: element.font_size,
        font_weight: typo.weight,
        point_size: typo.point_size,
        is_bold: typo.is_bold,
        language,
        situation: typo.situation,
        required_ratio,
        ratio,
        pass,
    })
}

fn unevaluable(element: &RawElement, error: ParseError) -> Outcome {
    trace!(%error, tag = %element.tag_name, "element colors failed to parse");
    Outcome::Unevaluable(Unevaluable {
        text: snippet(&element.text),
        tag_name: element.tag_name.clone(),
        xpath: element.xpath.clone(),
        color: element.color.clone(),
        background_color: element.background_color.clone(),
        error,
    })
}

fn snippet(text: &str) -> String {
    text.chars().take(TEXT_SNIPPET_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FontWeight, Language, LargeTextRule, Situation};

    fn make_element(color: &str, background: &str) -> RawElement {
        RawElement {
            text: "sample text".to_string(),
            tag_name: "P".to_string(),
            id: String::new(),
            class_name: String::new(),
            xpath: "/html/body/p[1]".to_string(),
            color: color.to_string(),
            background_color: background.to_string(),
            font_size: 16.0,
            font_weight: FontWeight::Keyword("400".to_string()),
            language: "en".to_string(),
            excluded: false,
            exclusion_reason: None,
        }
    }

    #[test]
    fn black_on_white_body_text_passes() {
        let element = make_element("#000000", "#FFFFFF");
        let outcome = evaluate(&element, &CheckOptions::default());
        let verdict = outcome.as_verdict().expect("verdict");
        assert!((verdict.ratio - 21.0).abs() < 0.01);
        assert_eq!(verdict.situation, Situation::A);
        assert_eq!(verdict.required_ratio, 4.5);
        assert_eq!(verdict.language, Language::En);
        assert!(verdict.pass);
    }

    #[test]
    fn gray_777777_on_white_fails_near_boundary() {
        let element = make_element("#777777", "#FFFFFF");
        let outcome = evaluate(&element, &CheckOptions::default());
        let verdict = outcome.as_verdict().expect("verdict");
        assert!((verdict.ratio - 4.48).abs() < 0.01);
        assert_eq!(verdict.situation, Situation::A);
        assert!(!verdict.pass);
    }

    #[test]
    fn large_text_passes_at_lower_threshold() {
        // #8a8a8a on white is ~3.45:1 - fails situation A, passes B
        let mut element = make_element("#8a8a8a", "#ffffff");
        let normal = evaluate(&element, &CheckOptions::default());
        assert!(!normal.as_verdict().unwrap().pass);

        element.font_size = 24.0;
        let large = evaluate(&element, &CheckOptions::default());
        let verdict = large.as_verdict().unwrap();
        assert_eq!(verdict.situation, Situation::B);
        assert_eq!(verdict.required_ratio, 3.0);
        assert!(verdict.pass);
    }

    #[test]
    fn excluded_element_short_circuits() {
        // Colors are garbage on purpose: exclusion must win before parsing
        let mut element = make_element("not-a-color", "also-bad");
        element.excluded = true;
        element.exclusion_reason = Some("disabled control".to_string());
        let outcome = evaluate(&element, &CheckOptions::default());
        match outcome {
            Outcome::Excluded(e) => {
                assert_eq!(e.reason.as_deref(), Some("disabled control"));
            }
            other => panic!("expected excluded, got {other:?}"),
        }
    }

    #[test]
    fn bad_foreground_becomes_unevaluable() {
        let element = make_element("oklch(0.6 0.2 30)", "#ffffff");
        let outcome = evaluate(&element, &CheckOptions::default());
        match outcome {
            Outcome::Unevaluable(u) => {
                assert!(matches!(u.error, ParseError::UnrecognizedFormat(_)));
                assert_eq!(u.color, "oklch(0.6 0.2 30)");
            }
            other => panic!("expected unevaluable, got {other:?}"),
        }
    }

    #[test]
    fn bad_background_becomes_unevaluable() {
        let element = make_element("#000000", "rgb(999, 0, 0)");
        let outcome = evaluate(&element, &CheckOptions::default());
        match outcome {
            Outcome::Unevaluable(u) => {
                assert_eq!(u.error, ParseError::ChannelOutOfRange("999".to_string()));
            }
            other => panic!("expected unevaluable, got {other:?}"),
        }
    }

    #[test]
    fn ratio_stored_with_two_decimals() {
        let element = make_element("rgb(119, 119, 119)", "rgb(255, 255, 255)");
        let outcome = evaluate(&element, &CheckOptions::default());
        let verdict = outcome.as_verdict().unwrap();
        let rounded = (verdict.ratio * 100.0).round() / 100.0;
        assert_eq!(verdict.ratio, rounded);
    }

    #[test]
    fn japanese_language_recorded_on_verdict() {
        let mut element = make_element("#000000", "#ffffff");
        element.language = "ja-JP".to_string();
        let outcome = evaluate(&element, &CheckOptions::default());
        assert_eq!(outcome.as_verdict().unwrap().language, Language::Ja);
    }

    #[test]
    fn two_tier_option_changes_situation() {
        // 20px normal = 15pt
        let mut element = make_element("#8a8a8a", "#ffffff");
        element.font_size = 20.0;
        let unified = evaluate(&element, &CheckOptions::default());
        assert_eq!(unified.as_verdict().unwrap().situation, Situation::A);

        let options = CheckOptions {
            large_text_rule: LargeTextRule::TwoTier,
        };
        let two_tier = evaluate(&element, &options);
        let verdict = two_tier.as_verdict().unwrap();
        assert_eq!(verdict.situation, Situation::B);
        assert!(verdict.pass);
    }

    #[test]
    fn verdict_text_truncated_to_100_chars() {
        let mut element = make_element("#000000", "#ffffff");
        element.text = "x".repeat(250);
        let outcome = evaluate(&element, &CheckOptions::default());
        assert_eq!(outcome.as_verdict().unwrap().text.chars().count(), 100);
    }

    #[test]
    fn keyword_weight_resolved_on_verdict() {
        let mut element = make_element("#000000", "#ffffff");
        element.font_weight = FontWeight::Keyword("bold".to_string());
        let outcome = evaluate(&element, &CheckOptions::default());
        let verdict = outcome.as_verdict().unwrap();
        assert_eq!(verdict.font_weight, 700);
        assert!(verdict.is_bold);
    }
}
