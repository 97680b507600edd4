pub mod model;
pub mod rules;

pub use model::{Metadata, Rating, RatingOutcome, RatingResult, UNREACHABLE_LABEL};
pub use rules::{FALLBACK_RATING, RULES, Rule, matching_rule, rate};

use crate::signals::PageSignals;

/// Applies the rule table and packages the result for display.
pub fn evaluate(signals: PageSignals) -> RatingResult {
    let rule = matching_rule(&signals);
    let label = rule.map_or(FALLBACK_RATING, |r| r.label);

    RatingResult {
        label,
        rule: rule.map(|r| r.name),
        metadata: Metadata::from(&signals),
        raw_content: signals.extracted_text,
    }
}
