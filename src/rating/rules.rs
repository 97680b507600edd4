use crate::{classifier::QualityBucket, rating::model::Rating, signals::PageSignals};

/// More ads than this on a thin page rates it `Lowest`.
pub const AD_HEAVY_THRESHOLD: usize = 10;
/// Rich pages need fewer ads than this to rate `High`.
pub const AD_LIGHT_THRESHOLD: usize = 5;

/// Label used when no rule matches.
pub const FALLBACK_RATING: Rating = Rating::Medium;

pub struct Rule {
    pub name: &'static str,
    pub label: Rating,
    pub matches: fn(&PageSignals) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

/// Evaluated top to bottom; the first match wins.
pub static RULES: [Rule; 3] = [
    Rule {
        name: "ad_heavy_thin_content",
        label: Rating::Lowest,
        matches: ad_heavy_thin_content,
    },
    Rule {
        name: "sensitive_topic_without_depth",
        label: Rating::Low,
        matches: sensitive_topic_without_depth,
    },
    Rule {
        name: "rich_content_few_ads",
        label: Rating::High,
        matches: rich_content_few_ads,
    },
];

fn ad_heavy_thin_content(signals: &PageSignals) -> bool {
    signals.ad_element_count > AD_HEAVY_THRESHOLD && signals.content_quality == QualityBucket::Low
}

fn sensitive_topic_without_depth(signals: &PageSignals) -> bool {
    signals.is_sensitive_topic && signals.content_quality != QualityBucket::High
}

fn rich_content_few_ads(signals: &PageSignals) -> bool {
    signals.content_quality == QualityBucket::High && signals.ad_element_count < AD_LIGHT_THRESHOLD
}

pub fn matching_rule(signals: &PageSignals) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(signals))
}

pub fn rate(signals: &PageSignals) -> Rating {
    matching_rule(signals).map_or(FALLBACK_RATING, |rule| rule.label)
}
