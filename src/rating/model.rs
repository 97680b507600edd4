use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::{classifier::QualityBucket, fetcher::FetchError, signals::PageSignals};

/// Label shown when the page could not be fetched at all.
pub const UNREACHABLE_LABEL: &str = "Lowest (Unreachable or Unsafe)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Rating {
    Lowest,
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lowest => "Lowest",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signal summary shown next to a rating, keyed by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Metadata {
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Ad Elements Found")]
    pub ad_elements_found: usize,
    #[serde(rename = "Content Quality")]
    pub content_quality: QualityBucket,
    #[serde(rename = "YMYL Topic Detected")]
    pub ymyl_topic_detected: bool,
}

impl From<&PageSignals> for Metadata {
    fn from(signals: &PageSignals) -> Self {
        Self {
            language: signals.detected_language.clone(),
            ad_elements_found: signals.ad_element_count,
            content_quality: signals.content_quality,
            ymyl_topic_detected: signals.is_sensitive_topic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingResult {
    pub label: Rating,
    /// Name of the rule that produced `label`, or `None` for the fallback.
    pub rule: Option<&'static str>,
    pub metadata: Metadata,
    pub raw_content: String,
}

/// Result of one end-to-end rating request.
#[derive(Debug)]
pub enum RatingOutcome {
    Rated(RatingResult),
    Unreachable(FetchError),
}

impl RatingOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rated(result) => result.label.as_str(),
            Self::Unreachable(_) => UNREACHABLE_LABEL,
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Rated(result) => Some(&result.metadata),
            Self::Unreachable(_) => None,
        }
    }

    /// Extracted main content; empty when the page was unreachable.
    pub fn raw_content(&self) -> &str {
        match self {
            Self::Rated(result) => &result.raw_content,
            Self::Unreachable(_) => "",
        }
    }

    /// Human-readable reason the page could not be rated, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Rated(_) => None,
            Self::Unreachable(err) => Some(format!("Error fetching page: {err}")),
        }
    }
}
