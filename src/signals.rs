use serde::{Deserialize, Serialize};

use crate::{
    classifier::{QualityBucket, estimate_quality, is_sensitive_topic},
    extractor::ExtractedSignals,
};

/// Everything the rating engine looks at for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSignals {
    pub detected_language: String,
    pub ad_element_count: usize,
    pub extracted_text: String,
    pub is_sensitive_topic: bool,
    pub content_quality: QualityBucket,
}

impl From<ExtractedSignals> for PageSignals {
    fn from(extracted: ExtractedSignals) -> Self {
        let is_sensitive_topic = is_sensitive_topic(&extracted.text);
        let content_quality = estimate_quality(&extracted.text);

        Self {
            detected_language: extracted.language,
            ad_element_count: extracted.ad_count,
            extracted_text: extracted.text,
            is_sensitive_topic,
            content_quality,
        }
    }
}
