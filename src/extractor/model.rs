use serde::{Deserialize, Serialize};

/// Raw signals read straight off a parsed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSignals {
    pub language: String,
    pub ad_count: usize,
    pub text: String,
}
