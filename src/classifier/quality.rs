use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Texts shorter than this many characters are `Low`.
pub const MEDIUM_MIN_CHARS: usize = 300;
/// Texts at least this many characters long are `High`.
pub const HIGH_MIN_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum QualityBucket {
    Low,
    Medium,
    High,
}

impl QualityBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for QualityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets text purely by its length in characters.
pub fn estimate_quality(text: &str) -> QualityBucket {
    let len = text.chars().count();

    if len < MEDIUM_MIN_CHARS {
        QualityBucket::Low
    } else if len < HIGH_MIN_CHARS {
        QualityBucket::Medium
    } else {
        QualityBucket::High
    }
}
