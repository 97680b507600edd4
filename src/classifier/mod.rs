pub mod quality;
pub mod topic;

pub use quality::{QualityBucket, estimate_quality};
pub use topic::{YMYL_KEYWORDS, is_sensitive_topic};
