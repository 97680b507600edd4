use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rating::{Metadata, RatingOutcome};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateRequest {
    pub url: String,
}

impl RateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL must not be empty".to_string());
        }
        Ok(())
    }
}

/// Query string of the HTML form submission.
#[derive(Debug, Deserialize)]
pub struct RateQuery {
    pub url: Option<String>,
}

/// Signal summary, or `{}` when the page was never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseMetadata {
    Signals(Metadata),
    Empty {},
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub label: String,
    #[schema(value_type = Object)]
    pub metadata: ResponseMetadata,
    pub raw_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl From<&RatingOutcome> for RatingResponse {
    fn from(outcome: &RatingOutcome) -> Self {
        let metadata = match outcome.metadata() {
            Some(metadata) => ResponseMetadata::Signals(metadata.clone()),
            None => ResponseMetadata::Empty {},
        };

        Self {
            label: outcome.label().to_string(),
            metadata,
            raw_content: outcome.raw_content().to_string(),
            notice: outcome.notice(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
