use serde::{Deserialize, Serialize};

use crate::response_parser::{PLACEHOLDER_KEY_POINT, PLACEHOLDER_SUMMARY};

/// Inbound request body. A missing or `null` `text` is treated as empty input.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Structured summary handed to the presenter. Both fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    #[serde(rename = "keyPoints")]
    pub key_points: Vec<String>,
}

impl SummaryResult {
    /// True when nothing could be recovered and both fields hold placeholders.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.summary == PLACEHOLDER_SUMMARY
            && self.key_points.len() == 1
            && self.key_points[0] == PLACEHOLDER_KEY_POINT
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
