use thiserror::Error;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No text provided")]
    EmptyInput,

    #[error("AI service credential is not configured")]
    NotConfigured,

    #[error("AI service rate limited the request")]
    RateLimited,

    #[error("AI service quota exceeded")]
    QuotaExceeded,

    #[error("AI service error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Invalid AI service response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    UnsupportedFile(String),
}

impl SummarizeError {
    /// HTTP status reported to the caller for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::EmptyInput | SummarizeError::UnsupportedFile(_) => 400,
            SummarizeError::RateLimited => 429,
            SummarizeError::QuotaExceeded => 402,
            SummarizeError::NotConfigured
            | SummarizeError::Upstream { .. }
            | SummarizeError::InvalidRequest(_)
            | SummarizeError::Http(_)
            | SummarizeError::InvalidResponse(_) => 500,
        }
    }

    /// Short, non-technical message that is safe to return to the end user.
    ///
    /// Upstream response bodies are never included.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::EmptyInput => "No text provided".to_string(),
            SummarizeError::NotConfigured => "AI service not configured".to_string(),
            SummarizeError::RateLimited => {
                "Rate limit exceeded. Please try again in a moment.".to_string()
            }
            SummarizeError::QuotaExceeded => {
                "AI service quota exceeded. Please contact support.".to_string()
            }
            SummarizeError::Upstream { .. } => "Failed to process request".to_string(),
            SummarizeError::InvalidRequest(msg)
            | SummarizeError::Http(msg)
            | SummarizeError::InvalidResponse(msg)
            | SummarizeError::UnsupportedFile(msg) => {
                if msg.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    msg.clone()
                }
            }
        }
    }

    /// Whether the caller may retry the same request after a delay.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SummarizeError::RateLimited)
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::InvalidResponse(error.to_string())
    }
}
