use tracing::{debug, error, info, warn};

use crate::ai::client::{CompletionClient, HttpCompletionClient};
use crate::ai::prompt_builder::{MAX_INPUT_CHARS, build_prompt};
use crate::core::{config::AppConfig, models::SummaryResult};
use crate::errors::SummarizeError;
use crate::response_parser::parse_completion;

/// Summarization request gateway.
///
/// Validates the input, checks the credential, sends the truncated text to the
/// completion service and structures whatever comes back.
pub struct Summarizer<C: CompletionClient> {
    config: AppConfig,
    client: C,
}

impl Summarizer<HttpCompletionClient> {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self, SummarizeError> {
        let client = HttpCompletionClient::from_config(&config)?;
        Ok(Self::new(config, client))
    }
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(config: AppConfig, client: C) -> Self {
        Self { config, client }
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// # Errors
    ///
    /// `EmptyInput` for blank text and `NotConfigured` without a credential,
    /// both before any outbound call; otherwise whatever the client reports.
    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let Some(api_key) = self.config.ai_api_key.as_deref() else {
            error!("AI_GATEWAY_API_KEY is not configured");
            return Err(SummarizeError::NotConfigured);
        };

        let input_chars = text.chars().count();
        if input_chars > MAX_INPUT_CHARS {
            info!(
                input_chars,
                "Input exceeds {} characters, truncating", MAX_INPUT_CHARS
            );
        }

        info!("Calling AI service to summarize text...");
        let completion = self.client.complete(api_key, build_prompt(text)).await?;

        #[cfg(feature = "debug-logs")]
        debug!("Raw AI response:\n{}", completion);

        let result = parse_completion(&completion);
        debug!(
            summary_chars = result.summary.chars().count(),
            key_points = result.key_points.len(),
            "Parsed AI response"
        );
        if result.is_placeholder() {
            warn!("AI response could not be structured, returning placeholders");
        }

        Ok(result)
    }
}
