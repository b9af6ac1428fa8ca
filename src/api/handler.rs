//! API Lambda handler for the summarize-text function.
//!
//! Answers CORS pre-flight requests, decodes the `{ text }` body, runs the
//! summarization gateway and maps every outcome to a JSON HTTP response.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::client::CompletionClient;
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;
use crate::features::summarize::Summarizer;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for request-level problems; those become JSON error responses.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::error_from(&SummarizeError::NotConfigured));
        }
    };

    let summarizer = match Summarizer::from_config(config) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            error!("Failed to initialize summarizer: {}", e);
            return Ok(helpers::error_from(&e));
        }
    };

    Ok(handle_request(&summarizer, &event.payload).await)
}

/// Routes one HTTP event through the gateway. Always yields a response payload.
pub async fn handle_request<C: CompletionClient>(
    summarizer: &Summarizer<C>,
    payload: &Value,
) -> Value {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize_request", %request_id);

    async move {
        if parsing::is_preflight(payload) {
            return helpers::preflight();
        }

        info!(
            method = parsing::request_method(payload).unwrap_or("UNKNOWN"),
            "Summarize request received"
        );

        match summarize_payload(summarizer, payload).await {
            Ok(result) => {
                info!(key_points = result.key_points.len(), "Summary generated");
                helpers::ok_summary(&result)
            }
            Err(e) => {
                if matches!(e, SummarizeError::EmptyInput) {
                    warn!("Rejected request with empty text");
                } else {
                    error!(
                        status = e.status_code(),
                        retryable = e.is_retryable(),
                        "Error in summarize-text function: {}",
                        e
                    );
                }
                helpers::error_from(&e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn summarize_payload<C: CompletionClient>(
    summarizer: &Summarizer<C>,
    payload: &Value,
) -> Result<crate::core::models::SummaryResult, SummarizeError> {
    let body = parsing::extract_body(payload)?;
    let request = parsing::parse_summarize_request(&body)?;
    let text = request.text.unwrap_or_default();
    summarizer.summarize(&text).await
}
