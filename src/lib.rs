/// Summarizer - turns pasted or uploaded text into a structured summary using an
/// AI completion service.
///
/// The crate is deployed as a single AWS Lambda behind an HTTP endpoint:
/// 1. The API handler answers CORS pre-flight requests and decodes `{ text }`
/// 2. The gateway validates the text, truncates it and calls the completion service
/// 3. The response parser recovers `{ summary, keyPoints }` from the free-form completion
///
/// # Example
///
/// ```no_run
/// use summarizer::core::config::AppConfig;
/// use summarizer::features::Summarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarizer::setup_logging();
///
///     let config = AppConfig {
///         ai_api_key: Some("dummy_key".to_string()),
///         ..AppConfig::default()
///     };
///     let summarizer = Summarizer::from_config(config)?;
///
///     let result = summarizer.summarize("Cats are mammals that sleep a lot.").await?;
///     println!("{}", result.summary);
///     for point in &result.key_points {
///         println!("- {point}");
///     }
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod response_parser;

pub use crate::core::models::SummaryResult;
pub use errors::SummarizeError;
pub use response_parser::parse_completion;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Repeated calls are ignored.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
