//! Upstream completion service: prompt construction and HTTP client

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{CompletionClient, HttpCompletionClient};
pub use prompt_builder::{MAX_INPUT_CHARS, build_prompt};
