pub mod collect;
pub mod summarize;

// Re-exports for thin bins
pub use collect::read_input_file;
pub use summarize::Summarizer;
