//! Output formatting module

use anyhow::Result;
use clinsent_core::SentenceSpan;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the sentences of each document
    fn begin_document(&mut self, _id: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &str, span: SentenceSpan) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
