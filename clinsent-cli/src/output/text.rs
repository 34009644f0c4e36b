//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use clinsent_core::SentenceSpan;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
///
/// Line breaks inside a sentence are flattened to spaces.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _span: SentenceSpan) -> Result<()> {
        let line: Vec<&str> = sentence.split_whitespace().collect();
        writeln!(self.writer, "{}", line.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
