//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use clinsent_core::SentenceSpan;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    document_index: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            document_index: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, id: &str) -> Result<()> {
        if self.document_index > 0 {
            writeln!(self.writer)?;
        }
        self.document_index += 1;
        writeln!(self.writer, "## {id}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str, _span: SentenceSpan) -> Result<()> {
        self.sentence_count += 1;
        let line: Vec<&str> = sentence.split_whitespace().collect();
        writeln!(self.writer, "{}. {}", self.sentence_count, line.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_layout() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.begin_document("cr-1").unwrap();
        formatter
            .format_sentence("Go.", SentenceSpan { start: 0, end: 2 })
            .unwrap();
        formatter
            .format_sentence("Leave\nnow.", SentenceSpan { start: 2, end: 5 })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("## cr-1\n\n1. Go.\n2. Leave now.\n"));
        assert!(output.ends_with("---\n*Total sentences: 2*\n"));
    }
}
