//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use clinsent_core::SentenceSpan;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    document: String,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Identifier of the source document
    pub document: String,
    /// The sentence text
    pub text: String,
    /// Index of the first token
    pub start: usize,
    /// Index one past the last token
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: String::new(),
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, id: &str) -> Result<()> {
        self.document = id.to_string();
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str, span: SentenceSpan) -> Result<()> {
        self.sentences.push(SentenceData {
            document: self.document.clone(),
            text: sentence.to_string(),
            start: span.start,
            end: span.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_records() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.begin_document("cr-1").unwrap();
        formatter
            .format_sentence("Go.", SentenceSpan { start: 0, end: 2 })
            .unwrap();
        formatter.begin_document("cr-2").unwrap();
        formatter
            .format_sentence("Leave.", SentenceSpan { start: 0, end: 2 })
            .unwrap();
        formatter.finish().unwrap();

        let records: Vec<SentenceData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].document, "cr-1");
        assert_eq!(records[1].text, "Leave.");
        assert_eq!(records[1].end, 2);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap().trim(), "[]");
    }
}
