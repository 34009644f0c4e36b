//! Grouping boundary flags into sentence spans

use super::boundary::BoundaryFlag;
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous run of tokens forming one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Index of the first token
    pub start: usize,
    /// Index one past the last token
    pub end: usize,
}

impl SentenceSpan {
    /// Token index range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of tokens in the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Rebuild the sentence text from token texts and trailing whitespace
    ///
    /// Excluded tokens inside the span are kept: exclusion affects boundary
    /// placement, not sentence content. A span reaching past the end of
    /// `tokens` yields an empty string.
    pub fn text(&self, tokens: &[Token]) -> String {
        let Some(slice) = tokens.get(self.range()) else {
            return String::new();
        };
        let mut text = String::new();
        for token in slice {
            text.push_str(&token.text);
            text.push_str(&token.whitespace);
        }
        text.trim().to_string()
    }
}

/// Flags and spans for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Per-token boundary flags
    pub flags: Vec<BoundaryFlag>,
    /// Sentence spans derived from the flags
    pub spans: Vec<SentenceSpan>,
}

impl Segmentation {
    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.spans.len()
    }

    /// Sentence texts, in order
    pub fn sentences(&self, tokens: &[Token]) -> Vec<String> {
        self.spans.iter().map(|span| span.text(tokens)).collect()
    }
}

/// Partition flags into sentence spans
///
/// A span opens at every [`BoundaryFlag::Start`] and runs until the next one
/// or the end of the document. Tokens before the first start belong to no
/// sentence, and unset tokens never open a span.
pub fn sentence_spans(flags: &[BoundaryFlag]) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut current: Option<usize> = None;

    for (i, flag) in flags.iter().enumerate() {
        if flag.is_start() {
            if let Some(start) = current {
                spans.push(SentenceSpan { start, end: i });
            }
            current = Some(i);
        }
    }

    if let Some(start) = current {
        spans.push(SentenceSpan {
            start,
            end: flags.len(),
        });
    }

    spans
}
