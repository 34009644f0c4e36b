//! Rule-based sentence boundary classifier
//!
//! One left-to-right pass over the tokens, carrying a single pending signal:
//!
//! - a sentence-final punctuation token opens a *pending period*; the next
//!   content token starts a sentence, unless the period is followed by a
//!   digit (decimals, numbered items), which keeps the signal pending;
//! - a bare newline opens a *pending newline*; the next content token starts
//!   a sentence only if its shape looks capitalised;
//! - punctuation and newlines seen while a signal is pending are transparent;
//! - excluded tokens are invisible to the scan when `ignore_excluded` is set.

use super::boundary::BoundaryFlag;
use super::sentences::{sentence_spans, Segmentation};
use super::token::LexicalToken;
use crate::config::{defaults, Config};
use std::collections::HashSet;

/// Signal waiting for the next content token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Period,
    Newline,
}

/// Sentence boundary classifier
///
/// Immutable after construction and safe to share between threads; all scan
/// state lives on the stack of each [`classify`](Self::classify) call.
#[derive(Debug, Clone)]
pub struct SentenceClassifier {
    punct_chars: HashSet<String>,
    capitalized_shapes: HashSet<String>,
    ignore_excluded: bool,
    check_capitalized: bool,
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl SentenceClassifier {
    /// Create a classifier from a configuration
    pub fn new(config: &Config) -> Self {
        Self {
            punct_chars: config.punct_chars.iter().cloned().collect(),
            capitalized_shapes: config.capitalized_shapes.iter().cloned().collect(),
            ignore_excluded: config.ignore_excluded,
            check_capitalized: config.check_capitalized,
        }
    }

    /// Decide, for every token, whether it starts a sentence
    ///
    /// The first examined token is always [`BoundaryFlag::Start`]. Excluded
    /// tokens skipped under `ignore_excluded` stay [`BoundaryFlag::Unset`];
    /// every other token resolves to `Start` or `Continue`.
    pub fn classify<T: LexicalToken>(&self, tokens: &[T]) -> Vec<BoundaryFlag> {
        let mut flags = vec![BoundaryFlag::Unset; tokens.len()];
        let mut pending = Pending::Idle;
        let mut seen_first = false;

        for (i, token) in tokens.iter().enumerate() {
            if self.ignore_excluded && token.is_excluded() {
                continue;
            }

            flags[i] = if seen_first {
                BoundaryFlag::Continue
            } else {
                seen_first = true;
                BoundaryFlag::Start
            };

            let is_punct_char = self.punct_chars.contains(token.text());
            let is_newline = token.is_space() && token.text() == defaults::NEWLINE;

            match pending {
                Pending::Period if token.is_digit() => {}
                Pending::Period | Pending::Newline
                    if is_punct_char || is_newline || token.is_punct() => {}
                Pending::Period => {
                    flags[i] = BoundaryFlag::Start;
                    pending = Pending::Idle;
                }
                Pending::Newline => {
                    let restart = !self.check_capitalized
                        || self.capitalized_shapes.contains(token.shape());
                    flags[i] = BoundaryFlag::from(restart);
                    pending = Pending::Idle;
                }
                Pending::Idle if is_punct_char => pending = Pending::Period,
                Pending::Idle if is_newline => pending = Pending::Newline,
                Pending::Idle => {}
            }
        }

        tracing::trace!(
            tokens = tokens.len(),
            starts = flags.iter().filter(|f| f.is_start()).count(),
            "classified document"
        );

        flags
    }

    /// Classify and group the tokens into sentence spans
    pub fn segment<T: LexicalToken>(&self, tokens: &[T]) -> Segmentation {
        let flags = self.classify(tokens);
        let spans = sentence_spans(&flags);
        Segmentation { flags, spans }
    }
}
