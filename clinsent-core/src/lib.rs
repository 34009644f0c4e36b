//! Rule-based sentence boundary detection over pre-tokenized documents
//!
//! Generic sentence splitters stumble on clinical and administrative text:
//! numbered items, decimals after a period, line breaks in the middle of a
//! sentence, and header/footer boilerplate interleaved with prose. This crate
//! decides, token by token, whether a token starts a new sentence, combining
//! three signals in a single linear scan:
//!
//! - sentence-final punctuation (configurable set of token texts),
//! - bare newline tokens, gated on the shape of the following word,
//! - an `excluded` tag set by an upstream annotation pass.
//!
//! Tokenization is not part of this crate: callers supply tokens through the
//! [`LexicalToken`] trait, or build [`Token`] records whose lexical
//! attributes are derived from their text.
//!
//! # Example
//!
//! ```rust
//! use clinsent_core::{BoundaryFlag, Config, SentenceClassifier, Token};
//!
//! let config = Config::builder().build().unwrap();
//! let classifier = SentenceClassifier::new(&config);
//!
//! let tokens = Token::from_texts(["Score", "3", ".", "\n", "patient", "stable", "\n", "Suite"]);
//! let flags = classifier.classify(&tokens);
//!
//! assert_eq!(flags[0], BoundaryFlag::Start);
//! assert_eq!(flags[4], BoundaryFlag::Start); // content after a period
//! assert_eq!(flags[5], BoundaryFlag::Continue);
//! assert_eq!(flags[7], BoundaryFlag::Start); // capitalised word after a newline
//! ```

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;

pub use config::{Config, ConfigBuilder, ConfigWarning};
pub use domain::{
    sentence_spans, word_shape, BoundaryFlag, Document, LexicalToken, Segmentation,
    SentenceClassifier, SentenceSpan, Token,
};
pub use error::{Error, Result};
