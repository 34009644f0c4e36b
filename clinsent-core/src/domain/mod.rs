//! Domain layer: tokens, shapes, boundary flags and the classification scan

pub mod boundary;
pub mod classifier;
pub mod sentences;
pub mod shape;
pub mod token;

pub use boundary::BoundaryFlag;
pub use classifier::SentenceClassifier;
pub use sentences::{sentence_spans, Segmentation, SentenceSpan};
pub use shape::word_shape;
pub use token::{Document, LexicalToken, Token};
