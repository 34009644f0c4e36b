//! Token records consumed by the classifier
//!
//! The classifier reads tokens through [`LexicalToken`], so any tokenizer
//! that can expose these attributes can feed it. [`Token`] is the owned
//! record used by the CLI and tests; it derives every lexical attribute from
//! its text unless told otherwise.

use super::shape::word_shape;
use serde::{Deserialize, Serialize};

/// Read-only view of a token's lexical attributes
pub trait LexicalToken {
    /// Exact token text
    fn text(&self) -> &str;

    /// Token consists only of whitespace
    fn is_space(&self) -> bool;

    /// Token consists only of digits
    fn is_digit(&self) -> bool;

    /// Token consists only of punctuation
    fn is_punct(&self) -> bool;

    /// Coarse case/pattern signature of the text
    fn shape(&self) -> &str;

    /// Token was tagged as outside normal prose by an upstream pass
    fn is_excluded(&self) -> bool;
}

impl<T: LexicalToken + ?Sized> LexicalToken for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn is_space(&self) -> bool {
        (**self).is_space()
    }

    fn is_digit(&self) -> bool {
        (**self).is_digit()
    }

    fn is_punct(&self) -> bool {
        (**self).is_punct()
    }

    fn shape(&self) -> &str {
        (**self).shape()
    }

    fn is_excluded(&self) -> bool {
        (**self).is_excluded()
    }
}

/// Owned token record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TokenRecord")]
pub struct Token {
    /// Exact token text
    pub text: String,
    /// Whitespace following the token in the source text
    pub whitespace: String,
    /// Lexical whitespace flag
    pub is_space: bool,
    /// Lexical digit flag
    pub is_digit: bool,
    /// Lexical punctuation flag
    pub is_punct: bool,
    /// Shape class
    pub shape: String,
    /// Exclusion tag
    pub excluded: bool,
}

impl Token {
    /// Create a token, deriving its lexical attributes from the text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            is_space: is_space_text(&text),
            is_digit: is_digit_text(&text),
            is_punct: is_punct_text(&text),
            shape: word_shape(&text),
            whitespace: String::new(),
            excluded: false,
            text,
        }
    }

    /// Create one token per text
    pub fn from_texts<I, S>(texts: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(Token::new).collect()
    }

    /// Set the exclusion tag
    pub fn excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }

    /// Set the trailing whitespace
    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }
}

impl LexicalToken for Token {
    fn text(&self) -> &str {
        &self.text
    }

    fn is_space(&self) -> bool {
        self.is_space
    }

    fn is_digit(&self) -> bool {
        self.is_digit
    }

    fn is_punct(&self) -> bool {
        self.is_punct
    }

    fn shape(&self) -> &str {
        &self.shape
    }

    fn is_excluded(&self) -> bool {
        self.excluded
    }
}

/// Wire form of a token: only `text` is required
#[derive(Debug, Deserialize)]
struct TokenRecord {
    text: String,
    #[serde(default)]
    whitespace: String,
    is_space: Option<bool>,
    is_digit: Option<bool>,
    is_punct: Option<bool>,
    shape: Option<String>,
    #[serde(default)]
    excluded: bool,
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        let derived = Token::new(record.text);
        Token {
            is_space: record.is_space.unwrap_or(derived.is_space),
            is_digit: record.is_digit.unwrap_or(derived.is_digit),
            is_punct: record.is_punct.unwrap_or(derived.is_punct),
            shape: record.shape.unwrap_or(derived.shape),
            whitespace: record.whitespace,
            excluded: record.excluded,
            text: derived.text,
        }
    }
}

/// A tokenized document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Optional caller-supplied identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tokens in document order
    pub tokens: Vec<Token>,
}

impl Document {
    /// Create a document from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { id: None, tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl AsRef<[Token]> for Document {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

fn is_space_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

/// Decimal digits only; vulgar fractions and roman numerals are not digits
fn is_digit_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

fn is_punct_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punct_char)
}

/// Punctuation in the Unicode sense (connector, dash, open/close, quote,
/// other), restricted to the blocks clinical text actually uses.
fn is_punct_char(ch: char) -> bool {
    if ch.is_ascii() {
        return matches!(
            ch,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }
    matches!(
        ch,
        '\u{00A1}'
            | '\u{00A7}'
            | '\u{00AB}'
            | '\u{00B6}'
            | '\u{00B7}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{0589}'
            | '\u{061F}'
            | '\u{06D4}'
            | '\u{0964}'
            | '\u{0965}'
            | '\u{1362}'
            | '\u{1367}'
            | '\u{1368}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
            | '\u{FE52}'
            | '\u{FE56}'
            | '\u{FE57}'
            | '\u{FF01}'
            | '\u{FF0C}'
            | '\u{FF0E}'
            | '\u{FF1F}'
            | '\u{FF61}'
    )
}
