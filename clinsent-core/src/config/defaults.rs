//! Builtin vocabulary used when a configuration leaves a set empty

/// Token text of a bare line break
pub const NEWLINE: &str = "\n";

/// Sentence-final punctuation recognised out of the box
pub const PUNCT_CHARS: &[&str] = &[
    ".", "!", "?", "...", "…", "‼", "‽", "⁇", "⁈", "⁉", "։", "؟", "۔", "।", "॥", "።", "፧",
    "፨", "﹒", "﹖", "﹗", "．", "！", "？", "｡", "。",
];

/// Shapes of a single capitalised word (one capital, then lowercase letters)
///
/// Shapes collapse runs longer than four characters, so `Xxxxx` covers every
/// capitalised word of five letters or more.
pub const CAPITALIZED_SHAPES: &[&str] = &["Xx", "Xxx", "Xxxx", "Xxxxx"];

/// Excluded tokens are skipped by default
pub const IGNORE_EXCLUDED: bool = true;

/// Newline restarts are gated on capitalisation by default
pub const CHECK_CAPITALIZED: bool = true;
