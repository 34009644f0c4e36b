//! Coarse word shapes
//!
//! A shape maps every uppercase letter to `X`, lowercase letter to `x`,
//! decimal digit to `d` and keeps any other character. Runs of the same shape
//! character are cut after four, so `Hospital` and `Patient` both have the
//! shape `Xxxxx`.

/// Texts at least this long all share the shape [`LONG_SHAPE`]
pub const MAX_SHAPE_INPUT: usize = 100;

/// Shape of over-long texts
pub const LONG_SHAPE: &str = "LONG";

const MAX_RUN: usize = 4;

/// Compute the shape of a token text
pub fn word_shape(text: &str) -> String {
    if text.chars().count() >= MAX_SHAPE_INPUT {
        return LONG_SHAPE.to_string();
    }

    let mut shape = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0;

    for ch in text.chars() {
        let class = shape_char(ch);
        if Some(class) == last {
            run += 1;
        } else {
            run = 0;
            last = Some(class);
        }
        if run < MAX_RUN {
            shape.push(class);
        }
    }

    shape
}

#[inline]
fn shape_char(ch: char) -> char {
    if ch.is_alphabetic() {
        if ch.is_uppercase() {
            'X'
        } else {
            'x'
        }
    } else if ch.is_ascii_digit() {
        'd'
    } else {
        ch
    }
}
