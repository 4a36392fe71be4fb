//! Structural scanning: jumping over strings, balanced bracket groups, and
//! number lexemes without materializing values.
//!
//! The array classifier uses these to measure elements cheaply in its first
//! pass; the value grammar shares [`scan_number`] so both passes agree on
//! where every number ends.

use crate::error::{ParseError, ParseErrorKind};

/// Advances past the string literal starting at `pos` (which must be a `"`)
/// and returns the position just past the closing quote.
///
/// A quote preceded by a backslash byte is taken as escaped; the contents
/// are not decoded.
pub(crate) fn skip_string(src: &str, pos: usize) -> Result<usize, ParseError> {
    let bytes = src.as_bytes();
    let mut i = pos + 1;
    while i < bytes.len() {
        if bytes[i] == b'"' && bytes[i - 1] != b'\\' {
            return Ok(i + 1);
        }
        i += 1;
    }
    Err(ParseError::at(
        ParseErrorKind::UnterminatedString,
        src,
        pos,
    ))
}

/// Advances past the balanced group starting at `pos`.
///
/// The opener must be one of `[`, `{`, `(`; the matching `]`, `}`, `)` is
/// found by depth counting, with quoted-string contents skipped verbatim so
/// brackets inside strings do not affect the depth. Returns the position
/// just past the closer, or the input position unchanged when it does not
/// sit on an opener.
pub(crate) fn skip_balanced(src: &str, pos: usize) -> Result<usize, ParseError> {
    let bytes = src.as_bytes();
    let (open, close) = match bytes.get(pos) {
        Some(b'[') => (b'[', b']'),
        Some(b'{') => (b'{', b'}'),
        Some(b'(') => (b'(', b')'),
        _ => return Ok(pos),
    };
    let mut depth = 0usize;
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if b == open {
            depth += 1;
            i += 1;
        } else if b == close {
            depth -= 1;
            i += 1;
            if depth == 0 {
                return Ok(i);
            }
        } else if b == b'"' {
            i = skip_string(src, i)?;
        } else {
            i += 1;
        }
    }
    Err(ParseError::at(
        ParseErrorKind::MalformedSyntax("unmatched bracket"),
        src,
        pos,
    ))
}

/// Lexical shape of a number literal: the shape alone decides Int vs Float,
/// so `3` and `3.0` are different kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NumberKind {
    /// No decimal point and no exponent.
    Integer,
    /// Has a decimal point or an exponent.
    Float,
}

/// Scans the number lexeme starting at `pos` (a digit or `-`) and returns
/// its kind together with the position just past it.
///
/// `.`, `e`, and `E` mark the run as floating-point; signs are consumed as
/// part of the run so the standard conversions see the whole lexeme. The
/// scan is purely lexical, a run the conversions reject surfaces as a parse
/// error at materialization.
pub(crate) fn scan_number(bytes: &[u8], pos: usize) -> (NumberKind, usize) {
    let mut kind = NumberKind::Integer;
    let mut i = pos + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' | b'-' | b'+' => i += 1,
            b'.' | b'e' | b'E' => {
                kind = NumberKind::Float;
                i += 1;
            }
            _ => break,
        }
    }
    (kind, i)
}
