//! Error types for parsing and path queries.

use alloc::string::String;

use thiserror::Error;

/// A parse failure, located at the point of violation.
///
/// Errors are raised locally and propagate out of [`crate::parse`] as soon as
/// they are detected; no partially-initialized tree is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// 1-based line of the offending position.
    pub line: usize,
    /// 1-based column (in characters) of the offending position.
    pub column: usize,
}

impl ParseError {
    /// Builds an error positioned at the given byte offset into `src`.
    pub(crate) fn at(kind: ParseErrorKind, src: &str, offset: usize) -> Self {
        let bytes = src.as_bytes();
        let offset = offset.min(bytes.len());
        let mut line = 1;
        let mut line_start = 0;
        for (i, &b) in bytes[..offset].iter().enumerate() {
            if b == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        let column = match core::str::from_utf8(&bytes[line_start..offset]) {
            Ok(prefix) => prefix.chars().count() + 1,
            Err(_) => offset - line_start + 1,
        };
        ParseError { kind, line, column }
    }
}

/// The kinds of parse failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A string literal with no closing quote before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// An object member whose key is not a quoted string.
    #[error("malformed object key")]
    MalformedKey,
    /// A structural violation, described briefly.
    #[error("syntax error: {0}")]
    MalformedSyntax(&'static str),
    /// A `\u` escape that does not denote a Unicode scalar value.
    ///
    /// Only raised under [`crate::ParserOptions::strict_unicode_escapes`].
    #[error("unsupported code point \\u{0:04X}")]
    UnsupportedCodePoint(u32),
}

/// A path query that did not resolve.
///
/// Resolving to a `Null` value is success; these errors mean the path itself
/// failed to match the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The segment matched no member name, or was not usable as an index.
    #[error("path segment {0:?} not found")]
    NotFound(String),
    /// A numeric segment was outside the bounds of the array it indexed.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The index the segment asked for.
        index: usize,
        /// The length of the array it was applied to.
        len: usize,
    },
}
