/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     strict_unicode_escapes: true,
/// };
/// assert!(parse_with_options(r#"{"bad":"\ud83d"}"#, options).is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to reject `\u` escapes that do not denote a Unicode scalar
    /// value.
    ///
    /// Four-digit escapes cannot express code points at or above `0x10000`,
    /// and surrogate pairs are not reassembled; each `\uXXXX` is decoded
    /// independently. An escape in the surrogate range therefore has no
    /// scalar-value decoding: by default it becomes U+FFFD, and with this
    /// option set the parse fails with
    /// [`UnsupportedCodePoint`](crate::ParseErrorKind::UnsupportedCodePoint).
    ///
    /// # Default
    ///
    /// `false`
    pub strict_unicode_escapes: bool,
}
