//! Recursive-descent parsing: the shared value grammar, the object parser,
//! and the two-pass array classifier.
//!
//! Arrays are handled in two explicit passes over the same slice: a
//! classification pass measures every element with the structural scanner
//! and settles on a uniform family (or falls back to `Mix`), then a
//! materialization pass re-scans and builds exactly the container the first
//! pass decided on. The second pass costs one extra lightweight scan and in
//! exchange every packed container is allocated at its final size, with no
//! growth or reallocation while elements are parsed.

use alloc::vec::Vec;

use crate::{
    error::{ParseError, ParseErrorKind},
    lexer,
    options::ParserOptions,
    scanner::{self, NumberKind},
    value::{Member, Members, Value},
};

/// Parses one JSON document with default options.
///
/// The document root must be an object; the returned value is
/// [`Value::Object`]. Input is standard JSON text extended with `//` line
/// and `/* ... */` block comments. Dropping the returned tree releases it.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violation encountered;
/// everything built up to that point is released before returning.
///
/// # Examples
///
/// ```rust
/// use jsontree::parse;
///
/// let doc = parse(r#"{"name": "svc", "ports": [80, 443]}"#).unwrap();
/// assert_eq!(doc.query_str("name"), Ok("svc"));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses one JSON document with explicit [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violation encountered.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    Parser {
        src: text,
        bytes: text.as_bytes(),
        options,
    }
    .parse_document()
}

/// Uniform-type state of the classification pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Strings,
    Objects,
    Ints,
    Floats,
    Bools,
    Mix,
}

/// Outcome of the classification pass: the settled family, the element
/// count, and the position just past the array.
struct ArrayShape {
    family: Family,
    len: usize,
    end: usize,
}

struct Parser<'src> {
    src: &'src str,
    bytes: &'src [u8],
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    fn err(&self, kind: ParseErrorKind, pos: usize) -> ParseError {
        ParseError::at(kind, self.src, pos)
    }

    /// The byte at `pos`, or 0 past the end of input.
    fn byte(&self, pos: usize) -> u8 {
        self.bytes.get(pos).copied().unwrap_or(0)
    }

    fn parse_document(&self) -> Result<Value, ParseError> {
        let pos = lexer::skip(self.bytes, 0);
        if self.byte(pos) != b'{' {
            return Err(self.err(
                ParseErrorKind::MalformedSyntax("expected '{' at document root"),
                pos,
            ));
        }
        let (members, _) = self.parse_object(pos)?;
        Ok(Value::Object(members))
    }

    /// Parses the object starting at `pos` (which must be a `{`) into its
    /// member sequence, returning it with the position just past the `}`.
    ///
    /// Commas between members are skipped permissively (any number,
    /// including none before the first member). If the input ends before
    /// the closing `}`, the members parsed so far are still returned; this
    /// lenient termination is deliberate.
    fn parse_object(&self, pos: usize) -> Result<(Members, usize), ParseError> {
        if self.byte(pos) != b'{' {
            return Err(self.err(ParseErrorKind::MalformedSyntax("expected '{'"), pos));
        }
        let mut pos = lexer::skip(self.bytes, pos + 1);
        let mut members = Members::new();
        loop {
            while self.byte(pos) == b',' {
                pos = lexer::skip(self.bytes, pos + 1);
            }
            if self.byte(pos) == b'}' {
                return Ok((members, pos + 1));
            }
            if pos >= self.bytes.len() {
                return Ok((members, pos));
            }
            if self.byte(pos) != b'"' {
                return Err(self.err(ParseErrorKind::MalformedKey, pos));
            }
            let (key, after_key) = lexer::decode_string(self.src, pos, self.options)?;
            pos = lexer::skip(self.bytes, after_key);
            if self.byte(pos) != b':' {
                return Err(self.err(
                    ParseErrorKind::MalformedSyntax("expected ':' after object key"),
                    pos,
                ));
            }
            pos = lexer::skip(self.bytes, pos + 1);
            let (value, after_value) = self.parse_value(pos)?;
            members.push(Member { key, value });
            pos = lexer::skip(self.bytes, after_value);
            if self.byte(pos) != b',' {
                break;
            }
        }
        if self.byte(pos) == b'}' {
            Ok((members, pos + 1))
        } else {
            Ok((members, pos))
        }
    }

    /// Parses one value, dispatching on its first significant character.
    ///
    /// Shared by object members, mixed-array elements, and the document
    /// root path, so every context accepts exactly the same grammar.
    fn parse_value(&self, pos: usize) -> Result<(Value, usize), ParseError> {
        match self.byte(pos) {
            b'"' => {
                let (s, after) = lexer::decode_string(self.src, pos, self.options)?;
                Ok((Value::String(s), after))
            }
            b'0'..=b'9' | b'-' => {
                let (kind, end) = scanner::scan_number(self.bytes, pos);
                let value = match kind {
                    NumberKind::Integer => self.parse_int(pos, end).map(Value::Int)?,
                    NumberKind::Float => self.parse_float(pos, end).map(Value::Float)?,
                };
                Ok((value, end))
            }
            b'{' => {
                let (members, after) = self.parse_object(pos)?;
                Ok((Value::Object(members), after))
            }
            b'[' => self.parse_array(pos),
            _ => {
                let rest = &self.bytes[pos.min(self.bytes.len())..];
                if rest.starts_with(b"null") {
                    Ok((Value::Null, pos + 4))
                } else if rest.starts_with(b"true") {
                    Ok((Value::Bool(true), pos + 4))
                } else if rest.starts_with(b"false") {
                    Ok((Value::Bool(false), pos + 5))
                } else {
                    Err(self.err(ParseErrorKind::MalformedSyntax("unrecognized value"), pos))
                }
            }
        }
    }

    fn parse_int(&self, pos: usize, end: usize) -> Result<i64, ParseError> {
        self.src[pos..end]
            .parse()
            .map_err(|_| self.err(ParseErrorKind::MalformedSyntax("invalid number literal"), pos))
    }

    fn parse_float(&self, pos: usize, end: usize) -> Result<f64, ParseError> {
        self.src[pos..end]
            .parse()
            .map_err(|_| self.err(ParseErrorKind::MalformedSyntax("invalid number literal"), pos))
    }

    /// Parses the array starting at `pos` (which must be a `[`).
    ///
    /// `[]` short-circuits to an empty [`Value::Mix`]; anything else goes
    /// through classification and then materialization.
    fn parse_array(&self, pos: usize) -> Result<(Value, usize), ParseError> {
        if self.byte(pos) != b'[' {
            return Err(self.err(ParseErrorKind::MalformedSyntax("expected '['"), pos));
        }
        let first = lexer::skip(self.bytes, pos + 1);
        if self.byte(first) == b']' {
            return Ok((Value::Mix(Vec::new()), first + 1));
        }
        let shape = self.classify_array(pos)?;
        let value = match shape.family {
            Family::Strings => Value::Strings(self.materialize(pos, shape.len, |p, cur| {
                lexer::decode_string(p.src, cur, p.options)
            })?),
            Family::Objects => {
                Value::Objects(self.materialize(pos, shape.len, Self::parse_object)?)
            }
            Family::Ints => Value::Ints(self.materialize(pos, shape.len, |p, cur| {
                let (_, end) = scanner::scan_number(p.bytes, cur);
                Ok((p.parse_int(cur, end)?, end))
            })?),
            Family::Floats => Value::Floats(self.materialize(pos, shape.len, |p, cur| {
                let (_, end) = scanner::scan_number(p.bytes, cur);
                Ok((p.parse_float(cur, end)?, end))
            })?),
            Family::Bools => Value::Bools(self.materialize(pos, shape.len, |p, cur| {
                let rest = &p.bytes[cur..];
                if rest.starts_with(b"true") {
                    Ok((true, cur + 4))
                } else if rest.starts_with(b"false") {
                    Ok((false, cur + 5))
                } else {
                    Err(p.err(
                        ParseErrorKind::MalformedSyntax("unrecognized array element"),
                        cur,
                    ))
                }
            })?),
            Family::Mix => Value::Mix(self.materialize(pos, shape.len, Self::parse_value)?),
        };
        Ok((value, shape.end))
    }

    /// Classification pass: measures every element without materializing
    /// it, folding the observed element families into one uniform family.
    ///
    /// A nested array or a `null` forces `Mix` outright; the two numeric
    /// families never merge, so one float among integers (or the reverse)
    /// also falls back to `Mix`. The element count is recorded regardless
    /// of the outcome. A missing `]` terminates leniently at end of input,
    /// mirroring the object parser.
    fn classify_array(&self, pos: usize) -> Result<ArrayShape, ParseError> {
        let mut family: Option<Family> = None;
        let mut len = 0usize;
        let mut cur = lexer::skip(self.bytes, pos + 1);
        loop {
            while self.byte(cur) == b',' {
                cur = lexer::skip(self.bytes, cur + 1);
            }
            if self.byte(cur) == b']' {
                cur += 1;
                break;
            }
            if cur >= self.bytes.len() {
                break;
            }
            let observed = match self.byte(cur) {
                b'"' => {
                    cur = scanner::skip_string(self.src, cur)?;
                    Family::Strings
                }
                b'0'..=b'9' | b'-' => {
                    let (kind, end) = scanner::scan_number(self.bytes, cur);
                    cur = end;
                    match kind {
                        NumberKind::Integer => Family::Ints,
                        NumberKind::Float => Family::Floats,
                    }
                }
                b'{' => {
                    cur = scanner::skip_balanced(self.src, cur)?;
                    Family::Objects
                }
                b'[' => {
                    cur = scanner::skip_balanced(self.src, cur)?;
                    Family::Mix
                }
                _ => {
                    let rest = &self.bytes[cur..];
                    if rest.starts_with(b"null") {
                        cur += 4;
                        Family::Mix
                    } else if rest.starts_with(b"true") {
                        cur += 4;
                        Family::Bools
                    } else if rest.starts_with(b"false") {
                        cur += 5;
                        Family::Bools
                    } else {
                        return Err(self.err(
                            ParseErrorKind::MalformedSyntax("unrecognized array element"),
                            cur,
                        ));
                    }
                }
            };
            family = Some(match family {
                None => observed,
                Some(settled) if settled == observed => settled,
                Some(_) => Family::Mix,
            });
            len += 1;
            cur = lexer::skip(self.bytes, cur);
            if self.byte(cur) != b',' {
                if self.byte(cur) == b']' {
                    cur += 1;
                }
                break;
            }
        }
        Ok(ArrayShape {
            family: family.unwrap_or(Family::Mix),
            len,
            end: cur,
        })
    }

    /// Materialization pass: re-scans the array at `pos` and parses exactly
    /// `len` elements with the supplied element parser, into a vector
    /// allocated at its final size.
    fn materialize<T>(
        &self,
        pos: usize,
        len: usize,
        element: impl Fn(&Self, usize) -> Result<(T, usize), ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::with_capacity(len);
        let mut cur = lexer::skip(self.bytes, pos + 1);
        for _ in 0..len {
            while self.byte(cur) == b',' {
                cur = lexer::skip(self.bytes, cur + 1);
            }
            let (item, after) = element(self, cur)?;
            items.push(item);
            cur = lexer::skip(self.bytes, after);
        }
        Ok(items)
    }
}
