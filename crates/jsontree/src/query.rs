//! Colon-delimited path queries over a parsed tree.
//!
//! A path is a sequence of segments separated by [`PATH_SPLIT`]. A segment
//! names an object member or, against an array value, a non-negative
//! decimal index. A path that begins with the delimiter (or an empty path)
//! denotes the implicit first child: the first member of an object, element
//! 0 of any array family, or a scalar itself.
//!
//! The engine only reads the tree; results borrow from it and are bounded
//! by its lifetime.

use alloc::string::{String, ToString};

use crate::{
    error::QueryError,
    value::{Member, Value, ValueRef},
};

/// The path segment delimiter.
pub const PATH_SPLIT: char = ':';

/// Splits off the first segment of `path`.
fn split_first(path: &str) -> (&str, Option<&str>) {
    match path.split_once(PATH_SPLIT) {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    }
}

/// Finds the member whose key equals `segment` exactly.
///
/// Exact equality of the full segment against the full key: a key `"ab"`
/// never matches an `"a"` lookup even though `"a"` is a prefix of it.
fn find_member<'tree>(segment: &str, members: &'tree [Member]) -> Result<&'tree Member, QueryError> {
    members
        .iter()
        .find(|member| member.key == segment)
        .ok_or_else(|| QueryError::NotFound(segment.to_string()))
}

/// Parses `segment` as a decimal index and bounds-checks it.
///
/// A negative or non-numeric segment is [`QueryError::NotFound`]; a numeric
/// one at or past `len` is [`QueryError::IndexOutOfRange`].
fn index(segment: &str, len: usize) -> Result<usize, QueryError> {
    let n: usize = segment
        .parse()
        .map_err(|_| QueryError::NotFound(segment.to_string()))?;
    if n < len {
        Ok(n)
    } else {
        Err(QueryError::IndexOutOfRange { index: n, len })
    }
}

/// Resolves `path` against `root` and returns the matched value as a
/// borrowed, tagged view.
///
/// Member-name segments descend through objects; decimal-index segments
/// descend through every array family, including the packed primitive
/// ones. An empty segment (leading delimiter, or a trailing delimiter as
/// the final segment) resolves to the implicit first child.
///
/// # Errors
///
/// [`QueryError::NotFound`] when a segment matches nothing,
/// [`QueryError::IndexOutOfRange`] when an index misses its array.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ValueRef, parse, query_value};
///
/// let doc = parse(r#"{"xs": [1, 2, 3], "s": null}"#).unwrap();
/// assert_eq!(query_value("xs:2", &doc), Ok(ValueRef::Int(3)));
/// // Resolving to null is success; only unmatched paths are errors.
/// assert_eq!(query_value("s", &doc), Ok(ValueRef::Null));
/// assert!(query_value("t", &doc).is_err());
/// ```
pub fn query_value<'tree>(path: &str, root: &'tree Value) -> Result<ValueRef<'tree>, QueryError> {
    resolve(path, ValueRef::from(root))
}

fn resolve<'tree>(path: &str, base: ValueRef<'tree>) -> Result<ValueRef<'tree>, QueryError> {
    let (segment, rest) = split_first(path);
    if segment.is_empty() {
        return implicit_first(base);
    }
    let child = lookup(segment, base)?;
    match rest {
        None => Ok(child),
        Some(rest) => resolve(rest, child),
    }
}

/// The implicit first child of `base`: objects resolve to their member
/// sequence, arrays to element 0, scalars to themselves.
fn implicit_first(base: ValueRef<'_>) -> Result<ValueRef<'_>, QueryError> {
    let missing = || QueryError::NotFound(String::new());
    match base {
        ValueRef::Object(_) => Ok(base),
        ValueRef::Mix(elements) => elements.first().map(ValueRef::from).ok_or_else(missing),
        ValueRef::Strings(items) => items
            .first()
            .map(|s| ValueRef::String(s.as_str()))
            .ok_or_else(missing),
        ValueRef::Objects(items) => items
            .first()
            .map(|m| ValueRef::Object(m.as_slice()))
            .ok_or_else(missing),
        ValueRef::Ints(items) => items.first().map(|&n| ValueRef::Int(n)).ok_or_else(missing),
        ValueRef::Floats(items) => items
            .first()
            .map(|&n| ValueRef::Float(n))
            .ok_or_else(missing),
        ValueRef::Bools(items) => items
            .first()
            .map(|&b| ValueRef::Bool(b))
            .ok_or_else(missing),
        scalar => Ok(scalar),
    }
}

/// Resolves one non-empty segment against `base`.
fn lookup<'tree>(segment: &str, base: ValueRef<'tree>) -> Result<ValueRef<'tree>, QueryError> {
    match base {
        ValueRef::Object(members) => {
            find_member(segment, members).map(|member| ValueRef::from(&member.value))
        }
        ValueRef::Mix(elements) => {
            index(segment, elements.len()).map(|i| ValueRef::from(&elements[i]))
        }
        ValueRef::Strings(items) => {
            index(segment, items.len()).map(|i| ValueRef::String(items[i].as_str()))
        }
        ValueRef::Objects(items) => {
            index(segment, items.len()).map(|i| ValueRef::Object(items[i].as_slice()))
        }
        ValueRef::Ints(items) => index(segment, items.len()).map(|i| ValueRef::Int(items[i])),
        ValueRef::Floats(items) => index(segment, items.len()).map(|i| ValueRef::Float(items[i])),
        ValueRef::Bools(items) => index(segment, items.len()).map(|i| ValueRef::Bool(items[i])),
        _ => Err(QueryError::NotFound(segment.to_string())),
    }
}

/// Resolves `path` against `root` and returns the matched *member* rather
/// than its value, so callers can continue a multi-segment descent or read
/// the key alongside the value.
///
/// Only member-name segments through objects are resolved here; array
/// indexing belongs to [`query_value`]. An empty segment selects the first
/// member.
///
/// # Errors
///
/// [`QueryError::NotFound`] when the current value is not an object or no
/// member matches.
pub fn query_node<'tree>(path: &str, root: &'tree Value) -> Result<&'tree Member, QueryError> {
    let (segment, rest) = split_first(path);
    let Value::Object(members) = root else {
        return Err(QueryError::NotFound(segment.to_string()));
    };
    let member = if segment.is_empty() {
        members
            .first()
            .ok_or_else(|| QueryError::NotFound(segment.to_string()))?
    } else {
        find_member(segment, members)?
    };
    match rest {
        None => Ok(member),
        Some(rest) => query_node(rest, &member.value),
    }
}

/// Resolves `path` against `root` and returns the string payload it lands
/// on, by reference.
///
/// Consumes one segment at a time: objects by exact member name, object
/// arrays by decimal index (recursing into the selected sub-object). The
/// final segment must land on a string value; anything else is
/// [`QueryError::NotFound`]. The returned slice borrows from the tree and
/// must not outlive it.
///
/// # Errors
///
/// [`QueryError::NotFound`] or [`QueryError::IndexOutOfRange`], as for
/// [`query_value`].
pub fn query_string<'tree>(path: &str, root: &'tree Value) -> Result<&'tree str, QueryError> {
    let (segment, rest) = split_first(path);
    match root {
        Value::Object(members) => read_str_in(path, members),
        Value::Objects(items) => {
            let i = index(segment, items.len())?;
            match rest {
                Some(rest) => read_str_in(rest, &items[i]),
                None => Err(QueryError::NotFound(segment.to_string())),
            }
        }
        _ => Err(QueryError::NotFound(segment.to_string())),
    }
}

fn read_str_in<'tree>(path: &str, members: &'tree [Member]) -> Result<&'tree str, QueryError> {
    let (segment, rest) = split_first(path);
    let member = if segment.is_empty() {
        members
            .first()
            .ok_or_else(|| QueryError::NotFound(segment.to_string()))?
    } else {
        find_member(segment, members)?
    };
    match rest {
        Some(rest) => query_string(rest, &member.value),
        None => match &member.value {
            Value::String(s) => Ok(s),
            _ => Err(QueryError::NotFound(segment.to_string())),
        },
    }
}

impl Value {
    /// Resolves `path` and returns the matched value as a borrowed view.
    ///
    /// See [`query_value`].
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] / [`QueryError::IndexOutOfRange`].
    pub fn query(&self, path: &str) -> Result<ValueRef<'_>, QueryError> {
        query_value(path, self)
    }

    /// Resolves `path` and returns the matched member.
    ///
    /// See [`query_node`].
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`].
    pub fn query_node(&self, path: &str) -> Result<&Member, QueryError> {
        query_node(path, self)
    }

    /// Resolves `path` and returns the string payload it lands on.
    ///
    /// See [`query_string`].
    ///
    /// # Errors
    ///
    /// [`QueryError::NotFound`] / [`QueryError::IndexOutOfRange`].
    pub fn query_str(&self, path: &str) -> Result<&str, QueryError> {
        query_string(path, self)
    }
}
