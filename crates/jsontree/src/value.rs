//! The tree model: [`Value`], object members, and borrowed views.
//!
//! A parsed document is a tree of [`Value`]s. Objects are ordered member
//! sequences; arrays come in two flavors: homogeneous arrays are specialized
//! into packed containers ([`Value::Ints`], [`Value::Strings`], ...) and
//! everything else is a generic element list ([`Value::Mix`]).
use alloc::{string::String, vec::Vec};

/// One object member: a key and its value.
///
/// Members keep the order they appear in the source text; order is
/// semantically meaningful and preserved through parsing.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// The member name, decoded.
    pub key: String,
    /// The member value.
    pub value: Value,
}

/// The ordered member sequence of one object.
pub type Members = Vec<Member>;

/// A parsed JSON value.
///
/// Scalars and objects are direct. Arrays are classified at parse time:
/// an array whose elements are uniformly strings, objects, integers, floats,
/// or booleans becomes the matching packed variant; any mixture (including
/// any `null` or nested array) becomes [`Value::Mix`]. Integer and float
/// elements never merge into one family, so `[1, 2.0]` is a `Mix`.
///
/// Dropping a `Value` releases the whole sub-tree it owns.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Value, parse};
///
/// let doc = parse(r#"{"xs": [1, 2, 3]}"#).unwrap();
/// let Value::Object(members) = &doc else { unreachable!() };
/// assert_eq!(members[0].value, Value::Ints(vec![1, 2, 3]));
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// An integer number (no decimal point or exponent in the source).
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
    /// A string literal, decoded.
    String(String),
    /// A nested object: the value is its member sequence.
    Object(Members),
    /// A heterogeneous (or empty) array.
    Mix(Vec<Value>),
    /// An array whose elements are all strings.
    Strings(Vec<String>),
    /// An array whose elements are all objects.
    Objects(Vec<Members>),
    /// A packed array of integers.
    Ints(Vec<i64>),
    /// A packed array of floats.
    Floats(Vec<f64>),
    /// A packed array of booleans.
    Bools(Vec<bool>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Mix(v)
    }
}

impl From<Members> for Value {
    fn from(v: Members) -> Self {
        Self::Object(v)
    }
}

/// The discriminant of a [`Value`] or [`ValueRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Int`].
    Int,
    /// [`Value::Float`].
    Float,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::String`].
    String,
    /// [`Value::Object`].
    Object,
    /// [`Value::Mix`].
    Mix,
    /// [`Value::Strings`].
    Strings,
    /// [`Value::Objects`].
    Objects,
    /// [`Value::Ints`].
    Ints,
    /// [`Value::Floats`].
    Floats,
    /// [`Value::Bools`].
    Bools,
}

impl Value {
    /// Returns the discriminant of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueRef::from(self).kind()
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// Distinct from a failed query: resolving a path to `null` is success.
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is any array family, packed or mixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Ints(vec![1]).is_array());
    /// assert!(Value::Mix(vec![]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Self::Mix(..)
                | Self::Strings(..)
                | Self::Objects(..)
                | Self::Ints(..)
                | Self::Floats(..)
                | Self::Bools(..)
        )
    }

    /// The element count of any array family, `None` for non-arrays.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Mix(v) => Some(v.len()),
            Self::Strings(v) => Some(v.len()),
            Self::Objects(v) => Some(v.len()),
            Self::Ints(v) => Some(v.len()),
            Self::Floats(v) => Some(v.len()),
            Self::Bools(v) => Some(v.len()),
            _ => None,
        }
    }

    /// The string payload, if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a [`Value::Float`].
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The member sequence, if this is a [`Value::Object`].
    #[must_use]
    pub fn members(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }
}

/// A borrowed view of a value, as returned by the typed query descent.
///
/// Elements of the packed array families have no owned [`Value`] to point
/// at, so query results are expressed as views: scalar payloads are copied
/// out, string and container payloads are borrowed from the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
    /// A `null` value.
    Null,
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A string payload, borrowed.
    String(&'a str),
    /// An object's member sequence.
    Object(&'a [Member]),
    /// A heterogeneous array's elements.
    Mix(&'a [Value]),
    /// A packed string array.
    Strings(&'a [String]),
    /// A packed object array.
    Objects(&'a [Members]),
    /// A packed integer array.
    Ints(&'a [i64]),
    /// A packed float array.
    Floats(&'a [f64]),
    /// A packed boolean array.
    Bools(&'a [bool]),
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => ValueRef::Null,
            Value::Int(n) => ValueRef::Int(*n),
            Value::Float(n) => ValueRef::Float(*n),
            Value::Bool(b) => ValueRef::Bool(*b),
            Value::String(s) => ValueRef::String(s),
            Value::Object(members) => ValueRef::Object(members),
            Value::Mix(elements) => ValueRef::Mix(elements),
            Value::Strings(items) => ValueRef::Strings(items),
            Value::Objects(items) => ValueRef::Objects(items),
            Value::Ints(items) => ValueRef::Ints(items),
            Value::Floats(items) => ValueRef::Floats(items),
            Value::Bools(items) => ValueRef::Bools(items),
        }
    }
}

impl<'a> ValueRef<'a> {
    /// Returns the discriminant of the viewed value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueRef::Null => ValueKind::Null,
            ValueRef::Int(..) => ValueKind::Int,
            ValueRef::Float(..) => ValueKind::Float,
            ValueRef::Bool(..) => ValueKind::Bool,
            ValueRef::String(..) => ValueKind::String,
            ValueRef::Object(..) => ValueKind::Object,
            ValueRef::Mix(..) => ValueKind::Mix,
            ValueRef::Strings(..) => ValueKind::Strings,
            ValueRef::Objects(..) => ValueKind::Objects,
            ValueRef::Ints(..) => ValueKind::Ints,
            ValueRef::Floats(..) => ValueKind::Floats,
            ValueRef::Bools(..) => ValueKind::Bools,
        }
    }

    /// The string payload, if the view is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            ValueRef::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if the view is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ValueRef::Int(n) => Some(*n),
            _ => None,
        }
    }
}
