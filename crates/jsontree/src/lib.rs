//! A JSON tree parser with packed homogeneous arrays and colon-delimited
//! path queries.
//!
//! [`parse`] builds an immutable in-memory tree ([`Value`]) from JSON text.
//! A two-pass classifier specializes arrays whose elements are uniformly
//! typed into packed containers ([`Value::Ints`], [`Value::Strings`], ...);
//! everything else falls back to a generic element list ([`Value::Mix`]).
//! The companion query engine resolves colon-delimited paths against the
//! tree without copying.
//!
//! Input is standard JSON text extended with `//` line and `/* ... */`
//! block comments. Dropping the tree root releases everything it owns.
//!
//! ```rust
//! use jsontree::{ValueRef, parse};
//!
//! let doc = parse(
//!     r#"{
//!         // listener configuration
//!         "server": { "host": "localhost", "ports": [80, 443] }
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(doc.query_str("server:host"), Ok("localhost"));
//! assert_eq!(doc.query("server:ports:1"), Ok(ValueRef::Int(443)));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod options;
mod parser;
mod query;
mod scanner;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind, QueryError};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use query::{PATH_SPLIT, query_node, query_string, query_value};
pub use value::{Member, Members, Value, ValueKind, ValueRef};
