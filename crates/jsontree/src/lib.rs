//! A strict, tree-building JSON parser and serializer.
//!
//! The crate parses one complete UTF-8 document into an owned [`Value`]
//! tree and serializes a tree back to compact JSON text:
//!
//! ```rust
//! use jsontree::{Value, parse, stringify};
//!
//! let value = parse(r#"{"n": 2.5, "tags": ["a", "b"]}"#).unwrap();
//! assert!(value.get("tags").is_some_and(Value::is_array));
//! assert_eq!(stringify(&value), r#"{"n":2.5,"tags":["a","b"]}"#);
//! ```
//!
//! Parsing is strict per RFC 8259 grammar: no comments, no trailing
//! commas, no non-finite numbers, and nothing may follow the root value
//! but whitespace. Every rejection maps to one [`ParseError`] variant.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod parser;
mod stringify;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse;
pub use stringify::stringify;
pub use value::{Array, Map, Value, ValueKind};
