//! Single-pass JSON parser producing a compact, indexable AST in one
//! contiguous machine-word array.
//!
//! The parser consumes an owned UTF-8 buffer, decodes string bodies **in
//! place**, and packs the whole tree into a single `usize` array: container
//! headers, sorted object key tables, doubles, and string spans. Scalars are
//! inlined into their parents' tagged element words, strings point back into
//! the input buffer, and navigation is plain index arithmetic with binary
//! search for object keys.
//!
//! The grammar is a strict subset of RFC 8259: the root must be an array or
//! object, leading zeroes, trailing commas, lone surrogates, and unescaped
//! control characters are rejected, and errors report a stable code plus a
//! 1-based line and column.
//!
//! # Example
//!
//! ```
//! use flatjson::{AllocationStrategy, parse_str};
//!
//! let doc = parse_str(
//!     AllocationStrategy::Dynamic,
//!     r#"{"name": "alice", "scores": [1, 2.5]}"#,
//! )
//! .unwrap();
//! let root = doc.root();
//! assert_eq!(root.value_of_key("name").unwrap().as_str(), Some("alice"));
//!
//! let scores = root.value_of_key("scores").unwrap();
//! assert_eq!(scores.len(), 2);
//! assert_eq!(scores.array_element(0).unwrap().integer_value(), Some(1));
//! assert_eq!(scores.array_element(1).unwrap().double_value(), Some(2.5));
//! ```

// Tagged element words pack a 32-bit inline integer beside a 3-bit type
// tag, which does not fit a 32-bit word.
#[cfg(not(target_pointer_width = "64"))]
compile_error!("flatjson requires a 64-bit target");

mod arena;
mod document;
mod error;
mod keys;
mod parser;
mod tag;
mod value;

pub use arena::AllocationStrategy;
pub use document::Document;
pub use error::{ErrorCode, ParseError};
pub use tag::ValueType;
pub use value::{TypedValue, Value};

/// Parse an owned JSON buffer.
///
/// The buffer is consumed: string bodies are decoded in place and the
/// resulting [`Document`] takes ownership of it alongside the AST word
/// array. Parsing is a single synchronous pass; recursion depth equals the
/// document's nesting depth on the native stack, so callers feeding
/// untrusted deeply-nested input should bound it themselves.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the error code, its 1-based line and
/// column, and (for the illegal-codepoint error) the offending byte. The
/// first error terminates the parse; the outcome never depends on the
/// allocation strategy, except that undersized
/// [`AllocationStrategy::SingleIn`] buffers fail with
/// [`ErrorCode::OutOfMemory`].
pub fn parse(strategy: AllocationStrategy, input: Vec<u8>) -> Result<Document, ParseError> {
    parser::parse_buffer(strategy, input)
}

/// Parse from a string slice, copying it once at entry.
///
/// See [`parse`] for the semantics; this is the convenience entry for
/// callers whose input is borrowed or must survive the parse.
///
/// # Errors
///
/// As for [`parse`].
pub fn parse_str(strategy: AllocationStrategy, input: &str) -> Result<Document, ParseError> {
    parser::parse_buffer(strategy, input.as_bytes().to_vec())
}
