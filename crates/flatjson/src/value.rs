//! Zero-copy value views over a parsed document.
//!
//! A [`Value`] is a lightweight reference into the document's word array; it
//! reads payloads on demand and never allocates. Strings borrow straight
//! from the (decoded-in-place) input buffer.
//!
//! # `TypedValue` access
//!
//! Use [`Value::typed`] for pattern matching:
//!
//! ```
//! use flatjson::{AllocationStrategy, TypedValue, parse_str};
//!
//! let doc = parse_str(AllocationStrategy::Dynamic, r#"[1, 2.5, "three"]"#).unwrap();
//! for element in doc.root().elements() {
//!     match element.typed() {
//!         TypedValue::Integer(n) => println!("int: {n}"),
//!         TypedValue::Double(d) => println!("double: {d}"),
//!         TypedValue::Str(s) => println!("string: {s}"),
//!         _ => {}
//!     }
//! }
//! ```

use std::fmt;

use crate::keys;
use crate::tag::{self, ValueType};

/// A typed view of a value for pattern matching.
#[derive(Debug, Clone, Copy)]
pub enum TypedValue<'a> {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Number in 32-bit integer range.
    Integer(i32),
    /// Any other number.
    Double(f64),
    /// Decoded string (zero-copy reference into the input buffer).
    Str(&'a str),
    /// Array; the wrapped value answers `len`, `array_element`, `elements`.
    Array(Value<'a>),
    /// Object; the wrapped value answers the key/value accessors.
    Object(Value<'a>),
}

/// A non-owning reference to one node of a parsed document.
///
/// Values are `Copy` and borrow from their [`Document`](crate::Document);
/// they cannot outlive it. Accessors that depend on a specific type return
/// `None` when called on a value of another type.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    ast: &'a [usize],
    text: &'a [u8],
    tag: ValueType,
    /// Word index of the payload for heap-backed values; the raw inline
    /// bits for integers; unused for the unit types.
    payload: usize,
}

impl<'a> Value<'a> {
    #[inline]
    pub(crate) fn new(ast: &'a [usize], text: &'a [u8], tag: ValueType, payload: usize) -> Self {
        Value {
            ast,
            text,
            tag,
            payload,
        }
    }

    /// Materialize a tagged element word belonging to the container whose
    /// header sits at `container`.
    #[inline]
    fn from_element(ast: &'a [usize], text: &'a [u8], container: usize, word: usize) -> Self {
        let tag = ValueType::from_word(word);
        let field = tag::word_value(word);
        let payload = if tag.is_inline() { field } else { container + field };
        Value {
            ast,
            text,
            tag,
            payload,
        }
    }

    /// This value's type tag.
    #[inline]
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.tag
    }

    /// Element count for arrays and objects, byte length for strings,
    /// zero for everything else.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.tag {
            ValueType::Array | ValueType::Object => self.ast[self.payload],
            ValueType::String => self.ast[self.payload + 1] - self.ast[self.payload],
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array element at `index`.
    #[must_use]
    pub fn array_element(&self, index: usize) -> Option<Value<'a>> {
        if self.tag != ValueType::Array || index >= self.ast[self.payload] {
            return None;
        }
        let word = self.ast[self.payload + 1 + index];
        Some(Self::from_element(self.ast, self.text, self.payload, word))
    }

    /// Key of the object member at `index` (members are stored sorted by
    /// length-major key order).
    #[must_use]
    pub fn object_key(&self, index: usize) -> Option<&'a str> {
        if self.tag != ValueType::Object || index >= self.ast[self.payload] {
            return None;
        }
        let record = self.payload + 1 + 3 * index;
        Some(self.str_span(self.ast[record], self.ast[record + 1]))
    }

    /// Value of the object member at `index`.
    #[must_use]
    pub fn object_value(&self, index: usize) -> Option<Value<'a>> {
        if self.tag != ValueType::Object || index >= self.ast[self.payload] {
            return None;
        }
        let record = self.payload + 1 + 3 * index;
        Some(Self::from_element(
            self.ast,
            self.text,
            self.payload,
            self.ast[record + 2],
        ))
    }

    /// Binary-search this object's members for `key`. Returns the member
    /// index, or [`Self::len`] when the key is absent (for non-objects the
    /// two coincide at zero).
    #[must_use]
    pub fn find_object_key(&self, key: &str) -> usize {
        match self.tag {
            ValueType::Object => keys::find_key(self.ast, self.text, self.payload, key.as_bytes()),
            _ => 0,
        }
    }

    /// Look up `key` and return its value, or `None` when absent.
    #[must_use]
    pub fn value_of_key(&self, key: &str) -> Option<Value<'a>> {
        if self.tag != ValueType::Object {
            return None;
        }
        self.object_value(self.find_object_key(key))
    }

    /// The integer, for values of integer type.
    #[must_use]
    pub fn integer_value(&self) -> Option<i32> {
        match self.tag {
            ValueType::Integer => Some(tag::unpack_integer(self.payload)),
            _ => None,
        }
    }

    /// The double, for values of double type.
    #[must_use]
    pub fn double_value(&self) -> Option<f64> {
        match self.tag {
            ValueType::Double => Some(self.read_double()),
            _ => None,
        }
    }

    /// The number as a double, widening integers.
    #[must_use]
    pub fn number_value(&self) -> Option<f64> {
        match self.tag {
            ValueType::Integer => Some(f64::from(tag::unpack_integer(self.payload))),
            ValueType::Double => Some(self.read_double()),
            _ => None,
        }
    }

    /// The decoded bytes of a string value, borrowed from the input buffer.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.tag {
            ValueType::String => {
                Some(&self.text[self.ast[self.payload]..self.ast[self.payload + 1]])
            }
            _ => None,
        }
    }

    /// The decoded string, borrowed from the input buffer.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self.tag {
            ValueType::String => Some(self.str_span(self.ast[self.payload], self.ast[self.payload + 1])),
            _ => None,
        }
    }

    /// Typed view for pattern matching.
    #[must_use]
    pub fn typed(&self) -> TypedValue<'a> {
        match self.tag {
            ValueType::Null => TypedValue::Null,
            ValueType::False => TypedValue::Bool(false),
            ValueType::True => TypedValue::Bool(true),
            ValueType::Integer => TypedValue::Integer(tag::unpack_integer(self.payload)),
            ValueType::Double => TypedValue::Double(self.read_double()),
            ValueType::String => {
                TypedValue::Str(self.str_span(self.ast[self.payload], self.ast[self.payload + 1]))
            }
            ValueType::Array => TypedValue::Array(*self),
            ValueType::Object => TypedValue::Object(*self),
        }
    }

    /// Iterate over array elements (empty for non-arrays).
    pub fn elements(&self) -> impl Iterator<Item = Value<'a>> + use<'a> {
        let ast = self.ast;
        let text = self.text;
        let header = self.payload;
        let count = match self.tag {
            ValueType::Array => self.ast[self.payload],
            _ => 0,
        };
        (0..count).map(move |i| Self::from_element(ast, text, header, ast[header + 1 + i]))
    }

    /// Iterate over object members in stored (sorted) order; empty for
    /// non-objects.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + use<'a> {
        let this = *self;
        let count = match self.tag {
            ValueType::Object => self.ast[self.payload],
            _ => 0,
        };
        (0..count).map(move |i| {
            let record = this.payload + 1 + 3 * i;
            let key = this.str_span(this.ast[record], this.ast[record + 1]);
            let value =
                Self::from_element(this.ast, this.text, this.payload, this.ast[record + 2]);
            (key, value)
        })
    }

    fn read_double(&self) -> f64 {
        let lo = self.ast[self.payload] as u32 as u64;
        let hi = self.ast[self.payload + 1] as u32 as u64;
        f64::from_bits((hi << 32) | lo)
    }

    fn str_span(&self, begin: usize, end: usize) -> &'a str {
        let bytes = &self.text[begin..end];
        // SAFETY: every span the parser stores was either decoded from
        // escapes (which emit well-formed UTF-8) or copied through the
        // strict UTF-8 validator, so `bytes` is valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.typed() {
            TypedValue::Null => write!(f, "Value::Null"),
            TypedValue::Bool(b) => write!(f, "Value::Bool({b:?})"),
            TypedValue::Integer(n) => write!(f, "Value::Integer({n:?})"),
            TypedValue::Double(d) => write!(f, "Value::Double({d:?})"),
            TypedValue::Str(s) => write!(f, "Value::Str({s:?})"),
            TypedValue::Array(v) => write!(f, "Value::Array(len {})", v.len()),
            TypedValue::Object(v) => write!(f, "Value::Object(len {})", v.len()),
        }
    }
}
