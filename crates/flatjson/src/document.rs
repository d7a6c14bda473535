//! Parsed document: owner of the AST word array and the text buffer.

use std::fmt;

use crate::tag::ValueType;
use crate::value::Value;

/// A successfully parsed JSON document.
///
/// The document owns two buffers: the word array holding the AST, and the
/// input bytes whose string bodies were decoded in place during the parse.
/// [`Value`]s borrow from both and cannot outlive the document. A document
/// is immutable after parsing and safe to read from multiple threads.
///
/// ```
/// use flatjson::{AllocationStrategy, ValueType, parse_str};
///
/// let doc = parse_str(AllocationStrategy::Single, r#"{"answer": 42}"#).unwrap();
/// let root = doc.root();
/// assert_eq!(root.value_type(), ValueType::Object);
/// assert_eq!(root.value_of_key("answer").unwrap().integer_value(), Some(42));
/// ```
pub struct Document {
    ast: Box<[usize]>,
    text: Box<[u8]>,
    /// Word index of the root container's header.
    root: usize,
    root_tag: ValueType,
}

impl Document {
    pub(crate) fn new(ast: Box<[usize]>, text: Box<[u8]>, root: usize, root_tag: ValueType) -> Self {
        Document {
            ast,
            text,
            root,
            root_tag,
        }
    }

    /// The root value; always an array or an object.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Value<'_> {
        Value::new(&self.ast, &self.text, self.root_tag, self.root)
    }

    /// Raw access to the word array. The AST heap occupies the tail of the
    /// slice, with the root header at [`Self::root_index`]; the words below
    /// it are the parse's spent scratch space.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[usize] {
        &self.ast
    }

    /// Index of the root header within [`Self::words`].
    #[inline]
    #[must_use]
    pub fn root_index(&self) -> usize {
        self.root
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root().value_type().name())
            .field("root_index", &self.root)
            .field("words", &self.ast.len())
            .field("text_len", &self.text.len())
            .finish()
    }
}
