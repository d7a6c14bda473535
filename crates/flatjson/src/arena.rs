//! Allocation strategies and the two-stack word arena the AST is built in.
//!
//! A parse works inside a single `usize` array. The **temp stack** grows up
//! from index 0 and buffers the element words of whichever container is
//! currently open; the **AST heap** grows down from the end and holds
//! finalized payloads. Closing a container moves its temp entries into a new
//! heap block. The two regions colliding is the out-of-words condition.
//!
//! Heap positions are tracked *end-relative* (`len - index`): growing the
//! dynamic arena reallocates and shifts the heap block to the end of the
//! larger array, which keeps every end-relative reference valid. Offsets are
//! only rewritten to parent-relative form when a container closes and its
//! header position becomes known.

use crate::keys;
use crate::tag::{self, ValueType};

/// Initial word count for [`AllocationStrategy::Dynamic`].
const DYNAMIC_INITIAL: usize = 64;

/// How the parser obtains and grows its word array.
#[derive(Debug)]
pub enum AllocationStrategy {
    /// One up-front allocation of exactly `input.len()` words. The densest
    /// JSON inputs need exactly one word per input byte, so this never runs
    /// out.
    Single,
    /// Parse into a caller-provided buffer; its length is the capacity.
    /// Parsing fails with an out-of-memory error if the buffer is too small.
    SingleIn(Vec<usize>),
    /// Start small and grow by amortized doubling as needed.
    Dynamic,
}

/// Raised when the word array cannot hold the AST; the parser converts this
/// into an out-of-memory parse error at the current input position.
pub(crate) struct OutOfWords;

pub(crate) struct AstArena {
    words: Vec<usize>,
    /// One past the last temp-stack word.
    temp_len: usize,
    /// Lowest heap word in use; `words.len()` when the heap is empty.
    heap_top: usize,
    can_grow: bool,
}

impl AstArena {
    pub(crate) fn new(strategy: AllocationStrategy, input_len: usize) -> Self {
        let (words, can_grow) = match strategy {
            AllocationStrategy::Single => (vec![0usize; input_len], false),
            AllocationStrategy::SingleIn(buffer) => (buffer, false),
            AllocationStrategy::Dynamic => (vec![0usize; DYNAMIC_INITIAL], true),
        };
        let heap_top = words.len();
        AstArena {
            words,
            temp_len: 0,
            heap_top,
            can_grow,
        }
    }

    /// Current temp-stack depth. Containers record this on open and pass it
    /// back to [`Self::finish_array`] / [`Self::finish_object`].
    #[inline]
    pub(crate) fn temp_mark(&self) -> usize {
        self.temp_len
    }

    /// Index of the most recently finalized heap block; after the root
    /// container closes this is the root header.
    #[inline]
    pub(crate) fn root_index(&self) -> usize {
        self.heap_top
    }

    pub(crate) fn into_words(self) -> Box<[usize]> {
        self.words.into_boxed_slice()
    }

    /// Push one tagged word onto the temp stack.
    pub(crate) fn push_temp(&mut self, word: usize) -> Result<(), OutOfWords> {
        if self.temp_len == self.heap_top {
            self.grow(1)?;
        }
        self.words[self.temp_len] = word;
        self.temp_len += 1;
        Ok(())
    }

    /// Write a finalized payload into the heap and return its end-relative
    /// position.
    pub(crate) fn write_payload(&mut self, payload: &[usize]) -> Result<usize, OutOfWords> {
        while self.heap_top - self.temp_len < payload.len() {
            self.grow(payload.len())?;
        }
        self.heap_top -= payload.len();
        self.words[self.heap_top..self.heap_top + payload.len()].copy_from_slice(payload);
        Ok(self.words.len() - self.heap_top)
    }

    /// Close an array whose element words sit above `mark` on the temp
    /// stack: move them into a `[count, elements...]` heap block, rewriting
    /// end-relative child references to header-relative offsets. Returns the
    /// header's end-relative position.
    pub(crate) fn finish_array(&mut self, mark: usize) -> Result<usize, OutOfWords> {
        let count = self.temp_len - mark;
        let total = count + 1;
        self.reserve_close(mark, total)?;

        let header = self.heap_top - total;
        let header_rel = self.words.len() - header;
        // The destination may overlap the temp entries being consumed; a
        // back-to-front move keeps every read ahead of the writes.
        for i in (0..count).rev() {
            let word = self.words[mark + i];
            self.words[header + 1 + i] = rebase(word, header_rel);
        }
        self.words[header] = count;
        self.temp_len = mark;
        self.heap_top = header;
        Ok(header_rel)
    }

    /// Close an object whose key records (three words each) sit above `mark`:
    /// sort them by key, then move them into a `[count, records...]` heap
    /// block as for arrays. `text` is the input buffer the key spans index.
    pub(crate) fn finish_object(&mut self, mark: usize, text: &[u8]) -> Result<usize, OutOfWords> {
        let count = (self.temp_len - mark) / 3;
        let total = 3 * count + 1;

        let (records, rest) = self.words[mark..self.temp_len].as_chunks_mut::<3>();
        debug_assert!(rest.is_empty());
        records.sort_unstable_by(|a, b| {
            keys::key_order(&text[a[0]..a[1]], &text[b[0]..b[1]])
        });

        self.reserve_close(mark, total)?;

        let header = self.heap_top - total;
        let header_rel = self.words.len() - header;
        for i in (0..count).rev() {
            let src = mark + 3 * i;
            let (key_begin, key_end, value_word) = (
                self.words[src],
                self.words[src + 1],
                self.words[src + 2],
            );
            let dst = header + 1 + 3 * i;
            self.words[dst] = key_begin;
            self.words[dst + 1] = key_end;
            self.words[dst + 2] = rebase(value_word, header_rel);
        }
        self.words[header] = count;
        self.temp_len = mark;
        self.heap_top = header;
        Ok(header_rel)
    }

    /// Ensure a closing container's heap block fits. The entries above
    /// `mark` are consumed by the move, so the block may overlap them; only
    /// the temp stack below `mark` must stay clear.
    fn reserve_close(&mut self, mark: usize, total: usize) -> Result<(), OutOfWords> {
        while self.heap_top < mark + total {
            self.grow(total)?;
        }
        Ok(())
    }

    fn grow(&mut self, needed: usize) -> Result<(), OutOfWords> {
        if !self.can_grow {
            return Err(OutOfWords);
        }
        let old_len = self.words.len();
        let new_len = (old_len * 2).max(old_len + needed).max(DYNAMIC_INITIAL);
        let mut next = vec![0usize; new_len];
        next[..self.temp_len].copy_from_slice(&self.words[..self.temp_len]);
        let delta = new_len - old_len;
        next[self.heap_top + delta..].copy_from_slice(&self.words[self.heap_top..]);
        self.heap_top += delta;
        self.words = next;
        Ok(())
    }
}

/// Convert a temp word's end-relative child reference into a
/// header-relative offset. Inline words pass through unchanged.
#[inline]
fn rebase(word: usize, header_rel: usize) -> usize {
    let value_type = ValueType::from_word(word);
    if value_type.is_inline() {
        word
    } else {
        tag::make_word(value_type, header_rel - tag::word_value(word))
    }
}
