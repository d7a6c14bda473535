//! Object-key ordering and lookup.
//!
//! Object key records are stored sorted so that member lookup is a binary
//! search instead of a scan. The order is length-major: shorter keys sort
//! first, equal-length keys compare lexicographically by bytes. Length-major
//! order makes the comparator a single memcmp for equal lengths and settles
//! prefix cases (a query that is a strict prefix of a stored key is simply
//! not found).

use std::cmp::Ordering;

/// Compare two keys by (byte length, lexicographic bytes).
#[inline]
pub(crate) fn key_order(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Binary-search the key records of the object whose header word is at
/// `header`. Records are `(key_begin, key_end, tagged_value)` triples and
/// `count = ast[header]`. Returns the matching record index, or `count`
/// when the key is absent.
pub(crate) fn find_key(ast: &[usize], text: &[u8], header: usize, query: &[u8]) -> usize {
    let count = ast[header];
    let mut lo = 0;
    let mut hi = count;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let record = header + 1 + 3 * mid;
        let key = &text[ast[record]..ast[record + 1]];
        match key_order(key, query) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return mid,
        }
    }
    count
}
