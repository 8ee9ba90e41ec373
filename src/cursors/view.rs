use crate::atomic::Atomic;
use crate::cursor::Cursor;
use std::fmt;

/// Non-owning window over a slice of atomic elements
///
/// Holds the full backing source plus an `(offset, len)` pair.
/// `offset + len <= source.len()` always holds.
#[derive(Copy, Clone)]
pub struct View<'code, T: Atomic> {
    source: &'code [T],
    offset: usize,
    len: usize,
}

impl<'code, T: Atomic> View<'code, T> {
    pub fn new(source: &'code [T]) -> Self {
        View {
            source,
            offset: 0,
            len: source.len(),
        }
    }
}

impl<'code, T: Atomic> Cursor<'code> for View<'code, T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<Self::Element> {
        if index < self.len {
            Some(self.source[self.offset + index])
        } else {
            None
        }
    }

    fn drop(self, n: usize) -> Self {
        let n = n.min(self.len);
        View {
            source: self.source,
            offset: self.offset + n,
            len: self.len - n,
        }
    }

    fn take(self, n: usize) -> Self {
        View {
            source: self.source,
            offset: self.offset,
            len: n.min(self.len),
        }
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn source(&self) -> &'code [Self::Element] {
        self.source
    }

    fn as_slice(&self) -> &'code [Self::Element] {
        &self.source[self.offset..self.offset + self.len]
    }
}

impl<'code, T: Atomic> From<&'code [T]> for View<'code, T> {
    fn from(source: &'code [T]) -> Self {
        View::new(source)
    }
}

impl<'code, T: Atomic, const N: usize> From<&'code [T; N]> for View<'code, T> {
    fn from(source: &'code [T; N]) -> Self {
        View::new(source)
    }
}

impl<'code> From<&'code str> for View<'code, u8> {
    fn from(source: &'code str) -> Self {
        View::new(source.as_bytes())
    }
}

impl<'code, T: Atomic> fmt::Debug for View<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("offset", &self.offset)
            .field("content", &T::slice_to_string(self.as_slice()))
            .finish()
    }
}

impl<'code, T: Atomic> fmt::Display for View<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&T::slice_to_string(self.as_slice()))
    }
}

// Equality is by content: two windows over different buffers (or different
// offsets of one buffer) are equal when they cover equal elements.
impl<'a, 'b, T: Atomic> PartialEq<View<'b, T>> for View<'a, T> {
    fn eq(&self, other: &View<'b, T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'code, T: Atomic + Eq> Eq for View<'code, T> {}

impl<'code, T: Atomic> PartialEq<[T]> for View<'code, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<'code, T: Atomic> PartialEq<&[T]> for View<'code, T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<'code, T: Atomic, const N: usize> PartialEq<[T; N]> for View<'code, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'code, T: Atomic, const N: usize> PartialEq<&[T; N]> for View<'code, T> {
    fn eq(&self, other: &&[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'code> PartialEq<str> for View<'code, u8> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<'code> PartialEq<&str> for View<'code, u8> {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}
