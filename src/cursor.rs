use crate::atomic::Atomic;

/// Generic input view for parser combinators
///
/// A cursor is an immutable window over a borrowed sequence of elements.
/// Slicing it never copies and never mutates: `drop` and `take` hand back a
/// new window over the same backing storage. This abstraction allows parsers
/// to work with different underlying data types (bytes, chars, ...) while
/// maintaining the same combinator interface.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Number of elements remaining in the window
    fn len(&self) -> usize;

    /// Check if the window holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `index` relative to the start of the window
    fn get(&self, index: usize) -> Option<Self::Element>;

    /// Get the first element of the window
    fn first(&self) -> Option<Self::Element> {
        self.get(0)
    }

    /// Window without its first `n` elements
    ///
    /// `n` is clamped to the window length.
    fn drop(self, n: usize) -> Self;

    /// Window over only the first `n` elements
    ///
    /// `n` is clamped to the window length.
    fn take(self, n: usize) -> Self;

    /// Split into (`take(n)`, `drop(n)`)
    fn split_at(self, n: usize) -> (Self, Self) {
        (self.take(n), self.drop(n))
    }

    /// Offset of the window's start within the backing source
    fn position(&self) -> usize;

    /// The whole backing source, independent of the window
    fn source(&self) -> &'code [Self::Element];

    /// The elements covered by the window
    fn as_slice(&self) -> &'code [Self::Element];
}
