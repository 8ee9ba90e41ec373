//! Locale-independent character classes.
//!
//! Every predicate goes through [`Atomic::as_ascii`], so elements outside
//! ASCII belong to no class.

use crate::atomic::Atomic;

fn ascii_matches<T: Atomic>(element: T, class: impl Fn(u8) -> bool) -> bool {
    element.as_ascii().is_some_and(class)
}

/// `A-Z` or `a-z`
pub fn is_alpha<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| b.is_ascii_alphabetic())
}

/// `0-9`
pub fn is_digit<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| b.is_ascii_digit())
}

/// `A-Z`, `a-z` or `0-9`
pub fn is_alphanumeric<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| b.is_ascii_alphanumeric())
}

/// `0-9`, `A-F` or `a-f`
pub fn is_hex_digit<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| b.is_ascii_hexdigit())
}

/// `0-7`
pub fn is_oct_digit<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| matches!(b, b'0'..=b'7'))
}

/// Space, tab, line feed, vertical tab, form feed or carriage return
pub fn is_multispace<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| {
        matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
    })
}

/// A single `' '`
pub fn is_space<T: Atomic>(element: T) -> bool {
    ascii_matches(element, |b| b == b' ')
}

/// Neither `\n` nor `\r`
pub fn is_not_line_ending<T: Atomic>(element: T) -> bool {
    !ascii_matches(element, |b| b == b'\n' || b == b'\r')
}
