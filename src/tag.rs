use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::View;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that matches an exact literal element by element
///
/// The output is the consumed prefix of the input, which is equal to the
/// literal. Keeping the output as a view lets a tag sit in the same `alt` as
/// the class scanners.
pub struct TagParser<L, T> {
    literal: L,
    _element: PhantomData<fn() -> T>,
}

impl<L, T> TagParser<L, T>
where
    L: AsRef<[T]>,
{
    pub fn new(literal: L) -> Self {
        Self {
            literal,
            _element: PhantomData,
        }
    }
}

/// Check whether `input` starts with `literal`, bailing on the first mismatch
pub(crate) fn starts_with<T: PartialEq>(input: &[T], literal: &[T]) -> bool {
    if input.len() < literal.len() {
        return false;
    }
    literal
        .iter()
        .zip(input)
        .all(|(expected, found)| expected == found)
}

impl<'code, L, T> Parser<'code> for TagParser<L, T>
where
    L: AsRef<[T]>,
    T: Atomic + 'code,
{
    type Cursor = View<'code, T>;
    type Output = View<'code, T>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let literal = self.literal.as_ref();
        if starts_with(cursor.as_slice(), literal) {
            Ok(cursor.split_at(literal.len()))
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a TagParser
pub fn tag<L, T>(literal: L) -> TagParser<L, T>
where
    L: AsRef<[T]>,
{
    TagParser::new(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteView, CharView};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_tag_prefix_match() {
        let cursor = ByteView::from("<tag>value");
        let parser = tag("<tag>");

        let (matched, remaining) = parser.parse(cursor).unwrap();
        assert_eq!(matched, "<tag>");
        assert_eq!(matched.len(), 5);
        assert_eq!(remaining, "value");
        assert_eq!(remaining.len(), 5);
    }

    #[test]
    fn test_tag_not_at_start() {
        let cursor = ByteView::from("value<tag>");
        assert!(tag("<tag>").parse(cursor).is_err());
    }

    #[test]
    fn test_exact_match() {
        let (matched, remaining) = tag("hello").parse(ByteView::from("hello")).unwrap();
        assert_eq!(matched, "hello");
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_empty_literal() {
        let cursor = ByteView::from("hello");

        let (matched, remaining) = tag("").parse(cursor).unwrap();
        assert!(matched.is_empty());
        // Cursor should not advance for empty literal
        assert_eq!(remaining.position(), cursor.position());
    }

    #[test]
    fn test_mismatch_middle() {
        assert!(tag("hello").parse(ByteView::from("help")).is_err());
    }

    #[test]
    fn test_insufficient_input() {
        assert!(tag("hello").parse(ByteView::from("hel")).is_err());
        assert!(tag("hello").parse(ByteView::from("")).is_err());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(tag("hello").parse(ByteView::from("Hello")).is_err());
    }

    #[test]
    fn test_utf8_literal_on_bytes() {
        let cursor = ByteView::from("こんにちは世界");

        let (matched, remaining) = tag("こんにちは").parse(cursor).unwrap();
        assert_eq!(matched, "こんにちは");
        assert_eq!(remaining, "世界");
    }

    #[test]
    fn test_tag_on_chars() {
        let data: Vec<char> = "température".chars().collect();
        let literal: Vec<char> = "temp".chars().collect();

        let (matched, remaining) = tag(&literal).parse(CharView::new(&data)).unwrap();
        assert_eq!(matched, literal.as_slice());
        assert_eq!(remaining.len(), "érature".chars().count());
    }

    #[test]
    fn test_operators_and_symbols() {
        let symbols = ["<-", "->", "==", "!=", "<=", ">=", "::", "&&", "||"];

        for symbol in symbols {
            let (matched, _) = tag(symbol).parse(ByteView::from(symbol)).unwrap();
            assert_eq!(matched, symbol, "Failed for symbol: {}", symbol);
        }
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with(b"hello", b"he"));
        assert!(!starts_with(b"hello", b"lo"));
        assert!(!starts_with(b"he", b"hello"));
        assert!(starts_with::<u8>(b"", b""));
    }

    proptest! {
        #[test]
        fn tag_matches_iff_prefix(
            input in proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b')], 0..12),
            literal in proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b')], 0..4),
        ) {
            let cursor = ByteView::new(&input);
            let expected = input.len() >= literal.len() && input[..literal.len()] == literal[..];

            match tag(&literal).parse(cursor) {
                Ok((matched, remaining)) => {
                    prop_assert!(expected);
                    prop_assert_eq!(matched, literal.as_slice());
                    prop_assert_eq!(remaining, cursor.drop(literal.len()));
                    prop_assert_eq!(remaining.position(), literal.len());
                }
                Err(NoMatch) => prop_assert!(!expected),
            }
        }
    }
}
