use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Consumption and failure are exactly those of the wrapped parser. Mapping is
/// how children with different outputs are brought to a common type before
/// they go into an `alt`.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::{OrExt, alt};
    use crate::ascii::{alpha1, parse_int64};
    use crate::cursor::Cursor;
    use crate::cursors::{ByteView, CharView};
    use crate::element::ch;
    use crate::seq::seq;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    enum Token {
        Word(String),
        Number(i64),
        Special(char),
    }

    #[test]
    fn test_map_byte_to_char() {
        let parser = ch(b'A').map(|byte| byte as char);

        let (c, cursor) = parser.parse(ByteView::from("A")).unwrap();
        assert_eq!(c, 'A');
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = parse_int64().map(|num| format!("Number: {}", num));

        let (result, cursor) = parser.parse(ByteView::from("123")).unwrap();
        assert_eq!(result, "Number: 123");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_chaining() {
        let parser = ch('5')
            .map(|c| c.to_digit(10).unwrap_or_default())
            .map(|digit| format!("Digit: {}", digit));

        let data = ['5'];
        let (result, cursor) = parser.parse(CharView::new(&data)).unwrap();
        assert_eq!(result, "Digit: 5");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_unifies_alternatives() {
        let parser = alt((
            alpha1::<u8>().map(|word| Token::Word(word.to_string())),
            parse_int64().map(Token::Number),
            ch(b'!').map(|byte| Token::Special(byte as char)),
        ));

        let (token, cursor) = parser.parse(ByteView::from("42!")).unwrap();
        assert_eq!(token, Token::Number(42));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Special('!'));
        assert!(cursor.is_empty());

        let (token, _) = parser.parse(ByteView::from("hello 1")).unwrap();
        assert_eq!(token, Token::Word("hello".to_string()));
    }

    #[test]
    fn test_map_with_or_method() {
        let parser = ch(b'A')
            .map(|byte| Token::Special(byte as char))
            .or(parse_int64().map(Token::Number));

        let (token, _) = parser.parse(ByteView::from("-3")).unwrap();
        assert_eq!(token, Token::Number(-3));
    }

    #[test]
    fn test_map_over_seq() {
        let parser = seq((parse_int64(), ch(b'+'), parse_int64())).map(|(a, _, b)| a + b);

        let (sum, cursor) = parser.parse(ByteView::from("40+2;")).unwrap();
        assert_eq!(sum, 42);
        assert_eq!(cursor, ";");
    }

    #[test]
    fn test_map_preserves_failure() {
        let parser = ch(b'A').map(|byte| byte as char);
        assert_eq!(parser.parse(ByteView::from("xyz")), Err(NoMatch));
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(ch(b'9'), |byte| byte as char);

        let (c, cursor) = parser.parse(ByteView::from("9")).unwrap();
        assert_eq!(c, '9');
        assert!(cursor.is_empty());
    }
}
