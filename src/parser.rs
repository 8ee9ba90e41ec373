use crate::cursor::Cursor;
use crate::error::NoMatch;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The input view this parser consumes
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given view
    ///
    /// Returns the parsed value and the remaining view on success, or
    /// `NoMatch` if the parse fails. The remaining view is always a suffix of
    /// `cursor`.
    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        (**self).parse(cursor)
    }
}
