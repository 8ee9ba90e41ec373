use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;
use tracing::trace;

/// Ordered list of alternatives sharing one input and one output type
///
/// Implemented for tuples of up to twelve parsers. `choose` reports the index
/// of the branch that matched alongside its result.
pub trait Choice<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    fn choose(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(usize, Self::Output, Self::Cursor), NoMatch>;
}

macro_rules! impl_choice {
    ($($parser:ident $index:tt),+) => {
        impl<'code, C, O, $($parser),+> Choice<'code> for ($($parser,)+)
        where
            C: Cursor<'code>,
            $($parser: Parser<'code, Cursor = C, Output = O>,)+
        {
            type Cursor = C;
            type Output = O;

            fn choose(&self, cursor: C) -> Result<(usize, O, C), NoMatch> {
                $(
                    if let Ok((output, remaining)) = self.$index.parse(cursor) {
                        return Ok(($index, output, remaining));
                    }
                )+
                Err(NoMatch)
            }
        }
    };
}

impl_choice!(P0 0);
impl_choice!(P0 0, P1 1);
impl_choice!(P0 0, P1 1, P2 2);
impl_choice!(P0 0, P1 1, P2 2, P3 3);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9, P10 10);
impl_choice!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8, P9 9, P10 10, P11 11);

/// Parser combinator that tries each alternative in order and returns the first match
///
/// Every alternative is run against the same original input, so nothing a
/// failed branch looked at leaks into the next attempt. This is prioritized
/// choice: a later branch is never tried once an earlier one has matched,
/// even if it would have consumed more.
pub struct Alt<Ps> {
    parsers: Ps,
}

impl<Ps> Alt<Ps> {
    pub fn new(parsers: Ps) -> Self {
        Alt { parsers }
    }
}

impl<'code, Ps> Parser<'code> for Alt<Ps>
where
    Ps: Choice<'code>,
{
    type Cursor = Ps::Cursor;
    type Output = Ps::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        match self.parsers.choose(cursor) {
            Ok((branch, output, remaining)) => {
                trace!(branch, position = cursor.position(), "alt matched");
                Ok((output, remaining))
            }
            Err(NoMatch) => {
                trace!(position = cursor.position(), "alt exhausted");
                Err(NoMatch)
            }
        }
    }
}

/// Convenience function to create an Alt parser from a tuple of alternatives
pub fn alt<'code, Ps>(parsers: Ps) -> Alt<Ps>
where
    Ps: Choice<'code>,
{
    Alt::new(parsers)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Alt<(Self, P)>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Alt::new((self, other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
