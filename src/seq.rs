use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;
use tracing::trace;

/// Ordered list of steps threaded through one input
///
/// Implemented for tuples of up to twelve parsers. Each step may produce its
/// own output type; the combined output is a flat tuple in step order.
pub trait Sequence<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    fn run(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch>;
}

macro_rules! impl_sequence {
    ($($parser:ident $value:ident $index:tt),+) => {
        impl<'code, C, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            C: Cursor<'code>,
            $($parser: Parser<'code, Cursor = C>,)+
        {
            type Cursor = C;
            type Output = ($($parser::Output,)+);

            fn run(&self, cursor: C) -> Result<(Self::Output, C), NoMatch> {
                $(
                    let ($value, cursor) = match self.$index.parse(cursor) {
                        Ok(result) => result,
                        Err(NoMatch) => {
                            trace!(step = $index, position = cursor.position(), "seq step failed");
                            return Err(NoMatch);
                        }
                    };
                )+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_sequence!(P0 v0 0);
impl_sequence!(P0 v0 0, P1 v1 1);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6);
impl_sequence!(P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7);
impl_sequence!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8
);
impl_sequence!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9
);
impl_sequence!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9,
    P10 v10 10
);
impl_sequence!(
    P0 v0 0, P1 v1 1, P2 v2 2, P3 v3 3, P4 v4 4, P5 v5 5, P6 v6 6, P7 v7 7, P8 v8 8, P9 v9 9,
    P10 v10 10, P11 v11 11
);

/// Parser combinator that runs each step on the remainder of the previous one
///
/// All-or-nothing: the first failing step fails the whole sequence and no
/// partial outputs are returned. Unlike chaining `.and()`, the output is a
/// flat tuple, so `seq((a, b, c))` yields `(a, b, c)` rather than `((a, b), c)`.
///
/// Example:
/// ```
/// use parsiview::{ByteView, Cursor, Parser, ch, parse_int64, parse_uint64, seq};
///
/// let cursor = ByteView::from("123.456");
/// let ((int_part, _, frac_part), cursor) = seq((parse_int64(), ch(b'.'), parse_uint64()))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// assert!(cursor.is_empty());
/// ```
pub struct Seq<Ps> {
    parsers: Ps,
}

impl<Ps> Seq<Ps> {
    pub fn new(parsers: Ps) -> Self {
        Seq { parsers }
    }
}

impl<'code, Ps> Parser<'code> for Seq<Ps>
where
    Ps: Sequence<'code>,
{
    type Cursor = Ps::Cursor;
    type Output = Ps::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        self.parsers.run(cursor)
    }
}

/// Convenience function to create a Seq parser from a tuple of steps
pub fn seq<'code, Ps>(parsers: Ps) -> Seq<Ps>
where
    Ps: Sequence<'code>,
{
    Seq::new(parsers)
}

/// Extension trait to add .and() method support for parsers
///
/// Chained `.and()` calls nest: `a.and(b).and(c)` yields `((a, b), c)`.
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> Seq<(Self, P)>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Seq::new((self, other))
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
