use super::digit::digit1;
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::View;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::marker::PhantomData;
use tracing::trace;

/// Fixed-width integer a bounded numeric parser can produce
pub trait Integer: Copy + Sized {
    /// Whether a leading `-`/`+` is accepted
    const SIGNED: bool;
    const ZERO: Self;

    /// `self * 10 + digit`, or `None` on overflow
    fn push_digit(self, digit: u8) -> Option<Self>;

    /// `self * 10 - digit`, or `None` on overflow
    fn push_negative_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $signed:expr),+ $(,)?) => {
        $(
            impl Integer for $ty {
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;

                fn push_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_add(digit as $ty)
                }

                fn push_negative_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_sub(digit as $ty)
                }
            }
        )+
    };
}

impl_integer! {
    u8 => false, u16 => false, u32 => false, u64 => false, u128 => false,
    i8 => true, i16 => true, i32 => true, i64 => true, i128 => true,
}

/// Parser for a decimal integer bounded to the width of `N`
///
/// Reads `[sign] digit+` (the sign only for signed widths) and converts
/// exactly the span it consumes. A digit run that does not fit `N` is
/// rejected as a whole; it is never shortened to make it fit.
pub struct IntegerParser<N, T> {
    _marker: PhantomData<fn(T) -> N>,
}

impl<N, T> IntegerParser<N, T> {
    pub fn new() -> Self {
        IntegerParser {
            _marker: PhantomData,
        }
    }
}

impl<N, T> Default for IntegerParser<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, N, T> Parser<'code> for IntegerParser<N, T>
where
    N: Integer,
    T: Atomic + 'code,
{
    type Cursor = View<'code, T>;
    type Output = N;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let mut rest = cursor;
        let mut negative = false;

        if N::SIGNED {
            match cursor.first().and_then(Atomic::as_ascii) {
                Some(b'-') => {
                    negative = true;
                    rest = rest.drop(1);
                }
                Some(b'+') => rest = rest.drop(1),
                _ => {}
            }
        }

        let (digits, rest) = digit1().parse(rest)?;

        let mut value = N::ZERO;
        for &element in digits.as_slice() {
            let digit = element
                .as_ascii()
                .map(|b| b - b'0')
                .ok_or(NoMatch)?;
            let next = if negative {
                value.push_negative_digit(digit)
            } else {
                value.push_digit(digit)
            };
            value = match next {
                Some(value) => value,
                None => {
                    trace!(
                        position = cursor.position(),
                        width = std::any::type_name::<N>(),
                        digits = %T::slice_to_string(digits.as_slice()),
                        "integer literal out of range"
                    );
                    return Err(NoMatch);
                }
            };
        }

        Ok((value, rest))
    }
}

/// Convenience function to create an IntegerParser for any width
pub fn integer<N: Integer, T>() -> IntegerParser<N, T> {
    IntegerParser::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteView, CharView};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_digit_bounds() {
        assert_eq!(25u8.push_digit(5), Some(255));
        assert_eq!(25u8.push_digit(6), None);
        assert_eq!((-12i8).push_negative_digit(8), Some(-128));
        assert_eq!((-12i8).push_negative_digit(9), None);
        assert_eq!(12i8.push_digit(7), Some(127));
        assert_eq!(12i8.push_digit(8), None);
    }

    #[test]
    fn test_generic_width() {
        let (value, rest) = integer::<u16, _>().parse(ByteView::from("65535;")).unwrap();
        assert_eq!(value, 65535);
        assert_eq!(rest, ";");

        assert!(integer::<u16, u8>().parse(ByteView::from("65536")).is_err());
    }

    #[test]
    fn test_on_chars() {
        let data: Vec<char> = "-42é".chars().collect();

        let (value, rest) = integer::<i32, _>().parse(CharView::new(&data)).unwrap();
        assert_eq!(value, -42);
        assert_eq!(rest, ['é']);
    }

    #[test]
    fn test_consumed_span_matches_converted_span() {
        let cursor = ByteView::from("-007x");

        let (value, rest) = integer::<i8, _>().parse(cursor).unwrap();
        assert_eq!(value, -7);
        assert_eq!(rest.position(), 4);
    }
}
