use super::integer::{IntegerParser, integer};

/// Decimal `u8`; no sign accepted
pub fn parse_uint8<T>() -> IntegerParser<u8, T> {
    integer()
}

/// Decimal `u16`; no sign accepted
pub fn parse_uint16<T>() -> IntegerParser<u16, T> {
    integer()
}

/// Decimal `u32`; no sign accepted
pub fn parse_uint32<T>() -> IntegerParser<u32, T> {
    integer()
}

/// Decimal `u64`; no sign accepted
pub fn parse_uint64<T>() -> IntegerParser<u64, T> {
    integer()
}

/// Decimal `u128`; no sign accepted
pub fn parse_uint128<T>() -> IntegerParser<u128, T> {
    integer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteView;
    use crate::error::NoMatch;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_uint_single_digit() {
        let (value, cursor) = parse_uint64().parse(ByteView::from("5abc")).unwrap();
        assert_eq!(value, 5);
        assert_eq!(cursor, "abc");
    }

    #[test]
    fn test_uint_multiple_digits() {
        let (value, cursor) = parse_uint32().parse(ByteView::from("123abc")).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor, "abc");
    }

    #[test]
    fn test_uint_zero_and_leading_zeros() {
        let (value, cursor) = parse_uint8().parse(ByteView::from("0")).unwrap();
        assert_eq!(value, 0);
        assert!(cursor.is_empty());

        let (value, cursor) = parse_uint8().parse(ByteView::from("000255")).unwrap();
        assert_eq!(value, 255);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_uint8_out_of_range_rejects_whole_run() {
        assert_eq!(parse_uint8().parse(ByteView::from("300rest")), Err(NoMatch));
        assert_eq!(parse_uint8().parse(ByteView::from("256")), Err(NoMatch));
    }

    #[test]
    fn test_uint_bounds() {
        assert_eq!(parse_uint8().parse(ByteView::from("255")).unwrap().0, u8::MAX);
        assert_eq!(parse_uint16().parse(ByteView::from("65535")).unwrap().0, u16::MAX);
        assert!(parse_uint16().parse(ByteView::from("65536")).is_err());
        assert_eq!(
            parse_uint32().parse(ByteView::from("4294967295")).unwrap().0,
            u32::MAX
        );
        assert!(parse_uint32().parse(ByteView::from("4294967296")).is_err());
        assert_eq!(
            parse_uint64().parse(ByteView::from("18446744073709551615")).unwrap().0,
            u64::MAX
        );
        assert!(parse_uint64().parse(ByteView::from("18446744073709551616")).is_err());

        let max = u128::MAX.to_string();
        assert_eq!(
            parse_uint128().parse(ByteView::from(max.as_str())).unwrap().0,
            u128::MAX
        );
        assert!(parse_uint128().parse(ByteView::from("340282366920938463463374607431768211456")).is_err());
    }

    #[test]
    fn test_uint_rejects_signs() {
        assert!(parse_uint32().parse(ByteView::from("-1")).is_err());
        assert!(parse_uint32().parse(ByteView::from("+1")).is_err());
    }

    #[test]
    fn test_uint_no_digits() {
        assert!(parse_uint64().parse(ByteView::from("abc")).is_err());
        assert!(parse_uint64().parse(ByteView::from("")).is_err());
        assert!(parse_uint64().parse(ByteView::from(" 1")).is_err());
    }

    proptest! {
        #[test]
        fn uint16_agrees_with_std(digits in "[0-9]{1,7}", tail in "[a-z]{0,3}") {
            let input = format!("{}{}", digits, tail);
            let result = parse_uint16().parse(ByteView::from(input.as_str()));

            match digits.parse::<u16>() {
                Ok(expected) => {
                    let (value, rest) = result.unwrap();
                    prop_assert_eq!(value, expected);
                    prop_assert_eq!(rest, tail.as_str());
                }
                Err(_) => prop_assert_eq!(result, Err(NoMatch)),
            }
        }
    }
}
