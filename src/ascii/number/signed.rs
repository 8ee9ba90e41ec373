use super::integer::{IntegerParser, integer};

/// Decimal `i8` with an optional leading `-` or `+`
pub fn parse_int8<T>() -> IntegerParser<i8, T> {
    integer()
}

/// Decimal `i16` with an optional leading `-` or `+`
pub fn parse_int16<T>() -> IntegerParser<i16, T> {
    integer()
}

/// Decimal `i32` with an optional leading `-` or `+`
pub fn parse_int32<T>() -> IntegerParser<i32, T> {
    integer()
}

/// Decimal `i64` with an optional leading `-` or `+`
pub fn parse_int64<T>() -> IntegerParser<i64, T> {
    integer()
}

/// Decimal `i128` with an optional leading `-` or `+`
pub fn parse_int128<T>() -> IntegerParser<i128, T> {
    integer()
}
