pub mod class;
pub mod number;
pub mod scan;
pub mod whitespace;

pub use class::{
    is_alpha, is_alphanumeric, is_digit, is_hex_digit, is_multispace, is_not_line_ending,
    is_oct_digit, is_space,
};
pub use number::{
    Integer, IntegerParser, digit0, digit1, hex_digit0, hex_digit1, integer, oct_digit0,
    oct_digit1, parse_int8, parse_int16, parse_int32, parse_int64, parse_int128, parse_uint8,
    parse_uint16, parse_uint32, parse_uint64, parse_uint128,
};
pub use scan::{
    ClassScanner, TakeWhileParser, alpha0, alpha1, alphanumeric0, alphanumeric1, take_while0,
    take_while1,
};
pub use whitespace::{
    LineEndingParser, crlf, line_ending, multispace0, multispace1, newline, not_line_ending,
    not_line_ending0, space0, space1, tab,
};
