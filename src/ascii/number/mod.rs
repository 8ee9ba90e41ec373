pub mod digit;
pub mod integer;
pub mod signed;
pub mod unsigned;

pub use digit::{digit0, digit1, hex_digit0, hex_digit1, oct_digit0, oct_digit1};
pub use integer::{Integer, IntegerParser, integer};
pub use signed::{parse_int8, parse_int16, parse_int32, parse_int64, parse_int128};
pub use unsigned::{parse_uint8, parse_uint16, parse_uint32, parse_uint64, parse_uint128};
