//! # ParsiView - Parser Combinator Library
//!
//! A small parser combinator library over borrowed element views.
//!
//! Parsers are plain values implementing [`Parser`]. Each one takes a
//! [`View`] of the input and either returns its output together with the
//! remaining view, or the single failure [`NoMatch`]. Larger grammars are
//! assembled from the terminal primitives with two combinators:
//!
//! - [`alt`]: ordered choice over a tuple of alternatives sharing one output type
//! - [`seq`]: ordered sequence over a tuple of steps, producing a flat tuple
//!
//! Views are `Copy` windows over the caller's buffer; slicing never copies or
//! mutates it, so a parser can be run any number of times and from any thread.
//!
//! ```
//! use parsiview::{ByteView, Cursor, MapExt, Parser, alpha1, alt, parse_uint16, seq, tag};
//!
//! #[derive(Debug, PartialEq)]
//! enum Value {
//!     Port(u16),
//!     Name(String),
//! }
//!
//! let value = alt((
//!     parse_uint16().map(Value::Port),
//!     alpha1::<u8>().map(|name| Value::Name(name.to_string())),
//! ));
//! let setting = seq((tag("port="), value));
//!
//! let ((_, port), rest) = setting.parse(ByteView::from("port=8080")).unwrap();
//! assert_eq!(port, Value::Port(8080));
//! assert!(rest.is_empty());
//!
//! assert!(setting.parse(ByteView::from("port=99999")).is_err());
//! ```

pub mod alt;
pub mod ascii;
pub mod atomic;
pub mod cursor;
pub mod cursors;
pub mod element;
pub mod error;
pub mod map;
pub mod parser;
pub mod seq;
pub mod tag;

pub use alt::{Alt, Choice, OrExt, alt};
pub use ascii::{
    ClassScanner, Integer, IntegerParser, LineEndingParser, TakeWhileParser, alpha0, alpha1,
    alphanumeric0, alphanumeric1, crlf, digit0, digit1, hex_digit0, hex_digit1, integer,
    line_ending, multispace0, multispace1, newline, not_line_ending, not_line_ending0,
    oct_digit0, oct_digit1, parse_int8, parse_int16, parse_int32, parse_int64, parse_int128,
    parse_uint8, parse_uint16, parse_uint32, parse_uint64, parse_uint128, space0, space1, tab,
    take_while0, take_while1,
};
pub use atomic::Atomic;
pub use cursor::Cursor;
pub use cursors::{ByteView, CharView, View};
pub use element::{AnyParser, ChParser, SatisfyParser, SetParser, anychar, ch, none_of, one_of, satisfy};
pub use error::NoMatch;
pub use map::{Map, MapExt, map};
pub use parser::Parser;
pub use seq::{AndExt, Seq, Sequence, seq};
pub use tag::{TagParser, tag};
