use super::class::{is_multispace, is_not_line_ending, is_space};
use super::scan::{ClassScanner, class0, class1};
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::View;
use crate::element::{ChParser, SatisfyParser, ch, satisfy};
use crate::error::NoMatch;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Zero or more ASCII whitespace elements (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`)
pub fn multispace0<T: Atomic>() -> ClassScanner<T> {
    class0(is_multispace)
}

/// One or more ASCII whitespace elements
pub fn multispace1<T: Atomic>() -> ClassScanner<T> {
    class1(is_multispace)
}

/// Zero or more `' '`
pub fn space0<T: Atomic>() -> ClassScanner<T> {
    class0(is_space)
}

/// One or more `' '`
pub fn space1<T: Atomic>() -> ClassScanner<T> {
    class1(is_space)
}

/// Everything up to (not including) the next `\n` or `\r`; never fails
pub fn not_line_ending0<T: Atomic>() -> ClassScanner<T> {
    class0(is_not_line_ending)
}

/// Everything up to (not including) the next `\n` or `\r`
///
/// Fails only when the scan is empty, i.e. the input is empty or already
/// sits on a line ending.
pub fn not_line_ending<T: Atomic>() -> ClassScanner<T> {
    class1(is_not_line_ending)
}

/// Parser for `"\r\n"`, and optionally a bare `"\n"`
pub struct LineEndingParser<T> {
    allow_bare_newline: bool,
    _element: PhantomData<fn() -> T>,
}

impl<T> LineEndingParser<T> {
    pub fn new(allow_bare_newline: bool) -> Self {
        LineEndingParser {
            allow_bare_newline,
            _element: PhantomData,
        }
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for LineEndingParser<T> {
    type Cursor = View<'code, T>;
    type Output = View<'code, T>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let ascii_at = |index| cursor.get(index).and_then(Atomic::as_ascii);

        // "\r\n" is tried before "\n"
        match (ascii_at(0), ascii_at(1)) {
            (Some(b'\r'), Some(b'\n')) => Ok(cursor.split_at(2)),
            (Some(b'\n'), _) if self.allow_bare_newline => Ok(cursor.split_at(1)),
            _ => Err(NoMatch),
        }
    }
}

/// Matches `"\r\n"` or `"\n"`
pub fn line_ending<T>() -> LineEndingParser<T> {
    LineEndingParser::new(true)
}

/// Matches exactly `"\r\n"`
pub fn crlf<T>() -> LineEndingParser<T> {
    LineEndingParser::new(false)
}

/// Matches a single `\n`
pub fn newline<T: Atomic>() -> ChParser<T> {
    ch(T::NEWLINE)
}

fn is_tab<T: Atomic>(element: T) -> bool {
    element.as_ascii() == Some(b'\t')
}

/// Matches a single `\t`
pub fn tab<T: Atomic>() -> SatisfyParser<fn(T) -> bool, T> {
    satisfy(is_tab as fn(T) -> bool)
}
