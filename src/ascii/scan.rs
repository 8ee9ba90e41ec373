use super::class::{is_alpha, is_alphanumeric};
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::View;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Maximal-munch scanner over a single-element predicate
///
/// Consumes the longest prefix whose elements all satisfy the predicate and
/// returns it as a view. With `at_least_one` unset the scan always succeeds,
/// possibly with an empty prefix, so absence of the class has to be detected
/// by checking the returned view for emptiness.
pub struct TakeWhileParser<F, T> {
    predicate: F,
    at_least_one: bool,
    _element: PhantomData<fn(T) -> bool>,
}

impl<F, T> TakeWhileParser<F, T>
where
    F: Fn(T) -> bool,
{
    pub fn new(predicate: F, at_least_one: bool) -> Self {
        TakeWhileParser {
            predicate,
            at_least_one,
            _element: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for TakeWhileParser<F, T>
where
    F: Fn(T) -> bool,
    T: Atomic + 'code,
{
    type Cursor = View<'code, T>;
    type Output = View<'code, T>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let count = cursor
            .as_slice()
            .iter()
            .take_while(|&&element| (self.predicate)(element))
            .count();

        if self.at_least_one && count == 0 {
            return Err(NoMatch);
        }
        Ok(cursor.split_at(count))
    }
}

/// Scanner type produced by the fixed character classes
pub type ClassScanner<T> = TakeWhileParser<fn(T) -> bool, T>;

/// Zero or more elements satisfying `predicate`; never fails
pub fn take_while0<F, T>(predicate: F) -> TakeWhileParser<F, T>
where
    F: Fn(T) -> bool,
{
    TakeWhileParser::new(predicate, false)
}

/// One or more elements satisfying `predicate`
pub fn take_while1<F, T>(predicate: F) -> TakeWhileParser<F, T>
where
    F: Fn(T) -> bool,
{
    TakeWhileParser::new(predicate, true)
}

pub(crate) fn class0<T: Atomic>(class: fn(T) -> bool) -> ClassScanner<T> {
    take_while0(class)
}

pub(crate) fn class1<T: Atomic>(class: fn(T) -> bool) -> ClassScanner<T> {
    take_while1(class)
}

/// Zero or more ASCII letters
pub fn alpha0<T: Atomic>() -> ClassScanner<T> {
    class0(is_alpha)
}

/// One or more ASCII letters
pub fn alpha1<T: Atomic>() -> ClassScanner<T> {
    class1(is_alpha)
}

/// Zero or more ASCII letters or digits
pub fn alphanumeric0<T: Atomic>() -> ClassScanner<T> {
    class0(is_alphanumeric)
}

/// One or more ASCII letters or digits
pub fn alphanumeric1<T: Atomic>() -> ClassScanner<T> {
    class1(is_alphanumeric)
}
