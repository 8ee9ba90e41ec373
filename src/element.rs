use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::View;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that consumes and returns a single element
pub struct AnyParser<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> AnyParser<T> {
    pub fn new() -> Self {
        AnyParser {
            _element: PhantomData,
        }
    }
}

impl<T> Default for AnyParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for AnyParser<T> {
    type Cursor = View<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        let element = cursor.first().ok_or(NoMatch)?;
        Ok((element, cursor.drop(1)))
    }
}

/// Convenience function to create an AnyParser
pub fn anychar<T>() -> AnyParser<T> {
    AnyParser::new()
}

/// Parser that matches a specific element
pub struct ChParser<T> {
    expected: T,
}

impl<T> ChParser<T> {
    pub fn new(expected: T) -> Self {
        ChParser { expected }
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for ChParser<T> {
    type Cursor = View<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        match cursor.first() {
            Some(element) if element == self.expected => Ok((element, cursor.drop(1))),
            _ => Err(NoMatch),
        }
    }
}

/// Convenience function to create a ChParser
pub fn ch<T>(expected: T) -> ChParser<T> {
    ChParser::new(expected)
}

/// Parser that matches a single element accepted by a predicate
pub struct SatisfyParser<F, T> {
    predicate: F,
    _element: PhantomData<fn(T) -> bool>,
}

impl<F, T> SatisfyParser<F, T>
where
    F: Fn(T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        SatisfyParser {
            predicate,
            _element: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for SatisfyParser<F, T>
where
    F: Fn(T) -> bool,
    T: Atomic + 'code,
{
    type Cursor = View<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        match cursor.first() {
            Some(element) if (self.predicate)(element) => Ok((element, cursor.drop(1))),
            _ => Err(NoMatch),
        }
    }
}

/// Convenience function to create a SatisfyParser
pub fn satisfy<F, T>(predicate: F) -> SatisfyParser<F, T>
where
    F: Fn(T) -> bool,
{
    SatisfyParser::new(predicate)
}

/// Parser that matches one element by membership in a set
///
/// With `members == true` the element must be in the set (`one_of`),
/// otherwise it must not be (`none_of`).
pub struct SetParser<S, T> {
    set: S,
    members: bool,
    _element: PhantomData<fn(T) -> bool>,
}

impl<S, T> SetParser<S, T>
where
    S: AsRef<[T]>,
{
    pub fn new(set: S, members: bool) -> Self {
        SetParser {
            set,
            members,
            _element: PhantomData,
        }
    }
}

impl<'code, S, T> Parser<'code> for SetParser<S, T>
where
    S: AsRef<[T]>,
    T: Atomic + 'code,
{
    type Cursor = View<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), NoMatch> {
        match cursor.first() {
            Some(element) if self.set.as_ref().contains(&element) == self.members => {
                Ok((element, cursor.drop(1)))
            }
            _ => Err(NoMatch),
        }
    }
}

/// Matches one element that appears in `set`
pub fn one_of<S, T>(set: S) -> SetParser<S, T>
where
    S: AsRef<[T]>,
{
    SetParser::new(set, true)
}

/// Matches one element that does not appear in `set`
pub fn none_of<S, T>(set: S) -> SetParser<S, T>
where
    S: AsRef<[T]>,
{
    SetParser::new(set, false)
}
