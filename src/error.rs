use thiserror::Error;

/// The single failure a parser can report
///
/// Carries no position, cause or partial-consumption information. A caller
/// that receives it must assume nothing about how much input was examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("no match")]
pub struct NoMatch;
