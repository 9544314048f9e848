//! Interoperability with [`nom`].
//!
//! [`to_nom`] turns a [`Parser`] into an ordinary `nom` parser function, so it can be
//! dropped into `nom` combinators such as [`nom::multi::separated_list1`].
//! [`from_nom`] goes the other way, lifting a `nom` parser into a [`Parser`].
//!
//! This is for callers who already have a `nom` grammar and want to reuse a piece of
//! this crate inside it (for example the record grammar embedded in a larger `nom`
//! document format), or who want to use an existing `nom` parser, such as one of its
//! numeric or byte-level parsers, as a building block for a [`Parser`].
//!
//! `nom` failures carry a position and an [`ErrorKind`]; an [`Outcome::Failure`]
//! carries neither. Converting to `nom` reports [`ErrorKind::Fail`] at the input the
//! parser was given, and converting from `nom` discards the error entirely.

use nom::{
    error::{ErrorKind, ParseError},
    IResult,
};

use crate::{outcome::Outcome, parser::Parser};

/// Returns a `nom` parser that runs `parser`.
///
/// A failure is reported as a recoverable [`nom::Err::Error`], so `nom`'s own
/// backtracking combinators (e.g. [`nom::branch::alt`]) treat it as usual.
pub fn to_nom<'src, T, E>(parser: Parser<T>) -> impl FnMut(&'src str) -> IResult<&'src str, T, E>
where
    T: 'static,
    E: ParseError<&'src str>,
{
    move |input: &'src str| match parser.run(input) {
        Outcome::Success { value, rest } => Ok((rest, value)),
        Outcome::Failure => Err(nom::Err::Error(E::from_error_kind(input, ErrorKind::Fail))),
    }
}

/// Lifts a `nom` parser into a [`Parser`].
///
/// Any `nom` error, including [`nom::Err::Failure`] and [`nom::Err::Incomplete`],
/// becomes an [`Outcome::Failure`].
pub fn from_nom<T, F>(f: F) -> Parser<T>
where
    T: 'static,
    F: for<'src> Fn(&'src str) -> IResult<&'src str, T> + Send + Sync + 'static,
{
    Parser::new(move |input| match f(input) {
        Ok((rest, value)) => Outcome::success(value, rest),
        Err(_) => Outcome::Failure,
    })
}
