//! The result envelope produced by running a [`Parser`](crate::parser::Parser).
//!
//! # Failure carries no position
//! A failed parse attempt says nothing about how far it got. Any combinator that
//! wants to try something else after a failure must replay the input it was given
//! itself, rather than continuing from wherever the failed branch stopped. An
//! [`Outcome::Failure`] has no remaining input to read.

/// The outcome of running a parser on some input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<'src, T> {
    /// The parser matched a prefix of the input.
    Success {
        /// The value produced by the parser.
        value: T,
        /// The unconsumed suffix of the input.
        rest: &'src str,
    },
    /// The parser did not match.
    Failure,
}

impl<'src, T> Outcome<'src, T> {
    /// Constructs an [`Outcome::Success`].
    #[inline(always)]
    pub fn success(value: T, rest: &'src str) -> Self {
        Self::Success { value, rest }
    }

    /// Returns `true` if `self` is an [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` if `self` is an [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Returns a reference to the parsed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure => None,
        }
    }

    /// Returns the unconsumed input of a successful parse.
    pub fn rest(&self) -> Option<&'src str> {
        match self {
            Self::Success { rest, .. } => Some(rest),
            Self::Failure => None,
        }
    }

    /// Consumes `self` and returns the parsed value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure => None,
        }
    }

    /// Consumes `self` and returns the value together with the unconsumed input.
    pub fn into_parts(self) -> Option<(T, &'src str)> {
        match self {
            Self::Success { value, rest } => Some((value, rest)),
            Self::Failure => None,
        }
    }

    /// Applies `f` to the value of a successful outcome, leaving the remaining input untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<'src, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { value, rest } => Outcome::Success {
                value: f(value),
                rest,
            },
            Self::Failure => Outcome::Failure,
        }
    }
}

impl<'src, T> From<Outcome<'src, T>> for Option<(T, &'src str)> {
    fn from(value: Outcome<'src, T>) -> Self {
        value.into_parts()
    }
}
