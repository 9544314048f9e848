//! The student [`Record`] recognised by [`crate::grammar`].

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::{grammar::record, int::Natural, outcome::Outcome};

/// The error type returned when parsing a [`Record`] via [`FromStr`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RecordError {
    /// The input does not begin with a well-formed record.
    #[error("input is not a well-formed record")]
    Malformed,
    /// A record was recognised, but non-whitespace input follows it.
    #[error("unexpected trailing input at byte offset {offset}")]
    TrailingInput {
        /// The byte offset of the first trailing character.
        offset: usize,
    },
}

/// A student record: a name, a numeric id and a non-empty list of grades.
///
/// Records only come out of the grammar, which builds them after every field and
/// every piece of punctuation has been recognised; a partially-parsed record is
/// never observable.
///
/// The [`Display`] implementation renders records as
/// `name: <name> id: <id> grades: [<g1>,<g2>,...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record<N = u64> {
    /// The student's name.
    name: String,
    /// The student's id.
    id: N,
    /// The student's grades, in input order.
    grades: Vec<N>,
}

impl<N> Record<N> {
    /// Assembles a record from already-parsed fields.
    pub(crate) fn new(name: String, id: N, grades: Vec<N>) -> Self {
        debug_assert!(!grades.is_empty());
        Self { name, id, grades }
    }

    /// Returns the student's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's id.
    pub fn id(&self) -> &N {
        &self.id
    }

    /// Returns the student's grades.
    pub fn grades(&self) -> &[N] {
        &self.grades
    }
}

impl<N: Display> Display for Record<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "name: {} id: {} grades: [", self.name, self.id)?;
        for (i, grade) in self.grades.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{grade}")?;
        }
        write!(f, "]")
    }
}

/// Parses a record that must make up the whole of `s`, up to trailing whitespace.
///
/// Use [`crate::grammar::parse_record`] to accept arbitrary input after the
/// closing brace.
impl<N: Natural> FromStr for Record<N> {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match record::<N>().run(s) {
            Outcome::Success { value, rest } if rest.trim_start().is_empty() => Ok(value),
            Outcome::Success { rest, .. } => Err(RecordError::TrailingInput {
                offset: s.len() - rest.trim_start().len(),
            }),
            Outcome::Failure => Err(RecordError::Malformed),
        }
    }
}
