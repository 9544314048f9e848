//! The student record grammar.
//!
//! # Grammar
//! The format is a deliberately tiny, fixed subset of JSON-like syntax: keys are
//! quoted, values are not, the fields always appear in the same order, and the only
//! whitespace allowed is before the opening brace.
//!
//! ```raw
//! record ::= space '{' name ',' id ',' grades '}'
//!
//! name   ::= '"name"'   ':' letter+
//! id     ::= '"id"'     ':' digit+
//! grades ::= '"grades"' ':' '[' digit+ (',' digit+)* ']'
//! ```
//!
//! Any deviation fails the whole parse; there is no partial result.
//!
//! # Trailing input
//! [`record`] and [`parse_record`] stop at the closing brace and ignore whatever
//! follows it. The [`FromStr`](std::str::FromStr) implementation on [`Record`]
//! rejects trailing non-whitespace instead.

use tracing::trace;

use crate::{
    int::Natural,
    lexer::{char, letter, number, quoted_string, space},
    outcome::Outcome,
    parser::{
        failure,
        repeat::{list1, repeated1},
        Parser,
    },
    record::Record,
};

/// Parses the quoted key `expected` and the colon that follows it.
pub fn field_key(expected: &'static str) -> Parser<()> {
    quoted_string().bind(move |key| {
        if key == expected {
            char(':').map(|_| ())
        } else {
            failure()
        }
    })
}

/// Parses the `"name":<letters>` field.
pub fn name_field() -> Parser<String> {
    field_key("name")
        .then(repeated1(letter()))
        .map(|letters| letters.into_iter().collect())
}

/// Parses the `"id":<digits>` field.
pub fn id_field<N: Natural>() -> Parser<N> {
    field_key("id").then(number())
}

/// Parses the `"grades":[<digits>,...]` field.
pub fn grades_field<N: Natural>() -> Parser<Vec<N>> {
    field_key("grades")
        .then(char('['))
        .then(list1(number(), char(','), char(']')))
}

/// Parses a complete [`Record`], tolerating leading whitespace.
pub fn record<N: Natural>() -> Parser<Record<N>> {
    space()
        .then(char('{'))
        .then(name_field())
        .bind(|name| {
            char(',').then(id_field::<N>()).bind(move |id| {
                let name = name.clone();
                char(',').then(grades_field::<N>()).bind(move |grades| {
                    let record = Record::new(name.clone(), id.clone(), grades);
                    char('}').map(move |_| record.clone())
                })
            })
        })
}

/// Parses a [`Record`] with `u64` id and grades from the start of `input`.
pub fn parse_record(input: &str) -> Option<Record> {
    parse_record_as(input)
}

/// Parses a [`Record`] with id and grades of type `N` from the start of `input`.
pub fn parse_record_as<N: Natural>(input: &str) -> Option<Record<N>> {
    trace!(len = input.len(), "parsing record");
    match record::<N>().run(input) {
        Outcome::Success { value, rest } => {
            trace!(trailing = rest.len(), grades = value.grades().len(), "parsed record");
            Some(value)
        }
        Outcome::Failure => None,
    }
}
