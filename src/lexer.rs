//! Character-level parsers built on the [`crate::parser`] primitives.
//!
//! Every parser here consumes characters directly from the input text; there is no
//! separate tokenisation pass.

use crate::{
    int::{from_digits, Natural},
    parser::{
        failure,
        repeat::{repeated, repeated1},
        satisfy, unit, Parser,
    },
};

/// Parses exactly the character `c`.
pub fn char(c: char) -> Parser<char> {
    satisfy(move |x| x == c)
}

/// Parses an ASCII decimal digit.
pub fn digit() -> Parser<char> {
    satisfy(|c| c.is_ascii_digit())
}

/// Parses an alphabetic character.
pub fn letter() -> Parser<char> {
    satisfy(|c| c.is_alphabetic())
}

/// Parses a lowercase letter.
pub fn lower() -> Parser<char> {
    satisfy(|c| c.is_lowercase())
}

/// Parses an uppercase letter.
pub fn upper() -> Parser<char> {
    satisfy(|c| c.is_uppercase())
}

/// Parses an alphabetic character or an ASCII decimal digit.
pub fn alpha_num() -> Parser<char> {
    satisfy(|c| c.is_alphabetic() || c.is_ascii_digit())
}

/// Parses a single whitespace character.
pub fn whitespace() -> Parser<char> {
    satisfy(|c| c.is_whitespace())
}

/// Parses a double-quoted run of one or more alphanumeric characters, yielding the
/// characters between the quotes.
///
/// There are no escapes; this only recognises simple keys such as `"name"`.
pub fn quoted_string() -> Parser<String> {
    char('"').then(repeated1(alpha_num())).bind(|chars| {
        let text: String = chars.into_iter().collect();
        char('"').map(move |_| text.clone())
    })
}

/// Skips any amount of whitespace, including none.
pub fn space() -> Parser<()> {
    repeated(whitespace()).map(|_| ())
}

/// Runs `parser`, skipping optional whitespace on either side of it.
pub fn token<T>(parser: Parser<T>) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    space().then(parser).skip(space())
}

/// Parses one or more digits as an unsigned decimal number.
///
/// Fails if the value does not fit in `N`.
pub fn number<N: Natural>() -> Parser<N> {
    repeated1(digit()).bind(|digits| match from_digits::<N>(&digits) {
        Some(value) => unit(value),
        None => failure(),
    })
}
