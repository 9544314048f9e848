//! Repetition combinators.
//!
//! # Recursive and iterative forms
//! [`some`] and [`many`] are defined in terms of each other, exactly as their
//! textbook definitions read:
//!
//! ```raw
//! some p = p >>= \x -> many p >>= \xs -> unit (x : xs)
//! many p = some p <|> unit []
//! ```
//!
//! This costs a handful of stack frames per matched element, so it is only safe
//! for repeats with a small, fixed upper bound. Everything in this crate that reads
//! input-controlled runs (keys, names, numbers, whitespace, lists) uses [`repeated`],
//! [`repeated1`] or [`list1`] instead, which produce the same results with an
//! explicit loop and constant stack usage.

use crate::outcome::Outcome;

use super::{option, unit, Parser};

/// Parses `parser` one or more times, failing iff the first application fails.
///
/// Each level of recursion builds a fresh `many` parser and copies the tail into a new
/// `Vec`, so a run of `k` elements costs `O(k)` stack frames and `O(k²)` copying.
/// Prefer [`repeated1`] for anything but short fixed-size repeats.
pub fn some<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    parser.clone().bind(move |first| {
        many(parser.clone()).bind(move |rest| {
            let mut values = Vec::with_capacity(rest.len() + 1);
            values.push(first.clone());
            values.extend(rest);
            unit(values)
        })
    })
}

/// Parses `parser` zero or more times. Never fails.
///
/// Shares the costs of [`some`]; prefer [`repeated`] for anything but short repeats.
pub fn many<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    option(some(parser), unit(Vec::new()))
}

/// The iterative equivalent of [`many`].
///
/// An application of `parser` that succeeds without consuming input ends the
/// repetition, and its value is not collected.
pub fn repeated<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let mut values = Vec::new();
        let mut rest = input;

        while let Outcome::Success { value, rest: next } = parser.run(rest) {
            if next.len() == rest.len() {
                break;
            }

            values.push(value);
            rest = next;
        }

        Outcome::success(values, rest)
    })
}

/// The iterative equivalent of [`some`].
pub fn repeated1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let tail = repeated(parser.clone());
    Parser::new(move |input| {
        let Outcome::Success { value, rest } = parser.run(input) else {
            return Outcome::Failure;
        };

        tail.run(rest).map(|mut values| {
            values.insert(0, value);
            values
        })
    })
}

/// Parses a non-empty list: one `element`, then any number of `delimiter`-`element`
/// pairs, closed by `terminator`.
///
/// At each step the delimiter is tried first; if it matches, an element must follow.
/// Otherwise the terminator must match. Any other input fails the whole list, and
/// as with every failure nothing of the partial progress is visible to the caller.
///
/// Runs in a loop, so stack usage does not depend on the length of the list.
pub fn list1<T, D, E>(
    element: Parser<T>,
    delimiter: Parser<D>,
    terminator: Parser<E>,
) -> Parser<Vec<T>>
where
    T: 'static,
    D: 'static,
    E: 'static,
{
    Parser::new(move |input| {
        let Outcome::Success { value, mut rest } = element.run(input) else {
            return Outcome::Failure;
        };
        let mut values = vec![value];

        loop {
            if let Some(after_delimiter) = delimiter.run(rest).rest() {
                match element.run(after_delimiter) {
                    // a round that consumes nothing would never terminate
                    Outcome::Success { rest: next, .. } if next.len() == rest.len() => {
                        return Outcome::Failure;
                    }
                    Outcome::Success { value, rest: next } => {
                        values.push(value);
                        rest = next;
                    }
                    Outcome::Failure => return Outcome::Failure,
                }
            } else if let Some(after_terminator) = terminator.run(rest).rest() {
                return Outcome::success(values, after_terminator);
            } else {
                return Outcome::Failure;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::{char, digit, number},
        parser::{failure, item, satisfy},
    };

    use super::*;

    #[test]
    fn many_never_fails() {
        let p = many(digit());
        assert_eq!(p.run("123ab"), Outcome::success(vec!['1', '2', '3'], "ab"));
        assert_eq!(p.run("ab"), Outcome::success(vec![], "ab"));
        assert_eq!(p.run(""), Outcome::success(vec![], ""));
        assert_eq!(many(failure::<char>()).run("x"), Outcome::success(vec![], "x"));
    }

    #[test]
    fn some_fails_iff_first_application_fails() {
        let p = some(digit());
        assert_eq!(p.run("9"), Outcome::success(vec!['9'], ""));
        assert_eq!(p.run("42!"), Outcome::success(vec!['4', '2'], "!"));
        assert!(p.run("x42").is_failure());
        assert!(p.run("").is_failure());
    }

    #[test]
    fn iterative_forms_agree_with_recursive_forms() {
        let inputs = ["", "a", "abc", "abc1", "1abc", "ab cd", "zzzzzzzzzzzz?"];
        let letter = satisfy(|c| c.is_alphabetic());

        for input in inputs {
            dbg!(input);
            assert_eq!(repeated(letter.clone()).run(input), many(letter.clone()).run(input));
            assert_eq!(repeated1(letter.clone()).run(input), some(letter.clone()).run(input));
        }
    }

    #[test]
    fn repeated_stops_on_non_consuming_success() {
        let p = repeated(unit('x'));
        assert_eq!(p.run("abc"), Outcome::success(vec![], "abc"));
    }

    #[test]
    fn repeated_handles_long_inputs() {
        let input = " ".repeat(200_000);
        let (spaces, rest) = repeated(satisfy(|c| c.is_whitespace()))
            .run(&input)
            .into_parts()
            .unwrap();
        assert_eq!(spaces.len(), 200_000);
        assert!(rest.is_empty());
    }

    #[test]
    fn list1_parses_elements_in_order() {
        let p = list1(number::<u32>(), char(','), char(']'));
        assert_eq!(
            p.run("100,90,80]tail"),
            Outcome::success(vec![100, 90, 80], "tail")
        );
        assert_eq!(p.run("7]"), Outcome::success(vec![7], ""));
    }

    #[test]
    fn list1_rejects_malformed_lists() {
        let p = list1(number::<u32>(), char(','), char(']'));
        for input in ["]", "", "1,]", "1,2", "1;2]", "1,,2]", ",1]", "1 ,2]"] {
            dbg!(input);
            assert!(p.run(input).is_failure());
        }
    }

    #[test]
    fn list1_handles_a_thousand_elements() {
        let mut input = vec!["1"; 1000].join(",");
        input.push(']');

        let p = list1(number::<u32>(), char(','), char(']'));
        let (values, rest) = p.run(&input).into_parts().unwrap();

        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| v == 1));
        assert!(rest.is_empty());
    }

    #[test]
    fn list1_stack_usage_is_independent_of_length() {
        let mut input = (0..100_000)
            .map(|i: usize| (i % 10).to_string())
            .collect::<Vec<_>>()
            .join(",");
        input.push(']');

        let p = list1(number::<u8>(), char(','), char(']'));
        let values = p.run(&input).into_value().unwrap();

        assert_eq!(values.len(), 100_000);
        assert!(values.iter().enumerate().all(|(i, &v)| v as usize == i % 10));
    }

    #[test]
    fn list1_fails_on_non_consuming_rounds() {
        let p = list1(unit(0u8), unit(()), char(']'));
        assert!(p.run("]").is_failure());
    }

    #[test]
    fn list1_tries_delimiter_before_terminator() {
        // ']' is both a valid element and the terminator here
        let p = list1(item(), char(','), char(']'));
        assert_eq!(p.run("a,]]"), Outcome::success(vec!['a', ']'], ""));
        assert_eq!(p.run("a]"), Outcome::success(vec!['a'], ""));
    }
}
