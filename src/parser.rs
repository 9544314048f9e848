//! The core [`Parser`] abstraction and its primitive combinators.
//!
//! # Model
//! A [`Parser<T>`] is an immutable, shareable function from input text to an
//! [`Outcome<T>`]. Parsers are built once by composing smaller parsers and can then be
//! run any number of times, from any number of threads, on any input.
//!
//! Everything in this crate is ultimately built from four primitives ([`unit`],
//! [`failure`], [`item`] and [`satisfy`]) and two combinators:
//! - [`Parser::bind`], which sequences two parsers, choosing the second from the
//!   value of the first;
//! - [`option`], which tries one parser and, if it fails, tries another on the
//!   *same* input.
//!
//! [`option`] is the only way to recover from a failure, and it always replays the
//! input it was given rather than resuming wherever the failed branch stopped.

use std::sync::Arc;

use crate::outcome::Outcome;

pub mod repeat;

/// The type-erased function at the heart of every [`Parser`].
type ParseFn<T> = dyn for<'src> Fn(&'src str) -> Outcome<'src, T> + Send + Sync;

/// A parser producing values of type `T`.
///
/// Cloning a parser is cheap (it only bumps a reference count), and running it has
/// no side effects: running the same parser twice on the same input always yields
/// the same [`Outcome`].
pub struct Parser<T> {
    /// The underlying parsing function.
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing function as a [`Parser`].
    pub fn new<F>(f: F) -> Self
    where
        F: for<'src> Fn(&'src str) -> Outcome<'src, T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Runs `self` on `input`.
    #[inline(always)]
    pub fn run<'src>(&self, input: &'src str) -> Outcome<'src, T> {
        (self.run)(input)
    }

    /// Sequences `self` with the parser produced by `binder`.
    ///
    /// If `self` fails the failure is propagated and `binder` is never invoked.
    /// Otherwise `binder` is applied to the parsed value and the resulting parser
    /// is run on the input `self` left behind.
    pub fn bind<U, F>(self, binder: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        Parser::new(move |input| match self.run(input) {
            Outcome::Success { value, rest } => binder(value).run(rest),
            Outcome::Failure => Outcome::Failure,
        })
    }

    /// Transforms the value produced by `self`.
    ///
    /// Equivalent to `self.bind(|v| unit(f(v)))`, without requiring `U: Clone`.
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Parser::new(move |input| self.run(input).map(&f))
    }

    /// Runs `self`, discards its value, then runs `next`.
    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        self.bind(move |_| next.clone())
    }

    /// Runs `self`, then `next`, keeping the value of `self`.
    pub fn skip<U: 'static>(self, next: Parser<U>) -> Parser<T>
    where
        T: Clone + Send + Sync,
    {
        self.bind(move |value| next.clone().map(move |_| value.clone()))
    }

    /// Method form of [`option`].
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        option(self, other)
    }
}

/// Returns a parser that always succeeds with `value`, consuming nothing.
pub fn unit<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| Outcome::success(value.clone(), input))
}

/// Returns a parser that always fails.
pub fn failure<T: 'static>() -> Parser<T> {
    Parser::new(|_| Outcome::Failure)
}

/// Returns a parser that consumes and yields the first character of its input,
/// failing on empty input.
pub fn item() -> Parser<char> {
    Parser::new(|input| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Outcome::success(c, chars.as_str()),
            None => Outcome::Failure,
        }
    })
}

/// Returns a parser that consumes one character if it satisfies `predicate`.
pub fn satisfy<P>(predicate: P) -> Parser<char>
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    item().bind(move |c| if predicate(c) { unit(c) } else { failure() })
}

/// Ordered choice: runs `first`, and if it fails runs `second` on the same input.
///
/// There is no commit operator, so a failed `first` leaves no trace and the
/// alternatives may overlap arbitrarily.
pub fn option<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    Parser::new(move |input| match first.run(input) {
        success @ Outcome::Success { .. } => success,
        Outcome::Failure => second.run(input),
    })
}
