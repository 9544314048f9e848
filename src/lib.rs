//! A small backtracking parser-combinator engine, and a student record grammar built on it.
//!
//! # Engine
//! A [`Parser<T>`](parser::Parser) is an immutable function from text to an
//! [`Outcome<T>`](outcome::Outcome). Parsers compose through sequencing
//! ([`Parser::bind`](parser::Parser::bind)), ordered choice with full backtracking
//! ([`option`](parser::option)) and repetition ([`parser::repeat`]); the character-level
//! building blocks live in [`lexer`].
//!
//! # Grammar
//! [`grammar::parse_record`] recognises one fixed record layout:
//!
//! ```
//! let record = gradec::grammar::parse_record(r#"{"name":guy,"id":12345,"grades":[100,90,80]}"#)
//!     .expect("well-formed record");
//! assert_eq!(record.to_string(), "name: guy id: 12345 grades: [100,90,80]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

extern crate static_assertions as sa;

pub mod cli;
pub mod compat;
pub mod grammar;
pub mod int;
pub mod lexer;
pub mod outcome;
pub mod parser;
pub mod record;

sa::assert_impl_all!(parser::Parser<char>: Send, Sync, Clone);
sa::assert_impl_all!(parser::Parser<record::Record>: Send, Sync, Clone);
sa::assert_impl_all!(record::Record<num_bigint::BigUint>: Send, Sync);
