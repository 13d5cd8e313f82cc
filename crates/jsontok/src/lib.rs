//! Minimal, allocation-free JSON tokenizer.
//!
//! A single forward pass over a byte buffer fills a caller-provided token
//! pool with descriptors that locate each JSON element by byte offsets,
//! together with parent/child structure. The tokenizer never allocates,
//! never copies input bytes, and never decodes: strings keep their escape
//! sequences, numbers stay text. It only delimits and classifies.
//!
//! ```
//! use jsontok::{Token, Tokenizer};
//!
//! let input = br#"[1,[2,3]]"#;
//! let mut tokens = [Token::default(); 8];
//! let mut tokenizer = Tokenizer::strict();
//!
//! assert_eq!(tokenizer.parse(input, &mut tokens), Ok(5));
//! assert!(tokens[0].is_array());
//! assert_eq!(tokens[0].size, 2);
//! assert_eq!(&input[tokens[3].span().unwrap()], b"2");
//! ```
//!
//! Truncated input is resumable: a parse returning
//! [`Error::Partial`] keeps its cursor state, so the same tokenizer can be
//! called again once the buffer has been extended with more bytes. Passing
//! no pool at all ([`Tokenizer::count`]) runs the grammar purely for sizing,
//! enabling a two-pass strategy without any allocation in this crate.
//!
//! Two dialects share the one code path: [`Dialect::Strict`] follows
//! RFC 8259, while [`Dialect::Permissive`] admits unquoted keys and values,
//! bare roots, multiple top-level values, and missing commas between
//! root-level key-value pairs.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod token;

pub use error::Error;
pub use options::Dialect;
pub use parser::Tokenizer;
pub use token::{Token, TokenIndex, TokenKind, NONE};

#[cfg(test)]
mod tests;
