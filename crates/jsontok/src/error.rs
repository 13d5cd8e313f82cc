use thiserror::Error;

/// Errors returned by [`Tokenizer::parse`] and [`Tokenizer::count`].
///
/// The token pool stays valid up to the tokens allocated so far, and the
/// tokenizer state is preserved: [`Partial`](Error::Partial) is resumable by
/// calling again with an extended buffer, while the other two require either
/// a larger pool or a [`reset`](Tokenizer::reset).
///
/// [`Tokenizer::parse`]: crate::Tokenizer::parse
/// [`Tokenizer::count`]: crate::Tokenizer::count
/// [`Tokenizer::reset`]: crate::Tokenizer::reset
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The token pool filled up mid-parse.
    #[error("not enough tokens were provided")]
    NoMemory,
    /// Ungrammatical input at the current position.
    #[error("invalid character inside JSON input")]
    Invalid,
    /// Input ended mid-element or with unclosed containers.
    #[error("input is not a full JSON document, more bytes expected")]
    Partial,
}
