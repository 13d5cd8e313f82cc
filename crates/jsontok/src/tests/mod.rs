mod counting;
mod resume;

use std::{vec, vec::Vec};

use crate::{Error, Token, Tokenizer};

/// Tokenizes `input` with a pool that is always large enough (a token spans
/// at least one input byte) and returns the emitted tokens.
pub(crate) fn tokenize(mut tokenizer: Tokenizer, input: &[u8]) -> Result<Vec<Token>, Error> {
    let mut pool = vec![Token::default(); input.len() + 1];
    let parsed = tokenizer.parse(input, &mut pool)?;
    pool.truncate(parsed);
    Ok(pool)
}

pub(crate) fn tokenize_strict(input: &[u8]) -> Result<Vec<Token>, Error> {
    tokenize(Tokenizer::strict(), input)
}

pub(crate) fn tokenize_permissive(input: &[u8]) -> Result<Vec<Token>, Error> {
    tokenize(Tokenizer::permissive(), input)
}
