//! String sub-parser: delimits a quoted string without unescaping it.

use crate::{
    error::Error,
    token::{Token, TokenKind},
};
#[cfg(feature = "parent-links")]
use crate::token::NONE;

use super::Tokenizer;

impl Tokenizer {
    /// Consumes a quoted string starting at the current `"` byte.
    ///
    /// The emitted payload spans the content between the quotes. Escape
    /// sequences are validated (`\" \\ \/ \b \f \n \r \t` and `\u` plus four
    /// hex digits) but never decoded. On any error `pos` is restored to the
    /// opening quote so the element can be re-scanned after more input
    /// arrives.
    pub(crate) fn parse_string(
        &mut self,
        input: &[u8],
        mut tokens: Option<&mut [Token]>,
    ) -> Result<(), Error> {
        if !self.expected.intersects(TokenKind::STRING) {
            return Err(Error::Invalid);
        }
        self.mend_missing_comma(tokens.as_deref());

        let start = self.pos;
        self.pos += 1;

        while let Some(&c) = input.get(self.pos as usize) {
            if c == 0 {
                break;
            }
            if c == b'"' {
                let Some(tokens) = tokens.as_deref_mut() else {
                    self.toknext += 1;
                    self.expected = self.expected_after_string_counting();
                    return Ok(());
                };
                let idx = match self.alloc_token(tokens) {
                    Ok(idx) => idx,
                    Err(err) => {
                        self.pos = start;
                        return Err(err);
                    }
                };
                tokens[idx as usize].kind = TokenKind::STRING;
                tokens[idx as usize].start = start + 1;
                tokens[idx as usize].end = self.pos;
                if self.dialect.is_permissive() {
                    // Key positions are only discovered at the `:`.
                    if self.toknext >= 2
                        && tokens[self.toknext as usize - 2]
                            .kind
                            .intersects(TokenKind::KEY)
                    {
                        tokens[idx as usize].kind |= TokenKind::VALUE;
                    }
                    self.expected =
                        TokenKind::ANY_TYPE | TokenKind::DELIMITER | TokenKind::CLOSE;
                } else if tokens[self.toksuper as usize]
                    .kind
                    .intersects(TokenKind::OBJECT)
                    && tokens[self.toknext as usize - 2]
                        .kind
                        .intersects(TokenKind::OBJECT | TokenKind::VALUE)
                {
                    tokens[idx as usize].kind |= TokenKind::KEY;
                    self.expected = TokenKind::DELIMITER;
                } else {
                    tokens[idx as usize].kind |= TokenKind::VALUE;
                    self.expected = TokenKind::DELIMITER | TokenKind::CLOSE;
                }
                self.attach(tokens, idx);
                return Ok(());
            }
            if c == b'\\' && (self.pos as usize) + 1 < input.len() {
                self.pos += 1;
                match input[self.pos as usize] {
                    b'"' | b'/' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't' => {}
                    b'u' => {
                        self.pos += 1;
                        let mut digits = 0;
                        while digits < 4 {
                            let Some(&h) = input.get(self.pos as usize) else {
                                break;
                            };
                            if h == 0 {
                                break;
                            }
                            if !h.is_ascii_hexdigit() {
                                self.pos = start;
                                return Err(Error::Invalid);
                            }
                            self.pos += 1;
                            digits += 1;
                        }
                        self.pos -= 1;
                    }
                    _ => {
                        self.pos = start;
                        return Err(Error::Invalid);
                    }
                }
            }
            self.pos += 1;
        }
        self.pos = start;
        Err(Error::Partial)
    }

    /// Expected-set transition for a completed string when no pool is
    /// present. In strict mode a key position is recognizable from the
    /// expected set alone: it is the only string position whose expected set
    /// excludes primitives.
    fn expected_after_string_counting(&self) -> TokenKind {
        if self.dialect.is_permissive() {
            TokenKind::ANY_TYPE | TokenKind::DELIMITER | TokenKind::CLOSE
        } else if !self.expected.intersects(TokenKind::PRIMITIVE) {
            TokenKind::DELIMITER
        } else {
            TokenKind::DELIMITER | TokenKind::CLOSE
        }
    }

    /// Permissive repair for a missing comma between a key-value pair and the
    /// element that follows: `toksuper` still points at the key, so step it
    /// back to the key's container. Only fires when the last two tokens form
    /// a KEY/VALUE pair; with nested values the heuristic stays quiet and the
    /// input is rejected downstream.
    #[cfg(feature = "parent-links")]
    pub(crate) fn mend_missing_comma(&mut self, tokens: Option<&[Token]>) {
        if !self.dialect.is_permissive() {
            return;
        }
        let Some(tokens) = tokens else { return };
        if self.toksuper != NONE
            && self.toknext >= 2
            && self.expected.intersects(TokenKind::DELIMITER)
            && tokens[self.toknext as usize - 2]
                .kind
                .intersects(TokenKind::KEY)
        {
            self.toksuper = tokens[self.toksuper as usize].parent;
        }
    }

    /// Without parent links the missing-comma repair has no cheap way back to
    /// the enclosing container; the relaxed dialect simply rejects such
    /// input.
    #[cfg(not(feature = "parent-links"))]
    pub(crate) fn mend_missing_comma(&mut self, _tokens: Option<&[Token]>) {}
}
