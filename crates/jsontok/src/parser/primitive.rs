//! Primitive sub-parser: delimits an unquoted run without interpreting it.

use crate::{
    error::Error,
    token::{Token, TokenKind, NONE},
};

use super::Tokenizer;

impl Tokenizer {
    /// Consumes an unquoted run starting at the current byte.
    ///
    /// The run ends at whitespace, a comma, a closing brace or bracket, or
    /// (permissive) a colon. No numeric or keyword validation happens here:
    /// `1.2.3`, `tru` and `01` all tokenize. Strict mode treats end of input
    /// inside the run as truncation and restores `pos` to the run start;
    /// permissive mode accepts the run as complete.
    pub(crate) fn parse_primitive(
        &mut self,
        input: &[u8],
        tokens: Option<&mut [Token]>,
    ) -> Result<(), Error> {
        if !self.expected.intersects(TokenKind::PRIMITIVE) {
            return Err(Error::Invalid);
        }
        self.mend_missing_comma(tokens.as_deref());

        let start = self.pos;
        let mut terminated = false;
        while let Some(&c) = input.get(self.pos as usize) {
            if c == 0 {
                break;
            }
            match c {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b']' | b'}' => {
                    terminated = true;
                    break;
                }
                b':' if self.dialect.is_permissive() => {
                    terminated = true;
                    break;
                }
                _ => {}
            }
            if c < 32 || c >= 127 {
                self.pos = start;
                return Err(Error::Invalid);
            }
            self.pos += 1;
        }
        if !terminated && !self.dialect.is_permissive() {
            self.pos = start;
            return Err(Error::Partial);
        }

        let Some(tokens) = tokens else {
            self.toknext += 1;
            self.expected = TokenKind::DELIMITER | TokenKind::CLOSE;
            if self.dialect.is_permissive() && self.depth <= 1 {
                self.expected |= TokenKind::ANY_TYPE;
            }
            self.pos -= 1;
            return Ok(());
        };
        let idx = match self.alloc_token(tokens) {
            Ok(idx) => idx,
            Err(err) => {
                self.pos = start;
                return Err(err);
            }
        };
        tokens[idx as usize].kind = TokenKind::PRIMITIVE;
        tokens[idx as usize].start = start;
        tokens[idx as usize].end = self.pos;
        if self.dialect.is_permissive() {
            if self.toksuper != NONE
                && tokens[self.toksuper as usize]
                    .kind
                    .intersects(TokenKind::KEY)
            {
                tokens[idx as usize].kind |= TokenKind::VALUE;
            }
        } else {
            tokens[idx as usize].kind |= TokenKind::VALUE;
        }

        self.expected = TokenKind::DELIMITER | TokenKind::CLOSE;
        if self.dialect.is_permissive() {
            self.rearm_top_level(tokens);
        }
        self.attach(tokens, idx);
        self.pos -= 1;
        Ok(())
    }

    /// After a permissive primitive, further whitespace-separated values stay
    /// legal at the top level and directly inside the root container (the
    /// missing-comma tolerance only reaches that far).
    fn rearm_top_level(&mut self, tokens: &[Token]) {
        if self.toksuper == NONE {
            self.expected |= TokenKind::ANY_TYPE;
            return;
        }
        #[cfg(feature = "parent-links")]
        {
            if tokens[self.toksuper as usize].parent == NONE {
                self.expected |= TokenKind::ANY_TYPE;
            }
        }
        #[cfg(not(feature = "parent-links"))]
        {
            let mut i = self.toksuper;
            loop {
                if tokens[i as usize].kind.intersects(TokenKind::CONTAINER) {
                    break;
                }
                if i == 0 {
                    self.expected |= TokenKind::ANY_TYPE;
                    break;
                }
                i -= 1;
            }
        }
    }
}
