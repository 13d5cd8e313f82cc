//! The tokenizer state machine.
//!
//! A single forward pass over the input dispatches on each byte: structural
//! characters are handled here, strings and primitives by the sub-parsers in
//! the sibling modules. The caller's token pool is the only storage: it
//! doubles as the container stack, either through per-token parent links or
//! by rescanning the pool for the nearest still-open container.

mod primitive;
mod string;

use crate::{
    error::Error,
    options::Dialect,
    token::{Token, TokenIndex, TokenKind, NONE},
};

/// Allocation-free JSON tokenizer.
///
/// The tokenizer owns nothing but its cursor state, so it is cheap to
/// create and trivial to resume: a [`parse`](Self::parse) that returns
/// [`Error::Partial`] can be called again with the same buffer extended by
/// more bytes and will pick up where it stopped.
///
/// ```
/// use jsontok::{Token, Tokenizer};
///
/// let input = br#"{"a":10,"b":true}"#;
/// let mut tokens = [Token::default(); 8];
/// let mut tokenizer = Tokenizer::strict();
/// let parsed = tokenizer.parse(input, &mut tokens).unwrap();
///
/// assert_eq!(parsed, 5);
/// assert_eq!(&input[tokens[1].span().unwrap()], b"a");
/// assert_eq!(&input[tokens[4].span().unwrap()], b"true");
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    dialect: Dialect,
    /// Byte offset of the next unconsumed input byte.
    pos: u32,
    /// Next unused slot in the token pool.
    toknext: u32,
    /// Token currently accumulating children: an open container, or the key
    /// a `:` promoted, or `NONE` outside the root.
    toksuper: TokenIndex,
    /// Token kinds grammatically legal at the current byte.
    expected: TokenKind,
    /// Open-container count; stands in for the pool in counting mode.
    depth: u32,
}

impl Tokenizer {
    /// Creates a tokenizer for the given dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            pos: 0,
            toknext: 0,
            toksuper: NONE,
            expected: dialect.initial_expected(),
            depth: 0,
        }
    }

    /// Creates an RFC 8259 tokenizer.
    #[must_use]
    pub fn strict() -> Self {
        Self::new(Dialect::Strict)
    }

    /// Creates a tokenizer for the relaxed dialect.
    #[must_use]
    pub fn permissive() -> Self {
        Self::new(Dialect::Permissive)
    }

    /// Rewinds to the initial state, keeping the dialect.
    pub fn reset(&mut self) {
        *self = Self::new(self.dialect);
    }

    /// The dialect this tokenizer accepts.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Byte offset of the next unconsumed input byte.
    ///
    /// After an error this is the offending structural byte or the start of
    /// the in-progress element, so it doubles as an error position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos as usize
    }

    /// Number of pool slots consumed so far, across all calls since the last
    /// [`reset`](Self::reset).
    #[must_use]
    pub fn tokens_parsed(&self) -> usize {
        self.toknext as usize
    }

    /// Tokenizes `input` into `tokens`.
    ///
    /// Returns the total number of tokens emitted since the last
    /// [`reset`](Self::reset), so a resumed parse reports the cumulative
    /// count. On error the pool remains valid up to
    /// [`tokens_parsed`](Self::tokens_parsed) and the cursor state is
    /// preserved: extend the buffer and call again after
    /// [`Error::Partial`], or supply a larger pool after
    /// [`Error::NoMemory`].
    ///
    /// A NUL byte terminates scanning even when `input` extends past it.
    ///
    /// # Errors
    ///
    /// [`Error::NoMemory`] when the pool fills up, [`Error::Invalid`] on
    /// ungrammatical input, [`Error::Partial`] when the input ends
    /// mid-element or with unclosed containers.
    ///
    /// # Panics
    ///
    /// May panic if a resumed call passes a smaller pool than the call that
    /// allocated the existing tokens.
    pub fn parse(&mut self, input: &[u8], tokens: &mut [Token]) -> Result<usize, Error> {
        self.run(input, Some(tokens))
    }

    /// Runs the grammar over `input` without writing tokens and returns the
    /// would-be token count.
    ///
    /// This is the sizing half of a two-pass strategy: `count` a document,
    /// allocate that many slots, [`reset`](Self::reset), then
    /// [`parse`](Self::parse). Truncation and lexical errors are still
    /// reported; the structural checks that need the pool's recorded token
    /// kinds (brace/bracket pairing, strict key typing after a comma) are
    /// necessarily looser here.
    ///
    /// # Errors
    ///
    /// [`Error::Invalid`] and [`Error::Partial`] as for
    /// [`parse`](Self::parse); never [`Error::NoMemory`].
    pub fn count(&mut self, input: &[u8]) -> Result<usize, Error> {
        self.run(input, None)
    }

    fn run(&mut self, input: &[u8], mut tokens: Option<&mut [Token]>) -> Result<usize, Error> {
        debug_assert!(input.len() < NONE as usize, "input exceeds addressable range");
        let mut count = self.toknext;

        while let Some(&c) = input.get(self.pos as usize) {
            if c == 0 {
                break;
            }
            match c {
                b'{' | b'[' => {
                    let kind = if c == b'{' {
                        TokenKind::OBJECT
                    } else {
                        TokenKind::ARRAY
                    };
                    if !self.expected.intersects(kind) {
                        return Err(Error::Invalid);
                    }
                    if let Some(tokens) = tokens.as_deref_mut() {
                        let idx = self.alloc_token(tokens)?;
                        tokens[idx as usize].kind = kind | TokenKind::VALUE;
                        tokens[idx as usize].start = self.pos;
                        self.attach(tokens, idx);
                        self.toksuper = idx;
                    } else {
                        self.toknext += 1;
                    }
                    self.depth += 1;
                    count += 1;
                    self.expected = if kind == TokenKind::OBJECT && !self.dialect.is_permissive() {
                        TokenKind::STRING | TokenKind::CLOSE
                    } else {
                        TokenKind::ANY_TYPE | TokenKind::CLOSE
                    };
                }
                b'}' | b']' => {
                    if !self.expected.intersects(TokenKind::CLOSE) {
                        return Err(Error::Invalid);
                    }
                    let kind = if c == b'}' {
                        TokenKind::OBJECT
                    } else {
                        TokenKind::ARRAY
                    };
                    match tokens.as_deref_mut() {
                        Some(tokens) => self.close_container(tokens, kind)?,
                        None => {
                            if self.depth == 0 {
                                return Err(Error::Invalid);
                            }
                        }
                    }
                    self.depth = self.depth.saturating_sub(1);
                    let at_root = match tokens.as_deref() {
                        Some(_) => self.toksuper == NONE,
                        None => self.depth == 0,
                    };
                    if at_root {
                        if self.dialect.is_permissive() {
                            if let Some(tokens) = tokens.as_deref_mut() {
                                tokens[self.toknext as usize - 1].kind |= TokenKind::VALUE;
                            }
                            self.expected = TokenKind::ANY_TYPE;
                        } else {
                            // Terminal success: nothing more is legal after
                            // the strict root closes.
                            self.expected = TokenKind::UNDEFINED;
                        }
                    } else {
                        self.expected = TokenKind::DELIMITER | TokenKind::CLOSE;
                    }
                }
                b'"' => {
                    self.parse_string(input, tokens.as_deref_mut())?;
                    count += 1;
                }
                b' ' | b'\t' | b'\n' | b'\r' => {}
                b':' => {
                    if !self.expected.intersects(TokenKind::DELIMITER) {
                        return Err(Error::Invalid);
                    }
                    if let Some(tokens) = tokens.as_deref_mut() {
                        let prev = self.toknext as usize - 1;
                        if self.dialect.is_permissive() {
                            tokens[prev].kind |= TokenKind::KEY;
                        } else if self.toksuper == NONE
                            || !tokens[prev].kind.intersects(TokenKind::KEY)
                        {
                            return Err(Error::Invalid);
                        }
                        // The upcoming value is attributed through the key.
                        self.toksuper = self.toknext - 1;
                    }
                    self.expected = TokenKind::ANY_TYPE;
                }
                b',' => {
                    if !self.expected.intersects(TokenKind::DELIMITER) {
                        return Err(Error::Invalid);
                    }
                    match tokens.as_deref_mut() {
                        Some(tokens) => {
                            let prev = self.toknext as usize - 1;
                            if self.dialect.is_permissive() {
                                tokens[prev].kind |= TokenKind::VALUE;
                            } else if tokens[prev].kind.intersects(TokenKind::KEY) {
                                return Err(Error::Invalid);
                            }
                            if self.toksuper != NONE
                                && !tokens[self.toksuper as usize]
                                    .kind
                                    .intersects(TokenKind::CONTAINER)
                            {
                                self.rewind_super(tokens);
                            }
                            self.expected = if !self.dialect.is_permissive()
                                && self.toksuper != NONE
                                && tokens[self.toksuper as usize]
                                    .kind
                                    .intersects(TokenKind::OBJECT)
                            {
                                TokenKind::STRING
                            } else {
                                TokenKind::ANY_TYPE
                            };
                        }
                        None => {
                            // A comma directly after a key leaves CLOSE out
                            // of the expected set.
                            if !self.dialect.is_permissive()
                                && !self.expected.intersects(TokenKind::CLOSE)
                            {
                                return Err(Error::Invalid);
                            }
                            self.expected = TokenKind::ANY_TYPE;
                        }
                    }
                }
                b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => {
                    self.parse_primitive(input, tokens.as_deref_mut())?;
                    count += 1;
                }
                _ => {
                    if !self.dialect.is_permissive() {
                        return Err(Error::Invalid);
                    }
                    self.parse_primitive(input, tokens.as_deref_mut())?;
                    count += 1;
                }
            }
            self.pos += 1;
        }

        match tokens.as_deref() {
            Some(tokens) => {
                for i in (0..self.toknext).rev() {
                    let tok = &tokens[i as usize];
                    if tok.start != NONE && tok.end == NONE {
                        return Err(Error::Partial);
                    }
                }
            }
            None => {
                if self.depth > 0 {
                    return Err(Error::Partial);
                }
            }
        }
        Ok(count as usize)
    }

    /// Claims the next pool slot, reset to the unset state.
    pub(crate) fn alloc_token(&mut self, tokens: &mut [Token]) -> Result<TokenIndex, Error> {
        let idx = self.toknext;
        let Some(slot) = tokens.get_mut(idx as usize) else {
            return Err(Error::NoMemory);
        };
        *slot = Token::unset();
        self.toknext += 1;
        Ok(idx)
    }

    /// Closes the nearest unclosed container, verifying it matches `kind`,
    /// and re-anchors `toksuper` at the enclosing still-open container.
    fn close_container(&mut self, tokens: &mut [Token], kind: TokenKind) -> Result<(), Error> {
        #[cfg(feature = "parent-links")]
        {
            if self.toknext < 1 {
                return Err(Error::Invalid);
            }
            let mut idx = self.toknext - 1;
            loop {
                let tok = tokens[idx as usize];
                if tok.start != NONE && tok.end == NONE {
                    if !tok.kind.intersects(kind) {
                        return Err(Error::Invalid);
                    }
                    tokens[idx as usize].end = self.pos + 1;
                    self.toksuper = tok.parent;
                    return Ok(());
                }
                if tok.parent == NONE {
                    if !tok.kind.intersects(kind) || self.toksuper == NONE {
                        return Err(Error::Invalid);
                    }
                    return Ok(());
                }
                idx = tok.parent;
            }
        }
        #[cfg(not(feature = "parent-links"))]
        {
            let mut found = NONE;
            for i in (0..self.toknext).rev() {
                let tok = tokens[i as usize];
                if tok.start != NONE && tok.end == NONE {
                    if !tok.kind.intersects(kind) {
                        return Err(Error::Invalid);
                    }
                    self.toksuper = NONE;
                    tokens[i as usize].end = self.pos + 1;
                    found = i;
                    break;
                }
            }
            if found == NONE {
                return Err(Error::Invalid);
            }
            for i in (0..found).rev() {
                let tok = &tokens[i as usize];
                if tok.start != NONE && tok.end == NONE {
                    self.toksuper = i;
                    break;
                }
            }
            Ok(())
        }
    }

    /// Moves `toksuper` off a key (or other non-container) back to the
    /// container accumulating children.
    fn rewind_super(&mut self, tokens: &[Token]) {
        #[cfg(feature = "parent-links")]
        {
            self.toksuper = tokens[self.toksuper as usize].parent;
        }
        #[cfg(not(feature = "parent-links"))]
        {
            for i in (0..self.toknext).rev() {
                let tok = &tokens[i as usize];
                if tok.kind.intersects(TokenKind::CONTAINER)
                    && tok.start != NONE
                    && tok.end == NONE
                {
                    self.toksuper = i;
                    break;
                }
            }
        }
    }

    /// Records the freshly emitted token at `idx` as a child of the container
    /// currently accumulating children: bumps that container's `size` and
    /// maintains the parent and sibling links.
    pub(crate) fn attach(&mut self, tokens: &mut [Token], idx: TokenIndex) {
        let holder = self.holder(tokens, idx);
        if holder != NONE {
            tokens[holder as usize].size += 1;
        }
        #[cfg(feature = "parent-links")]
        {
            tokens[idx as usize].parent = holder;
        }
        #[cfg(feature = "next-sibling")]
        Self::link_sibling(tokens, holder, idx);
    }

    /// Container the next child belongs to: `toksuper` itself when it is a
    /// container, otherwise the container enclosing the key it points at.
    fn holder(&self, tokens: &[Token], idx: TokenIndex) -> TokenIndex {
        if self.toksuper == NONE {
            return NONE;
        }
        if tokens[self.toksuper as usize]
            .kind
            .intersects(TokenKind::CONTAINER)
        {
            return self.toksuper;
        }
        #[cfg(feature = "parent-links")]
        {
            let _ = idx;
            tokens[self.toksuper as usize].parent
        }
        #[cfg(not(feature = "parent-links"))]
        {
            for i in (0..idx).rev() {
                let tok = &tokens[i as usize];
                if tok.kind.intersects(TokenKind::CONTAINER)
                    && tok.start != NONE
                    && tok.end == NONE
                {
                    return i;
                }
            }
            NONE
        }
    }

    /// Appends `idx` to its container's sibling chain. The first child stays
    /// unlinked; it is discoverable as `holder + 1`.
    #[cfg(feature = "next-sibling")]
    fn link_sibling(tokens: &mut [Token], holder: TokenIndex, idx: TokenIndex) {
        let first = if holder == NONE { 0 } else { holder + 1 };
        if first == idx {
            return;
        }
        let mut sib = first;
        while tokens[sib as usize].next_sibling != NONE {
            sib = tokens[sib as usize].next_sibling;
        }
        tokens[sib as usize].next_sibling = idx;
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::strict()
    }
}
