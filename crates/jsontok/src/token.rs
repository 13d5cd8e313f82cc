//! Token descriptors produced by the tokenizer.
//!
//! A [`Token`] locates one JSON element by byte offsets into the input buffer
//! plus structural metadata (child count, parent, sibling). Nothing is copied
//! or decoded: a string token's payload may still contain escape sequences
//! and a primitive token is raw text; interpreting either is the caller's
//! concern.

use core::ops;

use bitflags::bitflags;

/// Index into the caller-provided token pool.
pub type TokenIndex = u32;

/// Reserved index meaning "unset" / "no such token".
///
/// This is the all-ones value of [`TokenIndex`]. Reserving it keeps the hot
/// paths free of optional fields, at the price of capping a token pool (and
/// the input length) at `NONE - 1` entries.
pub const NONE: TokenIndex = TokenIndex::MAX;

bitflags! {
    /// Bit-set classifying a token.
    ///
    /// Kinds are independent flags that combine freely: a string in key
    /// position is `STRING | KEY`, an object is `OBJECT | VALUE`. The same
    /// bit-set doubles as the tokenizer's "expected next" predicate, which is
    /// why it also carries the [`CLOSE`](Self::CLOSE) and
    /// [`DELIMITER`](Self::DELIMITER) flags that never appear on an emitted
    /// token.
    ///
    /// Two predicates cover the two tests that are easy to conflate:
    /// [`intersects`](Self::intersects) answers "has *any* of these bits"
    /// while [`contains`](Self::contains) answers "has *all* of these bits".
    ///
    /// ```
    /// use jsontok::TokenKind;
    ///
    /// let kind = TokenKind::STRING | TokenKind::KEY;
    /// assert!(kind.intersects(TokenKind::ANY_TYPE));
    /// assert!(kind.contains(TokenKind::STRING | TokenKind::KEY));
    /// assert!(!kind.contains(TokenKind::STRING | TokenKind::VALUE));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TokenKind: u8 {
        /// `{...}` container.
        const OBJECT = 1 << 0;
        /// `[...]` container.
        const ARRAY = 1 << 1;
        /// Quoted string; the payload excludes the quotes.
        const STRING = 1 << 2;
        /// Unquoted run: number, `true`, `false`, `null`, or (permissive)
        /// any non-structural text.
        const PRIMITIVE = 1 << 3;
        /// The token sits in key position inside an object.
        const KEY = 1 << 4;
        /// The token sits in value position.
        const VALUE = 1 << 5;
        /// Expected-set flag: `}` or `]` may appear next.
        const CLOSE = 1 << 6;
        /// Expected-set flag: `:` or `,` may appear next.
        const DELIMITER = 1 << 7;
    }
}

impl TokenKind {
    /// No classification yet; also the empty expected set.
    pub const UNDEFINED: Self = Self::empty();

    /// `OBJECT | ARRAY`.
    pub const CONTAINER: Self =
        Self::from_bits_truncate(Self::OBJECT.bits() | Self::ARRAY.bits());

    /// `OBJECT | ARRAY | STRING | PRIMITIVE`.
    pub const ANY_TYPE: Self = Self::from_bits_truncate(
        Self::OBJECT.bits() | Self::ARRAY.bits() | Self::STRING.bits() | Self::PRIMITIVE.bits(),
    );
}

/// One tokenized JSON element.
///
/// `start` and `end` are byte offsets into the input buffer, half-open on the
/// payload: a string token brackets its content without the quotes, a
/// container token spans from its opening brace to one past its closing
/// brace, and a primitive token brackets the literal text. Offsets are
/// [`NONE`] until the tokenizer sets them, which is observable on a truncated
/// parse (an unclosed container keeps `end == NONE`).
///
/// `size` is the number of immediate children. Object children are keys *and*
/// values, so one key-value pair contributes two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Classification bits.
    pub kind: TokenKind,
    /// Start offset of the payload.
    pub start: u32,
    /// One past the end of the payload.
    pub end: u32,
    /// Number of immediate children.
    pub size: u32,
    /// Index of the enclosing container, or [`NONE`] at the root.
    #[cfg(feature = "parent-links")]
    pub parent: TokenIndex,
    /// Index of the next child in the same container, or [`NONE`] for the
    /// last one. The first child is not linked: it always sits at
    /// `parent + 1`.
    #[cfg(feature = "next-sibling")]
    pub next_sibling: TokenIndex,
}

impl Token {
    pub(crate) const fn unset() -> Self {
        Self {
            kind: TokenKind::UNDEFINED,
            start: NONE,
            end: NONE,
            size: 0,
            #[cfg(feature = "parent-links")]
            parent: NONE,
            #[cfg(feature = "next-sibling")]
            next_sibling: NONE,
        }
    }

    /// The token's kind masked by `mask`.
    ///
    /// A non-empty result means "any of these bits"; comparing the result
    /// against a composite `mask` for equality is the "exactly these bits"
    /// test.
    #[must_use]
    pub fn is_kind(&self, mask: TokenKind) -> TokenKind {
        self.kind.intersection(mask)
    }

    /// Byte range of the payload, or `None` while either offset is unset.
    #[must_use]
    pub fn span(&self) -> Option<ops::Range<usize>> {
        if self.start == NONE || self.end == NONE {
            return None;
        }
        Some(self.start as usize..self.end as usize)
    }

    /// Returns `true` for `{...}` tokens.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.kind.intersects(TokenKind::OBJECT)
    }

    /// Returns `true` for `[...]` tokens.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind.intersects(TokenKind::ARRAY)
    }

    /// Returns `true` for either container kind.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.kind.intersects(TokenKind::CONTAINER)
    }

    /// Returns `true` for quoted strings.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind.intersects(TokenKind::STRING)
    }

    /// Returns `true` for unquoted runs.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.kind.intersects(TokenKind::PRIMITIVE)
    }

    /// Returns `true` when the token occupies a key position.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.kind.intersects(TokenKind::KEY)
    }

    /// Returns `true` when the token occupies a value position.
    #[must_use]
    pub fn is_value(&self) -> bool {
        self.kind.intersects(TokenKind::VALUE)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::unset()
    }
}
