use crate::token::TokenKind;

/// Grammar dialect accepted by a [`Tokenizer`](crate::Tokenizer).
///
/// `Strict` follows [RFC 8259]: the root must be an object or array, object
/// keys must be strings, unquoted values are limited to numbers and the
/// `true` / `false` / `null` literals, and elements must be comma-separated.
///
/// `Permissive` relaxes all of that: any value may be the root, several
/// whitespace-separated values may follow each other at the top level, any
/// unquoted non-structural run is a primitive, primitives may serve as object
/// keys (the `KEY` flag is assigned when the `:` is seen), and a missing
/// comma between a key-value pair and the next key is tolerated.
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// RFC 8259-aligned acceptance.
    #[default]
    Strict,
    /// The relaxed acceptance described above.
    Permissive,
}

impl Dialect {
    /// Returns `true` for [`Dialect::Permissive`].
    #[must_use]
    pub const fn is_permissive(self) -> bool {
        matches!(self, Self::Permissive)
    }

    /// Token kinds legal before the first byte of input.
    pub(crate) const fn initial_expected(self) -> TokenKind {
        match self {
            Self::Strict => TokenKind::CONTAINER,
            Self::Permissive => TokenKind::ANY_TYPE,
        }
    }
}
