use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// PointerError

/// An error returned from parsing or resolving a [`Pointer`](crate::Pointer).
///
/// Every variant carries the offending text. Use [`kind`](Self::kind) to
/// branch on the category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PointerError {
    /// Non-empty pointer text that does not start with `/`.
    #[error("invalid JSON pointer {0:?}")]
    InvalidPointer(String),

    /// A segment with a `~` not followed by `0` or `1`.
    #[error("invalid token in JSON pointer {0:?}")]
    InvalidToken(String),

    /// A token that is neither an index nor `-` used on a sequence.
    #[error("invalid array index {0:?}")]
    InvalidArrayIndex(String),

    /// An index, or the `-` append marker, at or past the end of a sequence.
    ///
    /// `len` is the length of the sequence.
    #[error("array index {token:?} out of bounds for length {len}")]
    ArrayIndexOutOfBounds { token: String, len: usize },

    /// A missing key or field, or a null value on the way.
    #[error("value not found at token {0:?}")]
    ValueNotFound(String),

    /// The resolved value is not of the requested type.
    #[error("resolved value is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
}

impl PointerError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> PointerErrorKind {
        match self {
            Self::InvalidPointer(_) => PointerErrorKind::InvalidPointer,
            Self::InvalidToken(_) => PointerErrorKind::InvalidToken,
            Self::InvalidArrayIndex(_) => PointerErrorKind::InvalidArrayIndex,
            Self::ArrayIndexOutOfBounds { .. } => PointerErrorKind::ArrayIndexOutOfBounds,
            Self::ValueNotFound(_) => PointerErrorKind::ValueNotFound,
            Self::TypeMismatch { .. } => PointerErrorKind::TypeMismatch,
        }
    }
}

// -----------------------------------------------------------------------------
// PointerErrorKind

/// The category of a [`PointerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerErrorKind {
    InvalidPointer,
    InvalidToken,
    InvalidArrayIndex,
    ArrayIndexOutOfBounds,
    ValueNotFound,
    TypeMismatch,
}

// -----------------------------------------------------------------------------
// Tests
