use thiserror::Error;

/// Error raised when parsing a [Flag][crate::Flag] from its binary string
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFlagError {
    /// The string contained no binary digits.
    #[error("no binary digits to parse")]
    Empty,
    /// A character other than `0` or `1` was encountered.
    #[error("invalid binary digit `{found}` at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character in the input.
        offset: usize,
        /// The offending character.
        found: char,
    },
    /// The value has more significant bits than fit in a flag set.
    #[error("binary value does not fit in 32 bits")]
    Overflow,
}
