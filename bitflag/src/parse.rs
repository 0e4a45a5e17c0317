//! Parsing of the binary string representation produced by `Display`.

use core::str::FromStr;

use crate::error::ParseFlagError;
use crate::flag::Flag;

const PREFIX: &str = "0b";

impl FromStr for Flag {
    type Err = ParseFlagError;

    /// Parse a flag set from a string of binary digits, optionally prefixed
    /// with `0b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::{Flag, ParseFlagError};
    ///
    /// assert_eq!("101".parse::<Flag>(), Ok(Flag::from_bits(0b101)));
    /// assert_eq!("0b0010".parse::<Flag>(), Ok(Flag::bit(1)));
    /// assert_eq!("".parse::<Flag>(), Err(ParseFlagError::Empty));
    /// assert_eq!(
    ///     "1021".parse::<Flag>(),
    ///     Err(ParseFlagError::InvalidDigit { offset: 2, found: '2' })
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_binary(s) {
            Ok(bits) => Ok(Flag::from_bits(bits)),
            Err(error) => {
                tracing::trace!(input = s, %error, "rejected flag string");
                Err(error)
            }
        }
    }
}

fn parse_binary(s: &str) -> Result<u32, ParseFlagError> {
    let (start, digits) = match s.strip_prefix(PREFIX) {
        Some(digits) => (PREFIX.len(), digits),
        None => (0, s),
    };

    if digits.is_empty() {
        return Err(ParseFlagError::Empty);
    }

    let mut bits = 0u32;

    for (offset, c) in digits.char_indices() {
        let digit = match c {
            '0' => 0,
            '1' => 1,
            found => {
                return Err(ParseFlagError::InvalidDigit {
                    offset: start + offset,
                    found,
                })
            }
        };

        // Shifting would push a set bit out of the value.
        if bits >> (Flag::BITS - 1) != 0 {
            return Err(ParseFlagError::Overflow);
        }

        bits = (bits << 1) | digit;
    }

    Ok(bits)
}
