//! A library for working with a small and cheap set of 32 boolean flags.
//!
//! A [Flag] packs 32 independent on/off values into a single `u32`. Flag
//! constants are defined by the caller, usually as successive bits, and
//! combined through the [flags!] macro or the `|` operator.
//!
//! Every mutating operation has a singular form such as [Flag::set] and a
//! variadic form such as [Flag::set_all] which accepts anything that can be
//! iterated over as flags. Mutating operations return the flag set so that
//! they can be chained.
//!
//! # Examples
//!
//! ```rust
//! use bitflag::Flag;
//!
//! const A: Flag = Flag::bit(0); // 0001
//! const B: Flag = Flag::bit(1); // 0010
//! const C: Flag = Flag::bit(2); // 0100
//!
//! let mut f = Flag::new();
//! f.set(B);
//! assert_eq!(f.to_string(), "10");
//!
//! f.clear_all_bits();
//! f.toggle_all([C, A]);
//!
//! assert!(f.has(A));
//! assert!(f.has_all([A, C]));
//! assert_eq!(f, bitflag::flags![A, C]);
//! ```
//!
//! The display form can be parsed back.
//!
//! ```rust
//! use bitflag::Flag;
//!
//! let f = Flag::from_bits(0b1011);
//! let parsed: Flag = f.to_string().parse()?;
//!
//! assert_eq!(parsed, f);
//! # Ok::<_, bitflag::ParseFlagError>(())
//! ```

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

mod error;
pub use self::error::ParseFlagError;

mod flag;
pub use self::flag::{Flag, Iter};

mod parse;

#[cfg(test)]
mod tests;
