//! The 32-bit flag set.

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::ops;

/// A set of 32 independent boolean flags packed into a `u32`.
///
/// Flag constants are defined by the caller, typically as successive powers of
/// two. A `Flag` doesn't care whether an argument is a single bit or a
/// combination of bits, every operation simply applies the corresponding
/// bitwise arithmetic.
///
/// # Examples
///
/// ```rust
/// use bitflag::Flag;
///
/// const A: Flag = Flag::bit(0);
/// const B: Flag = Flag::bit(1);
/// const C: Flag = Flag::bit(2);
///
/// let mut f = Flag::new();
/// f.set(B);
/// assert_eq!(f.to_string(), "10");
///
/// f.clear_all_bits();
/// assert!(f.is_empty());
///
/// f.toggle_all([C, A]);
/// assert!(f.has(A));
/// assert!(f.has_all([A, C]));
/// assert!(!f.has(B));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Flag(u32);

impl Flag {
    /// The number of bits in a flag set.
    pub const BITS: u32 = u32::BITS;

    /// The flag set where no bit is set.
    pub const EMPTY: Flag = Flag(0);

    /// The flag set where every bit is set.
    pub const FULL: Flag = Flag(u32::MAX);

    /// Construct a new flag set that is empty, where no bit is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let f = bitflag::Flag::new();
    ///
    /// assert!(f.is_empty());
    /// assert_eq!(f.to_string(), "0");
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Construct a flag set from its raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Construct the flag with only the bit at `index` set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [Flag::BITS].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// const READ: Flag = Flag::bit(0);
    /// const WRITE: Flag = Flag::bit(1);
    /// const EXEC: Flag = Flag::bit(2);
    ///
    /// assert_eq!(READ.bits(), 0b001);
    /// assert_eq!(WRITE.bits(), 0b010);
    /// assert_eq!(EXEC.bits(), 0b100);
    /// ```
    #[inline]
    pub const fn bit(index: u32) -> Self {
        assert!(index < Self::BITS, "bit index out of range");
        Self(1 << index)
    }

    /// Construct a flag set from an array of flags, combining all of them.
    ///
    /// Since this is a `const fn` it can be used to define combined flag
    /// constants. It's what the [flags!][crate::flags] macro expands to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// const READ: Flag = Flag::bit(0);
    /// const WRITE: Flag = Flag::bit(1);
    /// const READ_WRITE: Flag = Flag::from_array([READ, WRITE]);
    ///
    /// assert_eq!(READ_WRITE.bits(), 0b11);
    /// ```
    pub const fn from_array<const N: usize>(flags: [Flag; N]) -> Self {
        let mut bits = 0;
        let mut n = 0;

        while n < N {
            bits |= flags[n].0;
            n += 1;
        }

        Self(bits)
    }

    /// Construct a flag set with every provided flag set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// let f = Flag::from_flags(vec![Flag::bit(4), Flag::bit(0)]);
    /// assert_eq!(f.to_string(), "10001");
    /// ```
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = Flag>,
    {
        let mut flag = Self::new();
        flag.set_all(flags);
        flag
    }

    /// Access the raw bit pattern of the flag set.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Test if no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Test if every bit is set.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.0 == u32::MAX
    }

    /// The number of bits which are set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let f = bitflag::flags![bitflag::Flag::bit(1), bitflag::Flag::bit(9)];
    /// assert_eq!(f.count(), 2);
    /// ```
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Set the given flag.
    ///
    /// Returns the flag set itself so that calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// const A: Flag = Flag::bit(0);
    /// const B: Flag = Flag::bit(1);
    ///
    /// let mut f = Flag::new();
    /// assert!(f.set(B).has(B));
    /// assert!(!f.has(A));
    /// ```
    #[inline]
    pub fn set(&mut self, flag: Flag) -> &mut Self {
        self.0 |= flag.0;
        self
    }

    /// Set every provided flag in order.
    ///
    /// Equivalent to calling [Flag::set] once for each of them.
    #[inline]
    pub fn set_all<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator<Item = Flag>,
    {
        for flag in flags {
            self.set(flag);
        }

        self
    }

    /// Set every bit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut f = bitflag::Flag::new();
    /// f.set_all_bits();
    ///
    /// assert!(f.is_full());
    /// assert_eq!(f.bits(), u32::MAX);
    /// ```
    #[inline]
    pub fn set_all_bits(&mut self) -> &mut Self {
        self.0 = u32::MAX;
        self
    }

    /// Set or clear the given flag depending on `enabled`.
    #[inline]
    pub fn set_to(&mut self, flag: Flag, enabled: bool) -> &mut Self {
        if enabled {
            self.set(flag)
        } else {
            self.clear(flag)
        }
    }

    /// Toggle the given flag, turning on bits which are off and turning off
    /// bits which are on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// let mut f = Flag::from_bits(0b0110);
    /// f.toggle(Flag::from_bits(0b0011));
    ///
    /// assert_eq!(f.bits(), 0b0101);
    /// ```
    #[inline]
    pub fn toggle(&mut self, flag: Flag) -> &mut Self {
        self.0 ^= flag.0;
        self
    }

    /// Toggle every provided flag in order.
    ///
    /// Note that toggling the same flag an even number of times leaves it
    /// unchanged.
    #[inline]
    pub fn toggle_all<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator<Item = Flag>,
    {
        for flag in flags {
            self.toggle(flag);
        }

        self
    }

    /// Toggle every bit.
    #[inline]
    pub fn toggle_all_bits(&mut self) -> &mut Self {
        self.0 = !self.0;
        self
    }

    /// Clear the given flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// let mut f = Flag::FULL;
    /// f.clear(Flag::bit(0)).clear(Flag::bit(31));
    ///
    /// assert_eq!(f.bits(), 0x7FFF_FFFE);
    /// ```
    #[inline]
    pub fn clear(&mut self, flag: Flag) -> &mut Self {
        self.0 &= !flag.0;
        self
    }

    /// Clear every provided flag in order.
    #[inline]
    pub fn clear_all<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator<Item = Flag>,
    {
        for flag in flags {
            self.clear(flag);
        }

        self
    }

    /// Clear every bit.
    #[inline]
    pub fn clear_all_bits(&mut self) -> &mut Self {
        self.0 = 0;
        self
    }

    /// Test if every bit in `flag` is also set in this flag set.
    ///
    /// For a single bit flag this is a membership test. A combined flag is only
    /// contained if *all* of its bits are set, and the empty flag is always
    /// contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// const A: Flag = Flag::bit(0);
    /// const B: Flag = Flag::bit(1);
    ///
    /// let f = bitflag::flags![A];
    ///
    /// assert!(f.has(A));
    /// assert!(!f.has(bitflag::flags![A, B]));
    /// assert!(f.has(Flag::EMPTY));
    /// ```
    #[inline]
    pub const fn has(self, flag: Flag) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Test if [Flag::has] holds for every provided flag.
    ///
    /// Stops at the first flag which isn't contained. An empty list of flags
    /// is always contained.
    #[inline]
    pub fn has_all<I>(self, flags: I) -> bool
    where
        I: IntoIterator<Item = Flag>,
    {
        flags.into_iter().all(|flag| self.has(flag))
    }

    /// Construct an iterator over every set bit, as single bit flags ordered
    /// from the least significant bit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitflag::Flag;
    ///
    /// let f = Flag::from_bits(0b1000_1010);
    /// let bits = f.iter().map(Flag::bits).collect::<Vec<_>>();
    ///
    /// assert_eq!(bits, vec![0b10, 0b1000, 0b1000_0000]);
    /// ```
    #[inline]
    pub fn iter(self) -> Iter {
        Iter { bits: self.0 }
    }
}

impl From<u32> for Flag {
    #[inline]
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Flag> for u32 {
    #[inline]
    fn from(flag: Flag) -> Self {
        flag.0
    }
}

impl FromIterator<Flag> for Flag {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Flag>,
    {
        Self::from_flags(iter)
    }
}

impl Extend<Flag> for Flag {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Flag>,
    {
        self.set_all(iter);
    }
}

impl IntoIterator for Flag {
    type IntoIter = Iter;
    type Item = Flag;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the set bits of a flag set. Created through [Flag::iter].
#[derive(Clone, Copy)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = Flag;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let lowest = self.bits & self.bits.wrapping_neg();
        self.bits &= !lowest;
        Some(Flag(lowest))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

macro_rules! impl_op {
    ($op:ident, $f:ident, $assign:ident, $assign_f:ident, $tok:tt) => {
        impl ops::$op for Flag {
            type Output = Flag;

            #[inline]
            fn $f(self, rhs: Flag) -> Flag {
                Flag(self.0 $tok rhs.0)
            }
        }

        impl ops::$assign for Flag {
            #[inline]
            fn $assign_f(&mut self, rhs: Flag) {
                *self = ops::$op::$f(*self, rhs);
            }
        }
    };
}

impl_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl ops::Not for Flag {
    type Output = Flag;

    #[inline]
    fn not(self) -> Flag {
        Flag(!self.0)
    }
}

/// Renders the flag set in base 2 without padding or prefix.
///
/// ```rust
/// use bitflag::Flag;
///
/// assert_eq!(Flag::new().to_string(), "0");
/// assert_eq!(Flag::bit(1).to_string(), "10");
/// assert_eq!(format!("{:>8}", Flag::bit(2)), "     100");
/// ```
impl fmt::Display for Flag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag")
            .field(&format_args!("{:#b}", self.0))
            .finish()
    }
}

macro_rules! impl_fmt {
    ($($fmt:ident),*) => {
        $(
            impl fmt::$fmt for Flag {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt::fmt(&self.0, f)
                }
            }
        )*
    };
}

impl_fmt!(Binary, Octal, LowerHex, UpperHex);
