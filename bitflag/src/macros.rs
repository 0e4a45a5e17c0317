/// Construct a flag set with the given flags set.
///
/// Expands to [Flag::from_array][crate::Flag::from_array], so it can be used
/// in constant position.
///
/// # Examples
///
/// ```
/// use bitflag::Flag;
///
/// const A: Flag = Flag::bit(0);
/// const B: Flag = Flag::bit(1);
/// const C: Flag = Flag::bit(3);
///
/// const AC: Flag = bitflag::flags![A, C];
///
/// assert!(AC.has(A));
/// assert!(!AC.has(B));
/// assert!(AC.has(C));
/// assert_eq!(bitflag::flags![], Flag::EMPTY);
/// ```
#[macro_export]
macro_rules! flags {
    ($($flag:expr),* $(,)?) => {
        $crate::Flag::from_array([$($flag,)*])
    };
}
