use crate::Flag;

const A: Flag = Flag::bit(0);
const B: Flag = Flag::bit(1);
const C: Flag = Flag::bit(2);
const D: Flag = Flag::bit(3);

#[test]
fn test_from_flags() {
    assert_eq!(Flag::from_flags([A, B]), crate::flags![A, B]);
    assert_eq!(Flag::from_flags([B, A]), crate::flags![A, B]);
    assert_eq!(Flag::from_flags(Vec::new()), Flag::EMPTY);
}

#[test]
fn test_from_flags_matches_sequential_set() {
    let mut expected = Flag::new();
    expected.set(C).set(A);

    assert_eq!(Flag::from_flags([C, A]), expected);
    assert_eq!([C, A].iter().copied().collect::<Flag>(), expected);
}

#[test]
fn test_set_all() {
    let mut f = crate::flags![D];
    f.set_all([A, C]);
    assert_eq!(f, crate::flags![A, C, D]);
}

#[test]
fn test_set_all_from_slice() {
    let flags = [A, B, C];
    let mut f = Flag::new();
    f.set_all(flags[1..].iter().copied());
    assert_eq!(f, crate::flags![B, C]);
}

#[test]
fn test_extend() {
    let mut f = crate::flags![A];
    f.extend(vec![C, D]);
    assert_eq!(f, crate::flags![A, C, D]);
}

#[test]
fn test_toggle_all() {
    let mut f = crate::flags![A, B];
    f.toggle_all([B, C]);
    assert_eq!(f, crate::flags![A, C]);
}

#[test]
fn test_toggle_all_repeated_flag_cancels() {
    let mut f = crate::flags![A];
    f.toggle_all([B, B, B]);
    assert_eq!(f, crate::flags![A, B]);
    f.toggle_all([B, B]);
    assert_eq!(f, crate::flags![A, B]);
}

#[test]
fn test_clear_all() {
    let mut f = Flag::FULL;
    f.clear_all([A, B, C, D]);
    assert_eq!(f.bits(), 0xFFFF_FFF0);
}

#[test]
fn test_has_all() {
    let f = crate::flags![A, C];
    assert!(f.has_all([A, C]));
    assert!(!f.has_all([A, B]));
    assert!(f.has_all(Vec::new()));
    assert!(Flag::EMPTY.has_all(Vec::new()));
}

#[test]
fn test_has_all_short_circuits() {
    let f = crate::flags![A];
    let mut visited = 0;

    let found = f.has_all([A, B, C].iter().copied().inspect(|_| visited += 1));

    assert!(!found);
    assert_eq!(visited, 2);
}

#[test]
fn test_variadic_accepts_flag_bits() {
    let mut f = Flag::new();
    f.set_all(crate::flags![B, D]);
    assert_eq!(f, crate::flags![B, D]);
    assert!(f.has_all(crate::flags![B, D]));
}
