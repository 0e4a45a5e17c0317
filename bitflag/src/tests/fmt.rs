use crate::Flag;

#[test]
fn test_display_zero() {
    assert_eq!(Flag::new().to_string(), "0");
}

#[test]
fn test_display() {
    let mut f = Flag::new();
    f.set(Flag::from_bits(2));
    assert_eq!(f.to_string(), "10");

    assert_eq!(Flag::from_bits(0b1010_0001).to_string(), "10100001");
    assert_eq!(Flag::FULL.to_string(), "1".repeat(32));
}

#[test]
fn test_display_respects_width() {
    assert_eq!(format!("{:08}", Flag::from_bits(0b101)), "00000101");
    assert_eq!(format!("{:<4}|", Flag::bit(0)), "1   |");
}

#[test]
fn test_radix_formatting() {
    let f = Flag::from_bits(0xBEEF);

    assert_eq!(format!("{:b}", f), "1011111011101111");
    assert_eq!(format!("{:#b}", Flag::bit(2)), "0b100");
    assert_eq!(format!("{:o}", f), "137357");
    assert_eq!(format!("{:x}", f), "beef");
    assert_eq!(format!("{:#X}", f), "0xBEEF");
    assert_eq!(format!("{:#034b}", Flag::bit(0)), format!("0b{}1", "0".repeat(31)));
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Flag::from_bits(0b110)), "Flag(0b110)");
    assert_eq!(format!("{:?}", Flag::EMPTY), "Flag(0b0)");
}
