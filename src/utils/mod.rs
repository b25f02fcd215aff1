/// Digit symbols in value order. A base B numeral may only use the first B of them.
pub const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Value of a digit symbol, ignoring case. `None` for anything outside the alphabet.
pub fn digit_value(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    DIGITS
        .iter()
        .position(|&symbol| symbol as char == upper)
        .map(|value| value as u32)
}

#[test]
fn digit_value_is_case_insensitive() {
    assert_eq!(digit_value('f'), Some(15));
    assert_eq!(digit_value('F'), Some(15));
    assert_eq!(digit_value('0'), Some(0));
    assert_eq!(digit_value('G'), None);
    assert_eq!(digit_value('-'), None);
}
