//! Keystroke formatters. Each one takes the raw text currently in the input
//! (including whatever the previous format pass produced) and returns the
//! canonical display form; the caller replaces the field wholesale, so the
//! last keystroke always wins.

pub const MAX_CARD_DIGITS: usize = 16;
pub const MAX_CVC_DIGITS: usize = 4;
pub const MAX_EXPIRY_DIGITS: usize = 4;
pub const MAX_PHONE_DIGITS: usize = 8;

/// Strip everything that is not a decimal digit, keeping at most `max`.
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// `1234567890123456` -> `1234 5678 9012 3456` (display form, <= 19 chars).
pub fn format_card_number(input: &str) -> String {
    let raw = digits_only(input, MAX_CARD_DIGITS);
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// `1230` -> `12/30`; stays bare until a third digit arrives.
pub fn format_expiry(input: &str) -> String {
    let raw = digits_only(input, MAX_EXPIRY_DIGITS);
    if raw.len() >= 3 {
        format!("{}/{}", &raw[..2], &raw[2..])
    } else {
        raw
    }
}

/// Danish mobile number grouped in pairs: `12345678` -> `12 34 56 78`.
pub fn format_phone(input: &str) -> String {
    let raw = digits_only(input, MAX_PHONE_DIGITS);
    let mut out = String::with_capacity(raw.len() + 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn format_cvc(input: &str) -> String {
    digits_only(input, MAX_CVC_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_card_number_caps_at_16_digits() {
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4111 1111 1111 1111").len(), 19);
    }

    #[test]
    fn test_card_number_strips_junk() {
        assert_eq!(format_card_number("4111-1111 abcd 1111"), "4111 1111 1111");
    }

    #[test]
    fn test_expiry_separator() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("1230"), "12/30");
        assert_eq!(format_expiry("12/30"), "12/30");
        assert_eq!(format_expiry("12305"), "12/30");
    }

    #[test]
    fn test_phone_pairs() {
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("12"), "12");
        assert_eq!(format_phone("123"), "12 3");
        assert_eq!(format_phone("12345678"), "12 34 56 78");
        assert_eq!(format_phone("123456789"), "12 34 56 78");
    }

    #[test]
    fn test_cvc() {
        assert_eq!(format_cvc("12a34"), "1234");
        assert_eq!(format_cvc("12345"), "1234");
    }
}
