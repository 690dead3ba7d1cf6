/// Minimum digit count for a structurally plausible card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Luhn mod-10 check over a digit string (whitespace must already be
/// stripped). Catches accidental digit-entry errors only; not a security
/// control. Non-digit input is rejected outright instead of being folded
/// into the sum.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.len() < MIN_CARD_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut sum: u32 = 0;
    let mut double = false;
    for b in digits.bytes().rev() {
        let mut n = u32::from(b - b'0');
        if double {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        sum += n;
        double = !double;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("5500000000000004"));
        assert!(luhn_valid("2223000048400011"));
        // 15-digit Amex test number: passes the checksum even though the
        // network classifier has no badge for it.
        assert!(luhn_valid("378282246310005"));
    }

    #[test]
    fn test_checksum_failure() {
        assert!(!luhn_valid("4111111111111112"));
    }

    #[test]
    fn test_length_floor() {
        // Checksum-correct 12-digit string is still rejected.
        assert!(!luhn_valid("111111111113"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn test_non_digit_input_rejected() {
        assert!(!luhn_valid("4111 1111 1111 1111"));
        assert!(!luhn_valid("411111111111111a"));
    }
}
