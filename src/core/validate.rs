use crate::core::luhn::{luhn_valid, MIN_CARD_DIGITS};
use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Which input the error belongs to, for inline placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    CardNumber,
    Expiry,
    Cvc,
    Email,
    Phone,
}

/// Field-local validation errors. All are non-fatal: they are rendered next
/// to the offending input and cleared on the next keystroke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Name is required")]
    MissingName,

    #[error("Invalid card number")]
    CardTooShort,

    #[error("Card number is invalid")]
    CardChecksum,

    #[error("Invalid expiry date")]
    MalformedExpiry,

    #[error("Invalid month")]
    InvalidMonth,

    #[error("Card has expired")]
    CardExpired,

    #[error("Invalid CVC")]
    CvcTooShort,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Enter a valid mobile number")]
    PhoneTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::MissingName => Field::Name,
            FieldError::CardTooShort | FieldError::CardChecksum => Field::CardNumber,
            FieldError::MalformedExpiry | FieldError::InvalidMonth | FieldError::CardExpired => {
                Field::Expiry
            }
            FieldError::CvcTooShort => Field::Cvc,
            FieldError::InvalidEmail => Field::Email,
            FieldError::PhoneTooShort => Field::Phone,
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::MissingName);
    }
    Ok(())
}

/// `number` is the display form; spaces are stripped before checking.
pub fn validate_card_number(number: &str) -> Result<(), FieldError> {
    let raw: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if raw.len() < MIN_CARD_DIGITS {
        return Err(FieldError::CardTooShort);
    }
    if !luhn_valid(&raw) {
        return Err(FieldError::CardChecksum);
    }
    Ok(())
}

/// Validate an `MM/YY` expiry against an explicit date. Month validity is
/// checked before expiry, so `13/30` reports an invalid month rather than a
/// date comparison.
pub fn validate_expiry_at(expiry: &str, today: NaiveDate) -> Result<(), FieldError> {
    let (mm, yy) = expiry
        .split_once('/')
        .ok_or(FieldError::MalformedExpiry)?;
    if mm.len() < 2 || yy.len() < 2 {
        return Err(FieldError::MalformedExpiry);
    }
    let month: u32 = mm.parse().map_err(|_| FieldError::MalformedExpiry)?;
    let year: i32 = yy
        .parse::<i32>()
        .map(|y| 2000 + y)
        .map_err(|_| FieldError::MalformedExpiry)?;

    if !(1..=12).contains(&month) {
        return Err(FieldError::InvalidMonth);
    }
    if year < today.year() || (year == today.year() && month < today.month()) {
        return Err(FieldError::CardExpired);
    }
    Ok(())
}

pub fn validate_expiry(expiry: &str) -> Result<(), FieldError> {
    validate_expiry_at(expiry, Utc::now().date_naive())
}

pub fn validate_cvc(cvc: &str) -> Result<(), FieldError> {
    if cvc.len() < 3 {
        return Err(FieldError::CvcTooShort);
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if !email_regex().is_match(email.trim()) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Danish mobile numbers are eight digits; `phone` is the display form.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let raw: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if raw.len() < 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::PhoneTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aug_2026() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn test_name() {
        assert!(validate_name("Jane Doe").is_ok());
        assert_eq!(validate_name("  "), Err(FieldError::MissingName));
    }

    #[test]
    fn test_card_number_length_then_checksum() {
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        assert_eq!(
            validate_card_number("4111 1111 1111"),
            Err(FieldError::CardTooShort)
        );
        assert_eq!(
            validate_card_number("4111 1111 1111 1112"),
            Err(FieldError::CardChecksum)
        );
    }

    #[test]
    fn test_expiry_expired() {
        // Evaluated after January 2020, an 01/20 card is expired.
        assert_eq!(
            validate_expiry_at("01/20", aug_2026()),
            Err(FieldError::CardExpired)
        );
        // Same year, earlier month.
        assert_eq!(
            validate_expiry_at("07/26", aug_2026()),
            Err(FieldError::CardExpired)
        );
        // Current month is still accepted.
        assert!(validate_expiry_at("08/26", aug_2026()).is_ok());
        assert!(validate_expiry_at("12/30", aug_2026()).is_ok());
    }

    #[test]
    fn test_expiry_invalid_month() {
        assert_eq!(
            validate_expiry_at("13/30", aug_2026()),
            Err(FieldError::InvalidMonth)
        );
        assert_eq!(
            validate_expiry_at("00/30", aug_2026()),
            Err(FieldError::InvalidMonth)
        );
    }

    #[test]
    fn test_expiry_malformed() {
        for bad in ["", "1230", "1/30", "12/3", "12/", "ab/cd"] {
            assert_eq!(
                validate_expiry_at(bad, aug_2026()),
                Err(FieldError::MalformedExpiry),
                "expected malformed for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_cvc() {
        assert!(validate_cvc("123").is_ok());
        assert!(validate_cvc("1234").is_ok());
        assert_eq!(validate_cvc("12"), Err(FieldError::CvcTooShort));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email(" jane@example.com ").is_ok());
        assert_eq!(validate_email("jane@example"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("jane example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email(""), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_errors_attach_to_their_field() {
        assert_eq!(FieldError::MissingName.field(), Field::Name);
        assert_eq!(FieldError::CardTooShort.field(), Field::CardNumber);
        assert_eq!(FieldError::CardChecksum.field(), Field::CardNumber);
        assert_eq!(FieldError::InvalidMonth.field(), Field::Expiry);
        assert_eq!(FieldError::CardExpired.field(), Field::Expiry);
        assert_eq!(FieldError::CvcTooShort.field(), Field::Cvc);
        assert_eq!(FieldError::InvalidEmail.field(), Field::Email);
        assert_eq!(FieldError::PhoneTooShort.field(), Field::Phone);
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("12 34 56 78").is_ok());
        assert_eq!(validate_phone("12 34 56 7"), Err(FieldError::PhoneTooShort));
        assert_eq!(validate_phone(""), Err(FieldError::PhoneTooShort));
    }
}
