use crate::core::format::{format_card_number, format_cvc, format_expiry};
use crate::core::luhn::{luhn_valid, MIN_CARD_DIGITS};
use crate::core::network::CardNetwork;
use crate::core::validate::{
    validate_card_number, validate_cvc, validate_expiry_at, validate_name, FieldError,
};
use crate::domain::model::PaymentMethodKind;
use crate::domain::ports::PaymentForm;
use chrono::{NaiveDate, Utc};

/// State of the card tab. Every setter replaces the stored display value
/// with the formatted rendition of the latest input, so the last keystroke
/// wins. Nothing survives the form: values are dropped on reset.
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    name: String,
    card_number: String,
    expiry: String,
    cvc: String,
    checksum_hint: bool,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    pub fn input_card_number(&mut self, value: &str) {
        self.card_number = format_card_number(value);
        // Typing again clears the blur-time hint.
        self.checksum_hint = false;
    }

    pub fn input_expiry(&mut self, value: &str) {
        self.expiry = format_expiry(value);
    }

    pub fn input_cvc(&mut self, value: &str) {
        self.cvc = format_cvc(value);
    }

    /// Leaving the card field surfaces the checksum error early, but only
    /// once enough digits are present to be worth checking.
    pub fn blur_card_number(&mut self) {
        let raw = self.raw_card_number();
        self.checksum_hint = raw.len() >= MIN_CARD_DIGITS && !luhn_valid(&raw);
    }

    pub fn checksum_hint(&self) -> Option<FieldError> {
        self.checksum_hint.then_some(FieldError::CardChecksum)
    }

    /// Badge shown inside the card-number input.
    pub fn network(&self) -> Option<CardNetwork> {
        CardNetwork::detect(&self.card_number)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    fn raw_card_number(&self) -> String {
        self.card_number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    pub fn validate_at(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(e) = validate_name(&self.name) {
            errors.push(e);
        }
        if let Err(e) = validate_card_number(&self.card_number) {
            errors.push(e);
        }
        if let Err(e) = validate_expiry_at(&self.expiry, today) {
            errors.push(e);
        }
        if let Err(e) = validate_cvc(&self.cvc) {
            errors.push(e);
        }
        errors
    }
}

impl PaymentForm for CardForm {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Card
    }

    fn validate(&self) -> Vec<FieldError> {
        self.validate_at(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn filled_form() -> CardForm {
        let mut form = CardForm::new();
        form.input_name("Jane Doe");
        form.input_card_number("4111111111111111");
        form.input_expiry("1230");
        form.input_cvc("123");
        form
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = filled_form();
        assert_eq!(form.card_number(), "4111 1111 1111 1111");
        assert_eq!(form.expiry(), "12/30");
        assert_eq!(form.network(), Some(CardNetwork::Visa));
        assert!(form.validate_at(today()).is_empty());
    }

    #[test]
    fn test_empty_form_collects_all_errors() {
        let form = CardForm::new();
        assert_eq!(
            form.validate_at(today()),
            vec![
                FieldError::MissingName,
                FieldError::CardTooShort,
                FieldError::MalformedExpiry,
                FieldError::CvcTooShort,
            ]
        );
    }

    #[test]
    fn test_checksum_error_on_submit() {
        let mut form = filled_form();
        form.input_card_number("4111111111111112");
        assert_eq!(form.validate_at(today()), vec![FieldError::CardChecksum]);
    }

    #[test]
    fn test_blur_hint_set_and_cleared_by_next_keystroke() {
        let mut form = CardForm::new();
        form.input_card_number("4111111111111112");
        form.blur_card_number();
        assert_eq!(form.checksum_hint(), Some(FieldError::CardChecksum));

        form.input_card_number("4111111111111111");
        assert_eq!(form.checksum_hint(), None);
    }

    #[test]
    fn test_blur_is_silent_below_length_floor() {
        let mut form = CardForm::new();
        form.input_card_number("4111");
        form.blur_card_number();
        assert_eq!(form.checksum_hint(), None);
    }

    #[test]
    fn test_last_keystroke_wins() {
        let mut form = CardForm::new();
        form.input_card_number("5500000000000004");
        assert_eq!(form.network(), Some(CardNetwork::Mastercard));
        form.input_card_number("4111");
        assert_eq!(form.card_number(), "4111");
        assert_eq!(form.network(), Some(CardNetwork::Visa));
    }
}
