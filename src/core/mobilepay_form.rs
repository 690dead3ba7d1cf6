use crate::core::format::format_phone;
use crate::core::validate::{validate_phone, FieldError};
use crate::domain::model::PaymentMethodKind;
use crate::domain::ports::PaymentForm;

/// The MobilePay tab: one phone field behind a fixed +45 prefix. Submitting
/// sends a (simulated) payment request to the MobilePay app.
#[derive(Debug, Clone, Default)]
pub struct MobilePayForm {
    phone: String,
}

impl MobilePayForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_phone(&mut self, value: &str) {
        self.phone = format_phone(value);
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl PaymentForm for MobilePayForm {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::MobilePay
    }

    fn validate(&self) -> Vec<FieldError> {
        match validate_phone(&self.phone) {
            Ok(()) => Vec::new(),
            Err(e) => vec![e],
        }
    }
}
