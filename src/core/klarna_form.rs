use crate::core::validate::{validate_email, FieldError};
use crate::domain::model::PaymentMethodKind;
use crate::domain::ports::PaymentForm;

/// The Klarna tab: a single email field. Klarna handles the rest of the
/// flow on its own pages, so email shape is all we can check here.
#[derive(Debug, Clone, Default)]
pub struct KlarnaForm {
    email: String,
}

impl KlarnaForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentForm for KlarnaForm {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Klarna
    }

    fn validate(&self) -> Vec<FieldError> {
        match validate_email(&self.email) {
            Ok(()) => Vec::new(),
            Err(e) => vec![e],
        }
    }
}
