use crate::core::validate::FieldError;
use crate::domain::model::PaymentMethodKind;
use crate::domain::ports::PaymentForm;

/// Apple Pay / Google Pay tabs. The buttons are disabled demo placeholders
/// with nothing to validate; the engine refuses them before processing.
#[derive(Debug, Clone, Copy)]
pub struct WalletPlaceholder {
    kind: PaymentMethodKind,
}

impl WalletPlaceholder {
    pub fn apple_pay() -> Self {
        Self {
            kind: PaymentMethodKind::ApplePay,
        }
    }

    pub fn google_pay() -> Self {
        Self {
            kind: PaymentMethodKind::GooglePay,
        }
    }
}

impl PaymentForm for WalletPlaceholder {
    fn kind(&self) -> PaymentMethodKind {
        self.kind
    }

    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}
