use crate::core::validate::FieldError;
use crate::domain::model::{OrderSummary, PaymentMethodKind, Receipt};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn product_name(&self) -> &str;
    fn brand(&self) -> &str;
    fn unit_price_cents(&self) -> u64;
    fn tax_percent(&self) -> u64;
    fn processing_delay_ms(&self) -> u64;

    fn order_summary(&self) -> OrderSummary {
        OrderSummary {
            product_name: self.product_name().to_string(),
            brand: self.brand().to_string(),
            unit_price_cents: self.unit_price_cents(),
            tax_percent: self.tax_percent(),
        }
    }
}

/// One tab of the payment form. Validation is field-local and synchronous;
/// it runs on every submit attempt.
pub trait PaymentForm: Send + Sync {
    fn kind(&self) -> PaymentMethodKind;
    fn validate(&self) -> Vec<FieldError>;
}

/// The thing that eventually charges the order. The only implementation in
/// this demo sleeps for a fixed delay and issues a receipt.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process(&self, order: &OrderSummary, method: PaymentMethodKind) -> Result<Receipt>;
}
