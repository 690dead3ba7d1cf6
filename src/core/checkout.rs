use crate::domain::model::{OrderSummary, PaymentMethodKind, Receipt};
use crate::domain::ports::{PaymentForm, PaymentGateway};
use crate::utils::error::{CheckoutError, Result};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;

/// Stand-in for a real payment service provider: waits out a fixed delay
/// (not cancellable, never retried, carries no request) and issues a
/// receipt with a random six-digit order id.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process(&self, order: &OrderSummary, method: PaymentMethodKind) -> Result<Receipt> {
        tracing::debug!("Simulating gateway latency: {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        let order_id = rand::rng().random_range(100_000..=999_999).to_string();
        Ok(Receipt {
            order_id,
            method,
            method_label: method.label().to_string(),
            amount_cents: order.total_cents(),
            completed_at: Utc::now(),
        })
    }
}

pub struct CheckoutEngine<G: PaymentGateway> {
    gateway: G,
}

impl<G: PaymentGateway> CheckoutEngine<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Run one submit attempt: validate the form, then hand the order to the
    /// gateway. Field errors reject the attempt without touching the gateway.
    pub async fn checkout<F: PaymentForm>(&self, order: &OrderSummary, form: &F) -> Result<Receipt> {
        let method = form.kind();
        tracing::info!("Validating {} payment details", method.label());

        if !method.supported() {
            tracing::warn!("{} is a placeholder method, refusing", method.label());
            return Err(CheckoutError::UnsupportedMethod { method });
        }

        let errors = form.validate();
        if !errors.is_empty() {
            tracing::warn!("Rejected with {} field error(s)", errors.len());
            return Err(CheckoutError::Rejected { errors });
        }

        tracing::info!("Processing {} payment for {}", method.label(), order.total_display());
        let receipt = self.gateway.process(order, method).await?;
        tracing::info!("Payment complete, order {}", receipt.order_id);

        Ok(receipt)
    }
}
