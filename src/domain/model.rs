use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment method tabs shown on the checkout page. Apple Pay and Google Pay
/// are display-only placeholders and never reach the processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodKind {
    Card,
    MobilePay,
    Klarna,
    ApplePay,
    GooglePay,
}

impl PaymentMethodKind {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethodKind::Card => "Card",
            PaymentMethodKind::MobilePay => "MobilePay",
            PaymentMethodKind::Klarna => "Klarna",
            PaymentMethodKind::ApplePay => "Apple Pay",
            PaymentMethodKind::GooglePay => "Google Pay",
        }
    }

    /// Whether the method can actually complete a (simulated) payment.
    pub fn supported(&self) -> bool {
        !matches!(
            self,
            PaymentMethodKind::ApplePay | PaymentMethodKind::GooglePay
        )
    }
}

/// The single-product order shown in the summary pane. Money is integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub product_name: String,
    pub brand: String,
    pub unit_price_cents: u64,
    pub tax_percent: u64,
}

impl OrderSummary {
    pub fn subtotal_cents(&self) -> u64 {
        self.unit_price_cents
    }

    pub fn tax_cents(&self) -> u64 {
        self.subtotal_cents() * self.tax_percent / 100
    }

    pub fn total_cents(&self) -> u64 {
        self.subtotal_cents() + self.tax_cents()
    }

    pub fn total_display(&self) -> String {
        format_cents(self.total_cents())
    }
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self {
            product_name: "Example Product".to_string(),
            brand: "Your Brand".to_string(),
            unit_price_cents: 14900,
            tax_percent: 25,
        }
    }
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Outcome of a completed (simulated) checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: String,
    pub method: PaymentMethodKind,
    pub method_label: String,
    pub amount_cents: u64,
    pub completed_at: DateTime<Utc>,
}
