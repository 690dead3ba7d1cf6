pub mod card_form;
pub mod checkout;
pub mod format;
pub mod klarna_form;
pub mod luhn;
pub mod mobilepay_form;
pub mod network;
pub mod validate;
pub mod wallet_form;

pub use crate::domain::model::{OrderSummary, PaymentMethodKind, Receipt};
pub use crate::domain::ports::{ConfigProvider, PaymentForm, PaymentGateway};
pub use crate::utils::error::Result;
