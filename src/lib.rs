pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::card_form::CardForm;
pub use core::checkout::{CheckoutEngine, SimulatedGateway};
pub use core::klarna_form::KlarnaForm;
pub use core::mobilepay_form::MobilePayForm;
pub use core::network::CardNetwork;
pub use core::validate::{Field, FieldError};
pub use core::wallet_form::WalletPlaceholder;
pub use domain::model::{OrderSummary, PaymentMethodKind, Receipt};
pub use domain::ports::{ConfigProvider, PaymentForm, PaymentGateway};
pub use utils::error::{CheckoutError, Result};
