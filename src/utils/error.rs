use crate::core::validate::FieldError;
use crate::domain::model::PaymentMethodKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Payment details rejected ({} field error(s))", errors.len())]
    Rejected { errors: Vec<FieldError> },

    #[error("{} is a display-only demo method and cannot process payments", method.label())]
    UnsupportedMethod { method: PaymentMethodKind },
}

impl CheckoutError {
    /// Field errors carried by a `Rejected` failure, empty for everything else.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CheckoutError::Rejected { errors } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
