use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckoutError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based checkout configuration, for embedding the demo with someone
/// else's product and branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub checkout: CheckoutSection,
    pub product: ProductSection,
    pub payment: PaymentSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSection {
    pub name: String,
    pub brand: String,
    pub unit_price_cents: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSection {
    pub tax_percent: u64,
    pub processing_delay_ms: Option<u64>,
    /// Tabs to show, e.g. ["card", "mobilepay"]. All tabs when omitted.
    pub methods: Option<Vec<String>>,
}

const KNOWN_METHODS: [&str; 5] = ["card", "mobilepay", "klarna", "applepay", "googlepay"];

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckoutError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckoutError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR_NAME}` placeholders from the environment; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("checkout.name", &self.checkout.name)?;
        validate_non_empty_string("product.name", &self.product.name)?;
        validate_non_empty_string("product.brand", &self.product.brand)?;
        validate_positive_number("product.unit_price_cents", self.product.unit_price_cents, 1)?;
        validate_range("payment.tax_percent", self.payment.tax_percent, 0, 100)?;

        if let Some(methods) = &self.payment.methods {
            for method in methods {
                if !KNOWN_METHODS.contains(&method.as_str()) {
                    return Err(CheckoutError::InvalidConfigValueError {
                        field: "payment.methods".to_string(),
                        value: method.clone(),
                        reason: format!("Unknown method. Valid methods: {}", KNOWN_METHODS.join(", ")),
                    });
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn product_name(&self) -> &str {
        &self.product.name
    }

    fn brand(&self) -> &str {
        &self.product.brand
    }

    fn unit_price_cents(&self) -> u64 {
        self.product.unit_price_cents
    }

    fn tax_percent(&self) -> u64 {
        self.payment.tax_percent
    }

    fn processing_delay_ms(&self) -> u64 {
        self.payment.processing_delay_ms.unwrap_or(2000)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
