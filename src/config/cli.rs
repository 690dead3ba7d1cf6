use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "payflow-checkout")]
#[command(about = "A client-only checkout demo with simulated payment processing")]
pub struct CliConfig {
    #[arg(long, default_value = "Example Product")]
    pub product_name: String,

    #[arg(long, default_value = "Your Brand")]
    pub brand: String,

    /// Unit price in cents ($149.00 by default).
    #[arg(long, default_value = "14900")]
    pub unit_price_cents: u64,

    /// Tax rate in whole percent.
    #[arg(long, default_value = "25")]
    pub tax_percent: u64,

    /// Fixed delay simulating gateway latency.
    #[arg(long, default_value = "2000")]
    pub processing_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn product_name(&self) -> &str {
        &self.product_name
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn unit_price_cents(&self) -> u64 {
        self.unit_price_cents
    }

    fn tax_percent(&self) -> u64 {
        self.tax_percent
    }

    fn processing_delay_ms(&self) -> u64 {
        self.processing_delay_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("product_name", &self.product_name)?;
        validate_non_empty_string("brand", &self.brand)?;
        validate_positive_number("unit_price_cents", self.unit_price_cents, 1)?;
        validate_range("tax_percent", self.tax_percent, 0, 100)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig::parse_from(["payflow-checkout"])
    }

    #[test]
    fn test_defaults_match_the_demo_order() {
        let config = default_config();
        assert_eq!(config.unit_price_cents, 14900);
        assert_eq!(config.tax_percent, 25);
        assert_eq!(config.processing_delay_ms, 2000);
        assert_eq!(config.order_summary().total_cents(), 18625);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_tax() {
        let mut config = default_config();
        config.tax_percent = 150;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut config = default_config();
        config.unit_price_cents = 0;
        assert!(config.validate().is_err());
    }
}
