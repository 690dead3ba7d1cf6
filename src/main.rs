use clap::{Parser, ValueEnum};
use payflow_checkout::domain::model::format_cents;
use payflow_checkout::utils::{logger, validation::Validate};
use payflow_checkout::{
    CardForm, CheckoutEngine, CheckoutError, CliConfig, ConfigProvider, KlarnaForm, MobilePayForm,
    Receipt, SimulatedGateway, TomlConfig, WalletPlaceholder,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Card,
    Mobilepay,
    Klarna,
    Applepay,
    Googlepay,
}

#[derive(Debug, Parser)]
#[command(name = "payflow-checkout")]
#[command(about = "Run one simulated checkout attempt against the demo order")]
struct Args {
    #[command(flatten)]
    config: CliConfig,

    /// TOML config file; overrides the flag-based order configuration.
    #[arg(long)]
    config_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "card")]
    method: MethodArg,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    card_number: String,

    #[arg(long, default_value = "")]
    expiry: String,

    #[arg(long, default_value = "")]
    cvc: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    email: String,

    /// Print the receipt as JSON instead of the summary lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.config.verbose);
    tracing::info!("Starting payflow-checkout demo");

    let config: Box<dyn ConfigProvider> = match &args.config_file {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            Box::new(toml_config)
        }
        None => {
            if let Err(e) = args.config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
            Box::new(args.config.clone())
        }
    };

    let order = config.order_summary();
    tracing::info!(
        "Order: {} ({}) — subtotal {}, tax {}%, total {}",
        order.product_name,
        order.brand,
        order.subtotal_cents(),
        order.tax_percent,
        order.total_display()
    );

    let engine = CheckoutEngine::new(SimulatedGateway::new(config.processing_delay_ms()));

    let result = match args.method {
        MethodArg::Card => {
            let mut form = CardForm::new();
            form.input_name(&args.name);
            form.input_card_number(&args.card_number);
            form.input_expiry(&args.expiry);
            form.input_cvc(&args.cvc);
            engine.checkout(&order, &form).await
        }
        MethodArg::Mobilepay => {
            let mut form = MobilePayForm::new();
            form.input_phone(&args.phone);
            engine.checkout(&order, &form).await
        }
        MethodArg::Klarna => {
            let mut form = KlarnaForm::new();
            form.input_email(&args.email);
            engine.checkout(&order, &form).await
        }
        MethodArg::Applepay => {
            engine.checkout(&order, &WalletPlaceholder::apple_pay()).await
        }
        MethodArg::Googlepay => {
            engine.checkout(&order, &WalletPlaceholder::google_pay()).await
        }
    };

    match result {
        Ok(receipt) => {
            print_receipt(&receipt, &order.product_name, &order.brand, args.json)?;
        }
        Err(CheckoutError::Rejected { errors }) => {
            eprintln!("❌ Payment details rejected:");
            for error in &errors {
                eprintln!("   - {}", error);
            }
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Checkout failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_receipt(receipt: &Receipt, product: &str, brand: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(receipt)?);
        return Ok(());
    }
    println!("✅ Payment approved");
    println!("📦 Order {} — {} ({})", receipt.order_id, product, brand);
    println!("💳 Method: {}", receipt.method_label);
    println!("💰 Charged: {}", format_cents(receipt.amount_cents));
    Ok(())
}
