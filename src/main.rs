use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use payment_initiation::application::initiator::PaymentInitiator;
use payment_initiation::domain::payment::{Flow, PaymentContext, TransactionRequest};
use payment_initiation::domain::ports::TransactionEndpointBox;
use payment_initiation::infrastructure::console::{
    ConsoleNavigator, ConsoleUi, LoggingFlowHandlers,
};
use payment_initiation::infrastructure::fixture::FixtureEndpoint;
use payment_initiation::infrastructure::http::HttpTransactionEndpoint;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with canned processing values (offline mode)
    fixture: Option<PathBuf>,

    /// Transaction-creation endpoint URL. If provided, uses HTTP instead of
    /// the fixture.
    #[arg(long)]
    route: Option<String>,

    /// The online payment flow of the selected payment option
    #[arg(long, default_value = "redirect")]
    flow: Flow,

    /// The code of the selected payment option's provider
    #[arg(long, default_value = "negdi")]
    provider_code: String,

    /// The id of the selected payment option's provider
    #[arg(long, default_value_t = 1)]
    provider_id: u32,

    /// The id of the selected payment option
    #[arg(long, default_value_t = 1)]
    payment_option_id: u32,

    /// The code of the selected payment method, if any
    #[arg(long)]
    payment_method_code: Option<String>,

    /// JSON file with the host-prepared transaction route params
    #[arg(long)]
    params: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let endpoint: TransactionEndpointBox = if cli.route.is_some() {
        Box::new(HttpTransactionEndpoint::new())
    } else if let Some(fixture) = &cli.fixture {
        Box::new(FixtureEndpoint::from_file(fixture).into_diagnostic()?)
    } else {
        return Err(miette!("either a fixture file or --route is required"));
    };

    let ctx = PaymentContext {
        transaction_route: cli
            .route
            .unwrap_or_else(|| "/payment/transaction".to_owned()),
        provider_id: cli.provider_id,
        provider_code: cli.provider_code,
        payment_option_id: cli.payment_option_id,
        payment_method_code: cli.payment_method_code,
    };

    let request = match &cli.params {
        Some(path) => {
            let raw = std::fs::read_to_string(path).into_diagnostic()?;
            TransactionRequest::new(serde_json::from_str(&raw).into_diagnostic()?)
        }
        None => TransactionRequest::default(),
    };

    let initiator = PaymentInitiator::new(
        endpoint,
        Box::new(LoggingFlowHandlers),
        Box::new(ConsoleUi),
        Box::new(ConsoleNavigator),
    );

    let outcome = initiator
        .initiate_payment_flow(&ctx, &request, &cli.flow)
        .await;
    println!("outcome: {outcome:?}");

    Ok(())
}
