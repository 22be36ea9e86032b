//! Command-line driver for moneta.
//!
//! Fetches current inflation, PPP, and FX figures for the requested country
//! codes and merges them into the matching `tax-rules-<cc>.json` documents.
//! The only fatal invocation error is supplying no country codes; everything
//! else (missing document, unreachable source, malformed response) is
//! reported per country and never aborts the rest of the run.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use moneta::{CountryCode, Moneta, MonetaConnector, MonetaError, Quantity, RetryPolicy};
use moneta_ecb::EcbConnector;
use moneta_imf::ImfConnector;
use moneta_worldbank::WorldBankConnector;
use tracing_subscriber::EnvFilter;

/// Update per-country economic data from public sources.
#[derive(Parser, Debug)]
#[command(name = "moneta", version, about)]
struct Cli {
    /// ISO 3166-1 alpha-2 country codes to update.
    #[arg(required = true, value_name = "COUNTRY")]
    countries: Vec<String>,

    /// Directory holding the tax-rules-<cc>.json documents.
    #[arg(long, default_value = "config", value_name = "DIR")]
    config_dir: PathBuf,

    /// Inflation estimator window in years (0 disables windowing).
    #[arg(long, default_value_t = 5)]
    window: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// Attempts per source request.
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Delay between attempts in milliseconds.
    #[arg(long, default_value_t = 500)]
    retry_delay_ms: u64,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Wire the default source stack: World Bank for metadata, observations, and
/// history; the daily reference-rate feed ahead of the World Bank's
/// once-a-year official rate for FX; the World Bank ahead of the outlook
/// feed for inflation history.
fn build_stack(retry: RetryPolicy, timeout: Duration, window: u32) -> Result<Moneta, MonetaError> {
    let worldbank: Arc<dyn MonetaConnector> = Arc::new(
        WorldBankConnector::builder()
            .retry(retry)
            .timeout(timeout)
            .build()?,
    );
    let ecb: Arc<dyn MonetaConnector> =
        Arc::new(EcbConnector::builder().retry(retry).timeout(timeout).build()?);
    let imf: Arc<dyn MonetaConnector> =
        Arc::new(ImfConnector::builder().retry(retry).timeout(timeout).build()?);

    Moneta::builder()
        .with_connector(worldbank.clone())
        .with_connector(ecb.clone())
        .with_connector(imf.clone())
        .prefer_for_quantity(Quantity::FxRate, &[ecb, worldbank.clone()])
        .prefer_for_quantity(Quantity::Inflation, &[worldbank, imf])
        .source_timeout(timeout)
        .estimate_window(window)
        .build()
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let retry = RetryPolicy {
        attempts: cli.retries,
        delay: Duration::from_millis(cli.retry_delay_ms),
    };
    let timeout = Duration::from_secs(cli.timeout_secs);

    let moneta = match build_stack(retry, timeout, cli.window) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut countries = Vec::new();
    for raw in &cli.countries {
        match CountryCode::parse(raw) {
            Ok(code) => countries.push(code),
            Err(e) => eprintln!("[WARN] ignoring {raw:?}: {e}"),
        }
    }

    let today = chrono::Utc::now().date_naive();
    let outcomes = moneta.update_many(&countries, &cli.config_dir, today).await;
    for (country, outcome) in &outcomes {
        match outcome {
            Ok(path) => println!("[OK] updated economic data for {country} -> {}", path.display()),
            Err(e) => eprintln!("[WARN] {country}: {e}; skipping"),
        }
    }
    ExitCode::SUCCESS
}
