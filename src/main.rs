//! Futures Testnet Order Bot — Entry Point
//!
//! Initializes configuration, logging, the signed exchange gateway,
//! and the interactive prompt loop. One order per loop iteration.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (file-backed, level from config)
//! 3. Load API credentials from env vars (BINANCE_API_KEY, BINANCE_API_SECRET)
//! 4. Create FuturesHttpClient (HMAC signing + timeout)
//! 5. Create BinanceFuturesGateway (implements ExchangeGateway port)
//! 6. Build OrderSubmitter with the configured validation limits
//! 7. Prompt loop: collect order → submit → render until the user quits

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::binance::{
    BinanceFuturesGateway, FuturesAuth, FuturesClientConfig, FuturesHttpClient,
};
use domain::order::{OrderKind, OrderRequest, OrderSide};
use usecases::submitter::{OrderSubmitter, SubmissionResult};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize file-backed logging ───────────────────
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.bot.log_file)
        .with_context(|| format!("Failed to open log file {}", config.bot.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.bot.log_level)
                }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(
        name = %config.bot.name,
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Starting futures testnet bot"
    );

    // ── 3. Load API credentials from env vars ───────────────
    let auth = Arc::new(
        FuturesAuth::from_env().context("Failed to load API credentials from env")?,
    );

    // ── 4. Create signed HTTP client ────────────────────────
    let client_config = FuturesClientConfig {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(config.api.timeout_seconds),
        recv_window_ms: config.api.recv_window_ms,
    };
    let client = Arc::new(
        FuturesHttpClient::new(Arc::clone(&auth), client_config)
            .context("Failed to create futures client")?,
    );

    // ── 5. Gateway + submitter ──────────────────────────────
    let gateway = Arc::new(BinanceFuturesGateway::new(client));
    let limits = config.trading.validation_limits()?;
    let submitter = OrderSubmitter::with_margin_asset(
        gateway,
        limits,
        config.trading.margin_asset.clone(),
    );

    // ── 6. Prompt loop ──────────────────────────────────────
    println!("=== {} ===", config.bot.name);
    loop {
        match read_order_request() {
            Ok(request) => {
                let result = submitter.submit(&request).await;
                render(&result);
            }
            // Malformed input never reaches the pipeline.
            Err(e) => println!("❌ {e}"),
        }

        if !ask_yes_no("\nPlace another order? (y/n): ")? {
            break;
        }
    }

    println!("Exiting. Check '{}' for details.", config.bot.log_file);
    info!("Shutting down");
    Ok(())
}

/// Collect and structurally validate one order from stdin.
///
/// Only format checks happen here (alphanumeric symbol, known enum
/// values, positive quantity); business rules are the pipeline's job.
fn read_order_request() -> Result<OrderRequest> {
    let symbol = prompt("Symbol (e.g. BTCUSDT): ")?.to_ascii_uppercase();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        bail!("Invalid symbol format");
    }

    let side = OrderSide::from_str(&prompt("Side (BUY/SELL): ")?)
        .map_err(|_| anyhow::anyhow!("Side must be BUY or SELL"))?;

    let kind = OrderKind::from_str(&prompt("Order type (MARKET/LIMIT): ")?)
        .map_err(|_| anyhow::anyhow!("Order type must be MARKET or LIMIT"))?;

    let quantity = Decimal::from_str(&prompt("Quantity: ")?)
        .map_err(|_| anyhow::anyhow!("Quantity must be a number"))?;
    if quantity <= Decimal::ZERO {
        bail!("Quantity must be positive");
    }

    let price = if kind == OrderKind::Limit {
        let raw = prompt("Price (enter 0 for current market price): ")?;
        let price = Decimal::from_str(&raw)
            .map_err(|_| anyhow::anyhow!("Price must be a number"))?;
        if price < Decimal::ZERO {
            bail!("Price must not be negative");
        }
        // Zero falls back to the market price inside the validator.
        (price > Decimal::ZERO).then_some(price)
    } else {
        None
    };

    Ok(OrderRequest {
        symbol,
        side,
        kind,
        quantity,
        price,
    })
}

/// Render a terminal submission result. Display only; the reasons
/// are not reinterpreted here.
fn render(result: &SubmissionResult) {
    match result {
        SubmissionResult::Placed { ack, message } => {
            println!("✅ Order placed: id={} status={}", ack.order_id, ack.status);
            info!(order_id = ack.order_id, %message, "Order placed");
        }
        SubmissionResult::Rejected { reason, message } => {
            println!("❌ Rejected ({reason}): {message}");
        }
        SubmissionResult::GatewayError { message } => {
            println!("❌ Exchange error: {message}");
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn ask_yes_no(label: &str) -> Result<bool> {
    Ok(prompt(label)?.eq_ignore_ascii_case("y"))
}
