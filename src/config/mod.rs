//! Configuration Module - TOML-based Bot Configuration
//!
//! Loads and validates configuration from `config.toml`. Endpoint
//! URLs and trading limits are externalized here - nothing is
//! hardcoded in the domain layer. Credentials come from environment
//! variables, never from the config file.

pub mod loader;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::validation::ValidationLimits;

/// Top-level bot configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before any network call is made.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bot identity and logging.
    pub bot: BotConfig,
    /// Exchange API endpoints and timing.
    pub api: ApiConfig,
    /// Pre-trade validation limits.
    pub trading: TradingConfig,
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Human-readable bot name.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File the tracing output is written to.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Futures REST API base URL (testnet by default).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Signed-request validity window in milliseconds.
    #[serde(default = "default_recv_window")]
    pub recv_window_ms: u64,
}

/// Pre-trade validation configuration.
///
/// `min_notional` is the floor (USDT) below which an order is
/// rejected regardless of margin; `leverage` is the divisor used to
/// approximate required margin from notional.
#[derive(Debug, Clone, Deserialize)]
pub struct TradingConfig {
    /// Margin asset all checks are denominated in.
    #[serde(default = "default_margin_asset")]
    pub margin_asset: String,
    /// Minimum order notional in the margin asset.
    #[serde(default = "default_min_notional")]
    pub min_notional: f64,
    /// Assumed account leverage.
    #[serde(default = "default_leverage")]
    pub leverage: u32,
}

impl TradingConfig {
    /// Convert the raw TOML numbers into the validator's limits.
    pub fn validation_limits(&self) -> anyhow::Result<ValidationLimits> {
        let min_notional = Decimal::try_from(self.min_notional)
            .context("min_notional is not representable as a decimal")?;
        Ok(ValidationLimits {
            min_notional,
            leverage: Decimal::from(self.leverage),
        })
    }
}

// Default value functions for serde

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "trading_bot.log".to_string()
}

fn default_base_url() -> String {
    "https://testnet.binancefuture.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_recv_window() -> u64 {
    5_000
}

fn default_margin_asset() -> String {
    "USDT".to_string()
}

fn default_min_notional() -> f64 {
    100.0
}

fn default_leverage() -> u32 {
    20
}
