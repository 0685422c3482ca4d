//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| "Failed to parse config.toml")?;

    validate_config(&config)?;

    info!(
        base_url = %config.api.base_url,
        min_notional = config.trading.min_notional,
        leverage = config.trading.leverage,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
    anyhow::ensure!(
        !config.api.base_url.is_empty(),
        "API base_url must not be empty"
    );
    anyhow::ensure!(
        config.api.base_url.starts_with("http"),
        "API base_url must be an http(s) URL, got {}",
        config.api.base_url
    );
    anyhow::ensure!(
        config.api.timeout_seconds > 0,
        "timeout_seconds must be positive"
    );
    anyhow::ensure!(
        config.api.recv_window_ms > 0 && config.api.recv_window_ms <= 60_000,
        "recv_window_ms must be in (0, 60000], got {}",
        config.api.recv_window_ms
    );

    anyhow::ensure!(
        !config.trading.margin_asset.is_empty(),
        "margin_asset must not be empty"
    );
    anyhow::ensure!(
        config.trading.min_notional > 0.0,
        "min_notional must be positive, got {}",
        config.trading.min_notional
    );
    anyhow::ensure!(
        config.trading.leverage > 0 && config.trading.leverage <= 125,
        "leverage must be in (0, 125], got {}",
        config.trading.leverage
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [bot]
            name = "testnet-bot"

            [api]

            [trading]
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.bot.log_level, "info");
        assert_eq!(config.trading.leverage, 20);
        assert!((config.trading.min_notional - 100.0).abs() < f64::EPSILON);
        assert!(config.api.base_url.contains("testnet"));
    }

    #[test]
    fn test_zero_leverage_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [bot]
            name = "testnet-bot"

            [api]

            [trading]
            leverage = 0
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }
}
