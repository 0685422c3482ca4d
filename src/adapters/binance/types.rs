//! Futures API Response Types
//!
//! Serialization types for the Binance futures REST endpoints the
//! gateway uses. Monetary fields arrive as decimal strings and are
//! parsed to `Decimal` at the gateway boundary.

use serde::Deserialize;

/// `GET /fapi/v1/exchangeInfo` response (symbol list only).
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfoResponse {
    /// All listed symbols.
    pub symbols: Vec<SymbolDescriptor>,
}

/// One symbol entry from exchange info.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDescriptor {
    /// Canonical symbol name (e.g. "BTCUSDT").
    pub symbol: String,
    /// Trading status (e.g. "TRADING").
    pub status: String,
    /// Base asset.
    pub base_asset: String,
    /// Quote asset.
    pub quote_asset: String,
}

/// `GET /fapi/v1/ticker/price` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    /// Symbol the price is for.
    pub symbol: String,
    /// Last price, decimal string.
    pub price: String,
}

/// One entry from `GET /fapi/v2/balance`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    /// Asset name (e.g. "USDT").
    pub asset: String,
    /// Wallet balance, decimal string.
    pub balance: String,
    /// Balance available for new positions, decimal string.
    #[serde(default)]
    pub available_balance: Option<String>,
}

/// Error body the exchange returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Exchange error code (negative).
    pub code: i64,
    /// Human-readable message.
    pub msg: String,
}
