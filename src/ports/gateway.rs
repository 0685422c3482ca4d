//! Exchange Gateway Port - Futures API Interface
//!
//! Defines the trait the submission pipeline requires from the
//! exchange: three market-data reads and one order-entry write.
//! Adapters implement this against the real REST API; tests mock it.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order::{OrderKind, OrderSide};

/// A failure raised by the exchange gateway.
///
/// `Api` covers API-level rejections (bad request, auth, rate
/// limits); `Order` covers rejections of the order itself (filters,
/// balance checks on the exchange side). Transport and parse failures
/// are unclassified. Timeouts surface as `Transport`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// API-level rejection with the exchange's error code.
    #[error("exchange API error {code}: {message}")]
    Api { code: i64, message: String },
    /// Order-level rejection with the exchange's error code.
    #[error("order rejected by exchange ({code}): {message}")]
    Order { code: i64, message: String },
    /// Network failure, including request timeouts.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Time-in-force policy attached to resting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good-till-cancelled: active until explicitly cancelled.
    Gtc,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gtc => write!(f, "GTC"),
        }
    }
}

/// Exchange metadata for one listed symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Canonical symbol name.
    pub symbol: String,
    /// Trading status reported by the exchange (e.g. "TRADING").
    pub status: String,
    /// Base asset (e.g. "BTC").
    pub base_asset: String,
    /// Quote asset (e.g. "USDT").
    pub quote_asset: String,
}

/// Fully resolved order parameters sent to the order-entry endpoint.
///
/// Built by the submitter only after validation passes. Price and
/// time-in-force are set together for limit orders and absent for
/// market orders.
#[derive(Debug, Clone)]
pub struct OrderPayload {
    pub symbol: String,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub quantity: Decimal,
    /// Limit price; `None` for market orders.
    pub price: Option<Decimal>,
    /// `Some(Gtc)` for limit orders; `None` for market orders.
    pub time_in_force: Option<TimeInForce>,
    /// Client-assigned id for log correlation.
    pub client_order_id: String,
}

/// The exchange's echo of an accepted order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    /// Exchange-assigned order id.
    pub order_id: u64,
    /// Echoed client order id.
    pub client_order_id: String,
    /// Symbol the order was placed on.
    pub symbol: String,
    /// Lifecycle status at acceptance (e.g. "NEW").
    pub status: String,
    /// Server timestamp of acceptance (Unix ms).
    #[serde(default)]
    pub update_time: u64,
}

/// Trait for exchange gateway providers.
///
/// Implementors connect to the futures API and expose exactly the
/// operations the submission pipeline needs. The handle is read-only
/// from the pipeline's point of view and safe to share.
#[async_trait]
pub trait ExchangeGateway: Send + Sync + 'static {
    /// Look up exchange metadata for a symbol.
    ///
    /// `Ok(None)` means the exchange does not list the symbol.
    async fn symbol_info(&self, symbol: &str) -> Result<Option<SymbolInfo>, GatewayError>;

    /// Fetch the last traded price for a symbol.
    async fn current_price(&self, symbol: &str) -> Result<Decimal, GatewayError>;

    /// Fetch the available balance for an asset (e.g. "USDT").
    ///
    /// An asset with no balance entry reports zero.
    async fn asset_balance(&self, asset: &str) -> Result<Decimal, GatewayError>;

    /// Submit an order. Called at most once per submission attempt;
    /// a failure is terminal for that attempt.
    async fn create_order(&self, payload: &OrderPayload) -> Result<OrderAck, GatewayError>;
}
