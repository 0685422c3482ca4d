//! Core order domain types.
//!
//! Defines the candidate order built by the presentation shell and the
//! per-attempt market snapshot the validator decides against. These
//! types carry no I/O; the gateways in `crate::adapters` populate them.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a raw shell field does not name a known enum variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized value: {0}")]
pub struct ParseFieldError(pub String);

/// Order side, serialized exactly as the exchange expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// Order type. Limit orders rest on the book until cancelled (GTC);
/// market orders execute immediately at the prevailing price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// A candidate futures order as collected by the shell.
///
/// Immutable once constructed. The shell guarantees structural
/// validity (alphanumeric symbol, positive quantity); business rules
/// are applied later by `crate::domain::validation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Ticker symbol, uppercased (e.g. "BTCUSDT").
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Market or limit.
    pub kind: OrderKind,
    /// Contract quantity, strictly positive.
    pub quantity: Decimal,
    /// Limit price. Only meaningful when `kind` is `Limit`; a missing
    /// or non-positive value means "use the current market price".
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Build a market order.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            kind: OrderKind::Market,
            quantity,
            price: None,
        }
    }

    /// Build a limit order at the given price.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            kind: OrderKind::Limit,
            quantity,
            price: Some(price),
        }
    }
}

/// Market data gathered for exactly one submission attempt.
///
/// Owned by the submitter for the duration of one attempt; never
/// cached or shared across orders.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Whether the exchange knows the requested symbol.
    pub symbol_exists: bool,
    /// Last traded price for the symbol.
    pub current_price: Decimal,
    /// Available margin-asset balance (USDT).
    pub available_balance: Decimal,
}

impl MarketSnapshot {
    /// Snapshot for a symbol the exchange does not know. Price and
    /// balance are zeroed; the validator rejects before reading them.
    pub fn unknown_symbol() -> Self {
        Self {
            symbol_exists: false,
            current_price: Decimal::ZERO,
            available_balance: Decimal::ZERO,
        }
    }
}
