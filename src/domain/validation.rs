//! Pre-trade order validation.
//!
//! Pure decision logic: given a candidate order and a market snapshot,
//! decide whether the order may proceed and compute the derived
//! quantities (notional value, required margin). No I/O, no hidden
//! state. The same inputs always produce the same outcome.
//!
//! Checks run in a fixed priority order and the first failure wins:
//! 1. Symbol validity
//! 2. Minimum notional floor
//! 3. Margin sufficiency

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::order::{MarketSnapshot, OrderKind, OrderRequest};

/// Why an order was rejected before reaching the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The exchange does not list the requested symbol.
    InvalidSymbol,
    /// Notional value is below the exchange minimum.
    NotionalTooSmall,
    /// Required margin exceeds the available balance.
    MarginInsufficient,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbol => write!(f, "invalid symbol"),
            Self::NotionalTooSmall => write!(f, "notional too small"),
            Self::MarginInsufficient => write!(f, "margin insufficient"),
        }
    }
}

/// Injected validation parameters.
///
/// `min_notional` is the floor (in USDT) below which an order is
/// rejected regardless of margin. `leverage` is the divisor used to
/// approximate required margin from notional exposure.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    pub min_notional: Decimal,
    pub leverage: Decimal,
}

impl Default for ValidationLimits {
    /// Binance USDT-margined futures defaults: 100 USDT floor, 20x.
    fn default() -> Self {
        Self {
            min_notional: dec!(100),
            leverage: dec!(20),
        }
    }
}

/// The validator's verdict plus the quantities it derived.
///
/// `notional` and `required_margin` are always computed from
/// `effective_price`, which is also the price any resulting limit
/// order must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// `None` means the order may proceed.
    pub rejection: Option<RejectReason>,
    /// Price the checks were evaluated at.
    pub effective_price: Decimal,
    /// `effective_price * quantity`.
    pub notional: Decimal,
    /// `notional / leverage`.
    pub required_margin: Decimal,
}

impl ValidationOutcome {
    /// Whether the order passed every check.
    pub fn allowed(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Run all pre-trade checks against a snapshot.
///
/// The effective price is the limit price when one is supplied and
/// positive, otherwise the fetched market price. It is resolved once
/// and reused for both the notional and the margin computation.
pub fn validate(
    request: &OrderRequest,
    snapshot: &MarketSnapshot,
    limits: &ValidationLimits,
) -> ValidationOutcome {
    let effective_price = match (request.kind, request.price) {
        (OrderKind::Limit, Some(price)) if price > Decimal::ZERO => price,
        _ => snapshot.current_price,
    };
    let notional = effective_price * request.quantity;
    let required_margin = notional / limits.leverage;

    let rejection = if !snapshot.symbol_exists {
        Some(RejectReason::InvalidSymbol)
    } else if notional < limits.min_notional {
        Some(RejectReason::NotionalTooSmall)
    } else if required_margin > snapshot.available_balance {
        Some(RejectReason::MarginInsufficient)
    } else {
        None
    };

    ValidationOutcome {
        rejection,
        effective_price,
        notional,
        required_margin,
    }
}
