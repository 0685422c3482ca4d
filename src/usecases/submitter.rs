//! Order Submitter - Submission Pipeline Orchestration
//!
//! Sequences one submission attempt end to end:
//! fetch snapshot → validate → submit → classify the outcome.
//!
//! Gateway faults never escape: every call site converts failures
//! into a `SubmissionResult::GatewayError`. Nothing is retried; a
//! single failed attempt is terminal for that invocation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::order::{MarketSnapshot, OrderKind, OrderRequest};
use crate::domain::validation::{validate, RejectReason, ValidationLimits, ValidationOutcome};
use crate::ports::gateway::{
    ExchangeGateway, GatewayError, OrderAck, OrderPayload, TimeInForce,
};

/// Terminal outcome of one submission attempt.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The exchange accepted the order.
    Placed {
        /// Typed echo of the exchange's response.
        ack: OrderAck,
        message: String,
    },
    /// A pre-trade check failed; the order never reached the exchange.
    Rejected {
        reason: RejectReason,
        message: String,
    },
    /// The gateway failed during fetch or submission.
    GatewayError { message: String },
}

impl SubmissionResult {
    /// Human-readable summary for the shell.
    pub fn message(&self) -> &str {
        match self {
            Self::Placed { message, .. }
            | Self::Rejected { message, .. }
            | Self::GatewayError { message } => message,
        }
    }
}

/// Orchestrates one independent, stateless submission attempt.
///
/// Holds the gateway handle and the injected validation limits; no
/// order history is retained across calls.
pub struct OrderSubmitter<G: ExchangeGateway> {
    /// Gateway port.
    gateway: Arc<G>,
    /// Validation parameters (notional floor, leverage).
    limits: ValidationLimits,
    /// Margin asset all checks are denominated in.
    margin_asset: String,
}

impl<G: ExchangeGateway> OrderSubmitter<G> {
    /// Create a new submitter with USDT margin.
    pub fn new(gateway: Arc<G>, limits: ValidationLimits) -> Self {
        Self::with_margin_asset(gateway, limits, "USDT")
    }

    /// Create a new submitter denominated in the given margin asset.
    pub fn with_margin_asset(
        gateway: Arc<G>,
        limits: ValidationLimits,
        margin_asset: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            limits,
            margin_asset: margin_asset.into(),
        }
    }

    /// Run one submission attempt.
    ///
    /// Performs up to three network reads (symbol metadata, price,
    /// balance) and, only if every check passes, one network write.
    #[instrument(skip(self, request), fields(symbol = %request.symbol, side = %request.side, kind = %request.kind))]
    pub async fn submit(&self, request: &OrderRequest) -> SubmissionResult {
        let snapshot = match self.fetch_snapshot(request).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Market data fetch failed");
                return SubmissionResult::GatewayError {
                    message: format!("market data fetch failed: {e}"),
                };
            }
        };

        let outcome = validate(request, &snapshot, &self.limits);
        if let Some(reason) = outcome.rejection {
            let message = self.rejection_message(reason, &outcome, &snapshot);
            warn!(%reason, %message, "Order rejected pre-trade");
            return SubmissionResult::Rejected { reason, message };
        }

        let payload = build_payload(request, &outcome);
        match self.gateway.create_order(&payload).await {
            Ok(ack) => {
                info!(
                    order_id = ack.order_id,
                    client_order_id = %ack.client_order_id,
                    status = %ack.status,
                    "Order placed"
                );
                SubmissionResult::Placed {
                    message: format!(
                        "order placed: id={} status={}",
                        ack.order_id, ack.status
                    ),
                    ack,
                }
            }
            Err(e) => {
                let kind = fault_kind(&e);
                warn!(error = %e, kind, "Order submission failed");
                SubmissionResult::GatewayError {
                    message: format!("{kind}: {e}"),
                }
            }
        }
    }

    /// Gather the market data for one attempt.
    ///
    /// The three reads are sequential; an unknown symbol
    /// short-circuits the price and balance reads, which would fail
    /// against the exchange anyway.
    async fn fetch_snapshot(
        &self,
        request: &OrderRequest,
    ) -> Result<MarketSnapshot, GatewayError> {
        let Some(info) = self.gateway.symbol_info(&request.symbol).await? else {
            return Ok(MarketSnapshot::unknown_symbol());
        };

        let current_price = self.gateway.current_price(&info.symbol).await?;
        let available_balance = self.gateway.asset_balance(&self.margin_asset).await?;

        Ok(MarketSnapshot {
            symbol_exists: true,
            current_price,
            available_balance,
        })
    }

    /// Rejection text always carries the computed values that caused it.
    fn rejection_message(
        &self,
        reason: RejectReason,
        outcome: &ValidationOutcome,
        snapshot: &MarketSnapshot,
    ) -> String {
        let asset = &self.margin_asset;
        match reason {
            RejectReason::InvalidSymbol => "symbol is not listed on the exchange".to_string(),
            RejectReason::NotionalTooSmall => format!(
                "order notional {} {asset} is below the {} {asset} minimum",
                round2(outcome.notional),
                self.limits.min_notional
            ),
            RejectReason::MarginInsufficient => format!(
                "margin insufficient: required ~{} {asset}, balance {} {asset}",
                round2(outcome.required_margin),
                round2(snapshot.available_balance)
            ),
        }
    }
}

/// Build the order-entry payload from a validated request.
///
/// Limit orders carry the validator's effective price and a GTC
/// time-in-force; market orders carry neither. Using the effective
/// price keeps the submitted price identical to the one the margin
/// and notional checks were computed from.
fn build_payload(request: &OrderRequest, outcome: &ValidationOutcome) -> OrderPayload {
    let (price, time_in_force) = match request.kind {
        OrderKind::Limit => (Some(outcome.effective_price), Some(TimeInForce::Gtc)),
        OrderKind::Market => (None, None),
    };

    OrderPayload {
        symbol: request.symbol.clone(),
        side: request.side,
        kind: request.kind,
        quantity: request.quantity,
        price,
        time_in_force,
        client_order_id: format!("bot-{}", Uuid::new_v4().simple()),
    }
}

/// Diagnostic label for the three gateway failure kinds.
fn fault_kind(error: &GatewayError) -> &'static str {
    match error {
        GatewayError::Api { .. } => "exchange API error",
        GatewayError::Order { .. } => "exchange order error",
        GatewayError::Transport(_) | GatewayError::Malformed(_) => "gateway failure",
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}
