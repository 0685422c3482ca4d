//! Submission Flow Tests — Pipeline Against a Mocked Gateway
//!
//! Exercises the full fetch → validate → submit sequence with a
//! mockall gateway: accepted orders, each pre-trade rejection, and
//! gateway fault classification. Rejected orders must never reach
//! the order-entry endpoint.

use std::sync::Arc;

use mockall::mock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use futures_testnet_bot::domain::order::{OrderRequest, OrderSide};
use futures_testnet_bot::domain::validation::{RejectReason, ValidationLimits};
use futures_testnet_bot::ports::gateway::{
    GatewayError, OrderAck, OrderPayload, SymbolInfo, TimeInForce,
};
use futures_testnet_bot::usecases::submitter::{OrderSubmitter, SubmissionResult};

// ---- Mock Definitions ----

mock! {
    pub Gateway {}

    #[async_trait::async_trait]
    impl futures_testnet_bot::ports::gateway::ExchangeGateway for Gateway {
        async fn symbol_info(
            &self,
            symbol: &str,
        ) -> Result<Option<SymbolInfo>, GatewayError>;

        async fn current_price(&self, symbol: &str) -> Result<Decimal, GatewayError>;

        async fn asset_balance(&self, asset: &str) -> Result<Decimal, GatewayError>;

        async fn create_order(
            &self,
            payload: &OrderPayload,
        ) -> Result<OrderAck, GatewayError>;
    }
}

fn btc_symbol_info() -> SymbolInfo {
    SymbolInfo {
        symbol: "BTCUSDT".to_string(),
        status: "TRADING".to_string(),
        base_asset: "BTC".to_string(),
        quote_asset: "USDT".to_string(),
    }
}

fn ack_for(payload: &OrderPayload) -> OrderAck {
    OrderAck {
        order_id: 4_815_162_342,
        client_order_id: payload.client_order_id.clone(),
        symbol: payload.symbol.clone(),
        status: "NEW".to_string(),
        update_time: 1_700_000_000_000,
    }
}

fn submitter(gateway: MockGateway) -> OrderSubmitter<MockGateway> {
    OrderSubmitter::new(Arc::new(gateway), ValidationLimits::default())
}

// ---- Flow Tests ----

/// Market order within every limit is forwarded and placed.
#[tokio::test]
async fn market_order_within_limits_is_placed() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(30000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Ok(dec!(1000)));
    gateway
        .expect_create_order()
        .times(1)
        .withf(|payload| {
            // Market orders carry neither price nor time-in-force.
            payload.symbol == "BTCUSDT"
                && payload.price.is_none()
                && payload.time_in_force.is_none()
        })
        .returning(|payload| Ok(ack_for(payload)));

    let request = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec!(0.01));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::Placed { ack, .. } => {
            assert_eq!(ack.order_id, 4_815_162_342);
            assert_eq!(ack.status, "NEW");
        }
        other => panic!("expected Placed, got {other:?}"),
    }
}

/// Limit order carries its own price and a GTC time-in-force, and the
/// submitted price is the one validation was computed against.
#[tokio::test]
async fn limit_order_submits_validated_price_with_gtc() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(30000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Ok(dec!(1000)));
    gateway
        .expect_create_order()
        .times(1)
        .withf(|payload| {
            payload.price == Some(dec!(50000))
                && payload.time_in_force == Some(TimeInForce::Gtc)
        })
        .returning(|payload| Ok(ack_for(payload)));

    // Limit price 50000 beats the 30000 market price: notional is 100.
    let request = OrderRequest::limit("BTCUSDT", OrderSide::Sell, dec!(0.002), dec!(50000));
    let result = submitter(gateway).submit(&request).await;

    assert!(matches!(result, SubmissionResult::Placed { .. }));
}

/// Tiny limit order is rejected on the notional floor and never sent.
#[tokio::test]
async fn small_notional_rejected_before_submission() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(30000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Ok(dec!(1_000_000)));
    gateway.expect_create_order().never();

    // 0.001 at 5000 → notional 5, below the 100 USDT floor.
    let request = OrderRequest::limit("BTCUSDT", OrderSide::Buy, dec!(0.001), dec!(5000));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::Rejected { reason, message } => {
            assert_eq!(reason, RejectReason::NotionalTooSmall);
            assert!(message.contains('5'), "message should carry the notional: {message}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// Margin shortfall is rejected with both computed values in the message.
#[tokio::test]
async fn insufficient_margin_rejected_with_computed_values() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(50000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Ok(dec!(200)));
    gateway.expect_create_order().never();

    // Notional 5000 → margin 250 against a 200 balance.
    let request = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec!(0.1));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::Rejected { reason, message } => {
            assert_eq!(reason, RejectReason::MarginInsufficient);
            assert!(message.contains("250"), "required margin missing: {message}");
            assert!(message.contains("200"), "balance missing: {message}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// Unknown symbol short-circuits: no price, balance, or order calls.
#[tokio::test]
async fn unknown_symbol_rejected_without_further_calls() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .times(1)
        .returning(|_| Ok(None));
    gateway.expect_current_price().never();
    gateway.expect_asset_balance().never();
    gateway.expect_create_order().never();

    let request = OrderRequest::market("FOOBAR", OrderSide::Buy, dec!(1));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::Rejected { reason, .. } => {
            assert_eq!(reason, RejectReason::InvalidSymbol);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// An order-level exchange fault on an otherwise-valid order surfaces
/// as a gateway error with the fault detail. One attempt, no retry.
#[tokio::test]
async fn order_level_fault_classified_as_gateway_error() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(30000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Ok(dec!(1000)));
    gateway
        .expect_create_order()
        .times(1)
        .returning(|_| {
            Err(GatewayError::Order {
                code: -2019,
                message: "Margin is insufficient.".to_string(),
            })
        });

    let request = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec!(0.01));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::GatewayError { message } => {
            assert!(message.contains("-2019"), "fault code missing: {message}");
            assert!(
                message.contains("Margin is insufficient."),
                "fault detail missing: {message}"
            );
        }
        other => panic!("expected GatewayError, got {other:?}"),
    }
}

/// A fault during the data fetch is terminal and never reaches
/// order entry.
#[tokio::test]
async fn fetch_fault_surfaces_as_gateway_error() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_symbol_info()
        .returning(|_| Ok(Some(btc_symbol_info())));
    gateway
        .expect_current_price()
        .returning(|_| Ok(dec!(30000)));
    gateway
        .expect_asset_balance()
        .returning(|_| Err(GatewayError::Malformed("HTTP 502: bad gateway".to_string())));
    gateway.expect_create_order().never();

    let request = OrderRequest::market("BTCUSDT", OrderSide::Buy, dec!(0.01));
    let result = submitter(gateway).submit(&request).await;

    match result {
        SubmissionResult::GatewayError { message } => {
            assert!(message.contains("502"), "fault detail missing: {message}");
        }
        other => panic!("expected GatewayError, got {other:?}"),
    }
}
