//! Futures Gateway — Adapter for the ExchangeGateway Port
//!
//! Implements the `ExchangeGateway` port against the Binance futures
//! testnet REST API using the shared `FuturesHttpClient` for signed
//! requests. Never creates its own reqwest client.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::client::FuturesHttpClient;
use super::types::{BalanceEntry, ExchangeInfoResponse, TickerPrice};
use crate::ports::gateway::{
    ExchangeGateway, GatewayError, OrderAck, OrderPayload, SymbolInfo,
};

/// Exchange gateway backed by the shared signed HTTP client.
pub struct BinanceFuturesGateway {
    /// Shared futures client with HMAC auth.
    client: Arc<FuturesHttpClient>,
}

impl BinanceFuturesGateway {
    /// Create a new gateway.
    pub fn new(client: Arc<FuturesHttpClient>) -> Self {
        Self { client }
    }
}

/// Whether an exchange error code denotes an order-level rejection.
///
/// The exchange reports one `{code, msg}` shape for everything; the
/// -1013/-2010/-2011 filter and new-order codes, the -2018..-2027
/// balance/position codes, and the -4xxx futures order codes all
/// describe the order itself rather than the API call.
fn is_order_rejection(code: i64) -> bool {
    matches!(code, -1013 | -2010 | -2011) || (-2027..=-2018).contains(&code) || code <= -4000
}

#[async_trait]
impl ExchangeGateway for BinanceFuturesGateway {
    #[instrument(skip(self))]
    async fn symbol_info(&self, symbol: &str) -> Result<Option<SymbolInfo>, GatewayError> {
        let info: ExchangeInfoResponse =
            self.client.get_public("/fapi/v1/exchangeInfo", &[]).await?;

        let wanted = symbol.to_ascii_uppercase();
        let found = info.symbols.into_iter().find(|s| s.symbol == wanted);
        debug!(symbol = %wanted, listed = found.is_some(), "Symbol lookup");

        Ok(found.map(|s| SymbolInfo {
            symbol: s.symbol,
            status: s.status,
            base_asset: s.base_asset,
            quote_asset: s.quote_asset,
        }))
    }

    #[instrument(skip(self))]
    async fn current_price(&self, symbol: &str) -> Result<Decimal, GatewayError> {
        let ticker: TickerPrice = self
            .client
            .get_public("/fapi/v1/ticker/price", &[("symbol", symbol.to_string())])
            .await?;
        parse_decimal(&ticker.price, "ticker price")
    }

    #[instrument(skip(self))]
    async fn asset_balance(&self, asset: &str) -> Result<Decimal, GatewayError> {
        let balances: Vec<BalanceEntry> = self
            .client
            .send_signed(Method::GET, "/fapi/v2/balance", &[])
            .await?;

        // An asset with no entry holds nothing.
        let Some(entry) = balances.into_iter().find(|b| b.asset == asset) else {
            return Ok(Decimal::ZERO);
        };
        let raw = entry.available_balance.as_deref().unwrap_or(&entry.balance);
        parse_decimal(raw, "account balance")
    }

    #[instrument(skip(self, payload), fields(symbol = %payload.symbol, side = %payload.side, kind = %payload.kind))]
    async fn create_order(&self, payload: &OrderPayload) -> Result<OrderAck, GatewayError> {
        let mut params = vec![
            ("symbol", payload.symbol.clone()),
            ("side", payload.side.to_string()),
            ("type", payload.kind.to_string()),
            ("quantity", payload.quantity.to_string()),
        ];
        if let Some(price) = payload.price {
            params.push(("price", price.to_string()));
        }
        if let Some(tif) = payload.time_in_force {
            params.push(("timeInForce", tif.to_string()));
        }
        params.push(("newClientOrderId", payload.client_order_id.clone()));

        self.client
            .send_signed::<OrderAck>(Method::POST, "/fapi/v1/order", &params)
            .await
            .map_err(|e| match e {
                GatewayError::Api { code, message } if is_order_rejection(code) => {
                    GatewayError::Order { code, message }
                }
                other => other,
            })
    }
}

fn parse_decimal(raw: &str, what: &str) -> Result<Decimal, GatewayError> {
    Decimal::from_str(raw)
        .map_err(|e| GatewayError::Malformed(format!("bad {what} {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_rejection_codes_classified() {
        assert!(is_order_rejection(-1013)); // filter failure
        assert!(is_order_rejection(-2010)); // new order rejected
        assert!(is_order_rejection(-2019)); // margin insufficient
        assert!(is_order_rejection(-4164)); // notional below minimum
        assert!(!is_order_rejection(-1021)); // timestamp outside recvWindow
        assert!(!is_order_rejection(-1102)); // mandatory param missing
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(parse_decimal("30000.50", "price").is_ok());
        assert!(parse_decimal("not-a-number", "price").is_err());
    }
}
