//! Futures HTTP Client — Signed REST Requests
//!
//! Wraps reqwest for the Binance futures REST API: public market-data
//! GETs and HMAC-signed account/order requests. A failed request is
//! terminal: there is no retry loop, a single attempt either
//! succeeds or surfaces a typed `GatewayError`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::auth::FuturesAuth;
use super::types::ApiErrorBody;
use crate::ports::gateway::GatewayError;

/// Configuration for the futures HTTP client.
#[derive(Debug, Clone)]
pub struct FuturesClientConfig {
    /// Base URL for the futures API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Signed-request validity window in milliseconds.
    pub recv_window_ms: u64,
}

impl Default for FuturesClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://testnet.binancefuture.com".to_string(),
            timeout: Duration::from_secs(30),
            recv_window_ms: 5_000,
        }
    }
}

/// HTTP client for the Binance futures REST API.
pub struct FuturesHttpClient {
    /// Underlying HTTP client.
    http: Client,
    /// Authentication handler.
    auth: Arc<FuturesAuth>,
    /// Client configuration.
    config: FuturesClientConfig,
}

impl FuturesHttpClient {
    /// Create a new futures client.
    pub fn new(auth: Arc<FuturesAuth>, config: FuturesClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(2)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, auth, config })
    }

    /// Execute an unsigned GET against a public market-data endpoint.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%path, "Public GET");
        let response = self.http.get(&url).query(query).send().await?;
        Self::decode(response).await
    }

    /// Execute a signed request against a private endpoint.
    ///
    /// The timestamp, receive window, and HMAC signature are appended
    /// to the caller's parameters; the API key travels in the
    /// X-MBX-APIKEY header, the secret never leaves the process.
    pub async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let mut query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!(
            "recvWindow={}&timestamp={}",
            self.config.recv_window_ms,
            FuturesAuth::timestamp_ms()
        ));
        let signature = self.auth.sign(&query);
        let url = format!(
            "{}{}?{}&signature={}",
            self.config.base_url, path, query, signature
        );

        debug!(%method, %path, "Signed request");
        let response = self
            .http
            .request(method, &url)
            .header("X-MBX-APIKEY", self.auth.api_key())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Turn a response into a typed value or a typed gateway error.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::Malformed(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => Err(GatewayError::Api {
                code: err.code,
                message: err.msg,
            }),
            Err(_) => Err(GatewayError::Malformed(format!("HTTP {status}: {body}"))),
        }
    }
}
