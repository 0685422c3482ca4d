//! Binance Futures Testnet API Adapter
//!
//! Implements the `ExchangeGateway` port over the Binance futures
//! REST API. Handles authentication, market-data reads, and order
//! entry.
//!
//! Sub-modules:
//! - `auth`: HMAC-SHA256 request signing with env-var credentials
//! - `client`: single-attempt HTTP client with typed error mapping
//! - `gateway`: the port implementation
//! - `types`: API response type definitions

pub mod auth;
pub mod client;
pub mod gateway;
pub mod types;

pub use auth::FuturesAuth;
pub use client::{FuturesClientConfig, FuturesHttpClient};
pub use gateway::BinanceFuturesGateway;
