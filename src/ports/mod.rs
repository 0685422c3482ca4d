//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the domain/usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ExchangeGateway`: market-data reads + order entry against the
//!   futures API

pub mod gateway;

pub use gateway::{ExchangeGateway, GatewayError, OrderAck, OrderPayload, SymbolInfo, TimeInForce};
