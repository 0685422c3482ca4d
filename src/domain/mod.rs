//! Domain layer - Core business logic and models.
//!
//! Pure order types and the pre-trade validator. No I/O is allowed
//! here (hexagonal architecture inner ring); everything is testable
//! in isolation with synthetic snapshots.

pub mod order;
pub mod validation;

// Re-export core types for convenience
pub use order::{MarketSnapshot, OrderKind, OrderRequest, OrderSide};
pub use validation::{validate, RejectReason, ValidationLimits, ValidationOutcome};
