//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. Each use case is a
//! self-contained business operation.
//!
//! Use cases:
//! - `OrderSubmitter`: fetch market snapshot → validate → submit →
//!   classify the outcome

pub mod submitter;

pub use submitter::{OrderSubmitter, SubmissionResult};
