//! Access to the remote calculation service.
//!
//! This crate provides everything needed to run a simulation against the
//! service that owns the interest, tax and inflation math:
//! - The `CalculationService` seam and its HTTP implementation
//! - Client configuration from the environment
//! - Deadline and cancellation for every outbound request
//! - A single-flight submit control that rejects duplicate submissions

/// Cancellation token and deadline helper.
pub mod cancel;
/// Client configuration.
pub mod config;
/// Error types.
pub mod error;
/// Calculation service implementations.
pub mod providers;
/// Validated, single-flight request orchestration.
pub mod runner;
/// Single-flight submit control.
pub mod submit;

pub use cancel::CancelToken;
pub use config::ClientConfig;
pub use error::ServiceError;
pub use providers::{CalculationService, HttpCalculationService};
pub use runner::SimulationRunner;
pub use submit::{SubmitControl, SubmitGuard};
