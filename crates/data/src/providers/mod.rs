//! Calculation service seam.
//!
//! The interest, tax and inflation math lives behind this trait; the rest of
//! the client only sees requests going in and scenario results coming out.

mod http;

pub use http::HttpCalculationService;

use crate::error::ServiceError;
use async_trait::async_trait;
use rendafixa_domain::{CalculationRequest, ScenarioResult, SimulationRequest};

/// Remote calculation backend.
#[async_trait]
pub trait CalculationService: Send + Sync {
    /// Runs the standard multi-scenario simulation. Scenario order is the
    /// service's order.
    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<Vec<ScenarioResult>, ServiceError>;

    /// Calculates a single investment.
    async fn calculate(&self, request: &CalculationRequest)
    -> Result<ScenarioResult, ServiceError>;
}
