//! Orchestration of one user-triggered calculation.
//!
//! A submission validates its inputs, disables the submit control, runs the
//! request under a deadline and a cancellation token, and re-enables the
//! control whatever happens.

use crate::cancel::{CancelToken, bounded};
use crate::error::ServiceError;
use crate::providers::CalculationService;
use crate::submit::SubmitControl;
use rendafixa_domain::{CalculationRequest, ScenarioResult, SimulationRequest};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

/// Runs validated, single-flight requests against a calculation service.
pub struct SimulationRunner<S: CalculationService> {
    service: S,
    control: SubmitControl,
    deadline: Duration,
}

impl<S: CalculationService> SimulationRunner<S> {
    /// Creates a new runner.
    pub fn new(service: S, deadline: Duration) -> Self {
        Self {
            service,
            control: SubmitControl::new(),
            deadline,
        }
    }

    /// Returns the submit control shared by all submissions of this runner.
    #[must_use]
    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    /// Runs a multi-scenario simulation.
    ///
    /// # Errors
    /// Returns a validation error without sending anything, `Busy` if
    /// another submission is in flight, or the request's own failure.
    pub async fn simulate(
        &self,
        request: &SimulationRequest,
        cancel: &CancelToken,
    ) -> Result<Vec<ScenarioResult>, ServiceError> {
        request.validate()?;
        let _guard = self.control.try_acquire()?;

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            months = request.months,
            tax_regime = %request.tax_regime,
            "Submitting simulation"
        );

        let outcome = bounded(self.deadline, cancel, self.service.simulate(request)).await;
        match &outcome {
            Ok(results) => info!(%request_id, scenarios = results.len(), "Simulation completed"),
            Err(e) => error!(%request_id, error = %e, "Simulation failed"),
        }
        outcome
    }

    /// Calculates two single investments concurrently. Either failure fails
    /// the comparison.
    ///
    /// # Errors
    /// Same as [`Self::simulate`].
    pub async fn compare(
        &self,
        first: &CalculationRequest,
        second: &CalculationRequest,
        cancel: &CancelToken,
    ) -> Result<(ScenarioResult, ScenarioResult), ServiceError> {
        first.validate()?;
        second.validate()?;
        let _guard = self.control.try_acquire()?;

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            first = %first.investment_type,
            second = %second.investment_type,
            "Submitting comparison"
        );

        let outcome = bounded(self.deadline, cancel, async {
            tokio::try_join!(
                self.service.calculate(first),
                self.service.calculate(second)
            )
        })
        .await;
        if let Err(e) = &outcome {
            error!(%request_id, error = %e, "Comparison failed");
        }
        outcome
    }
}
