pub mod request;
pub mod scenario;

// Re-export for easier access
pub use request::{CalculationRequest, SimulationRequest};
pub use scenario::{MonthlyValue, ScenarioResult};
