//! Domain model for the fixed-income comparison client.
//!
//! This crate holds the types exchanged with the calculation service and
//! the pure display helpers shared by the report and CLI crates:
//! - Scenario results and their monthly evolution series
//! - Simulation and single-investment calculation requests
//! - Tax regime, investment and yield enums
//! - Rate parameters with their built-in defaults
//! - Currency, percentage and month-label formatting
//! - The financial glossary

pub mod entities;
pub mod enums;
pub mod error;
pub mod format;
pub mod glossary;
pub mod value_objects;

pub use entities::{CalculationRequest, MonthlyValue, ScenarioResult, SimulationRequest};
pub use enums::{InvestmentType, TaxRegime, YieldType};
pub use error::{ParseError, ValidationError};
pub use glossary::GlossaryTerm;
pub use value_objects::{RateParameter, RateParameters};
