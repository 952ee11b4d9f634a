pub mod input;
pub mod rate_parameters;

pub use input::{parse_lenient_decimal, parse_lenient_months};
pub use rate_parameters::{RateParameter, RateParameters};
