//! Builds service requests from command-line input.
//!
//! Amounts and the term arrive as free text and are parsed leniently, the
//! way a form field would be: `,` is accepted as decimal separator and
//! unparseable input becomes zero, leaving validation to reject it.

use clap::Args;
use rendafixa_domain::value_objects::{parse_lenient_decimal, parse_lenient_months};
use rendafixa_domain::{
    CalculationRequest, InvestmentType, ParseError, RateParameter, RateParameters,
    SimulationRequest, TaxRegime, YieldType,
};

/// Inputs shared by every calculation.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Initial amount in reais (e.g. 10000 or 10000,50)
    #[arg(short = 'v', long = "valor-inicial", default_value = "")]
    pub initial_value: String,

    /// Monthly contribution in reais
    #[arg(short = 'a', long = "aporte-mensal", default_value = "")]
    pub monthly_contribution: String,

    /// Term in months
    #[arg(short = 'm', long = "meses", default_value = "")]
    pub months: String,

    /// Do not deduct income tax
    #[arg(long = "sem-ir")]
    pub without_income_tax: bool,

    /// Do not adjust results for inflation
    #[arg(long = "sem-inflacao")]
    pub without_inflation: bool,

    /// Income tax regime (2025 or 2026)
    #[arg(long = "regime", default_value_t = TaxRegime::default())]
    pub tax_regime: TaxRegime,
}

/// Inputs of a multi-scenario simulation.
#[derive(Args, Debug, Clone, Default)]
pub struct SimulationArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rate parameter override as key=value (repeatable, e.g. selic=11,25)
    #[arg(short = 'p', long = "param", value_name = "CHAVE=VALOR", value_parser = parse_override)]
    pub overrides: Vec<(RateParameter, String)>,
}

/// One side of a single-investment comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentChoice {
    pub investment_type: InvestmentType,
    pub yield_type: YieldType,
    pub yield_value: String,
}

impl SimulationArgs {
    /// Assembles the simulation body. Blank overrides keep the defaults.
    #[must_use]
    pub fn to_request(&self) -> SimulationRequest {
        let mut parameters = RateParameters::default();
        for (parameter, raw) in &self.overrides {
            parameters.apply_override(*parameter, raw);
        }

        let common = &self.common;
        SimulationRequest {
            initial_value: parse_lenient_decimal(&common.initial_value),
            monthly_contribution: parse_lenient_decimal(&common.monthly_contribution),
            months: parse_lenient_months(&common.months),
            parameters,
            apply_income_tax: !common.without_income_tax,
            adjust_inflation: !common.without_inflation,
            tax_regime: common.tax_regime,
        }
    }
}

impl CommonArgs {
    /// Assembles a single-investment body for `choice`.
    #[must_use]
    pub fn to_calculation(&self, choice: &InvestmentChoice) -> CalculationRequest {
        CalculationRequest {
            investment_type: choice.investment_type,
            yield_type: choice.yield_type,
            yield_value: parse_lenient_decimal(&choice.yield_value),
            initial_value: parse_lenient_decimal(&self.initial_value),
            monthly_contribution: parse_lenient_decimal(&self.monthly_contribution),
            months: parse_lenient_months(&self.months),
            apply_income_tax: !self.without_income_tax,
            adjust_inflation: !self.without_inflation,
            tax_regime: self.tax_regime,
        }
    }
}

/// Parses `key=value`. The value is kept raw so a blank one can be ignored.
pub fn parse_override(raw: &str) -> Result<(RateParameter, String), ParseError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ParseError::RateParameter(raw.to_string()))?;
    let parameter = key.trim().parse::<RateParameter>()?;
    Ok((parameter, value.to_string()))
}
