use crate::enums::{InvestmentType, TaxRegime, YieldType};
use crate::error::ValidationError;
use crate::value_objects::RateParameters;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of a multi-scenario simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(rename = "valor_inicial")]
    pub initial_value: Decimal,
    #[serde(rename = "aportes_mensais")]
    pub monthly_contribution: Decimal,
    #[serde(rename = "meses")]
    pub months: u32,
    #[serde(rename = "parametros")]
    pub parameters: RateParameters,
    #[serde(rename = "incluir_ir")]
    pub apply_income_tax: bool,
    #[serde(rename = "ajustar_inflacao")]
    pub adjust_inflation: bool,
    pub tax_regime: TaxRegime,
}

impl SimulationRequest {
    /// Checks the inputs the user must supply before anything is sent.
    ///
    /// # Errors
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_common(self.initial_value, self.months)
    }
}

/// Body of a single-investment calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "investimento_type")]
    pub investment_type: InvestmentType,
    #[serde(rename = "rentabilidade_type")]
    pub yield_type: YieldType,
    #[serde(rename = "rentabilidade_value")]
    pub yield_value: Decimal,
    #[serde(rename = "valor_inicial")]
    pub initial_value: Decimal,
    #[serde(rename = "aportes_mensais")]
    pub monthly_contribution: Decimal,
    #[serde(rename = "meses")]
    pub months: u32,
    #[serde(rename = "incluir_ir")]
    pub apply_income_tax: bool,
    #[serde(rename = "ajustar_inflacao")]
    pub adjust_inflation: bool,
    pub tax_regime: TaxRegime,
}

impl CalculationRequest {
    /// # Errors
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_common(self.initial_value, self.months)?;
        if self.yield_value.is_sign_negative() && !self.yield_value.is_zero() {
            return Err(ValidationError::NegativeYield);
        }
        Ok(())
    }
}

fn validate_common(initial_value: Decimal, months: u32) -> Result<(), ValidationError> {
    if initial_value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveInitialValue);
    }
    if months == 0 {
        return Err(ValidationError::NonPositiveTerm);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn simulation(initial_value: Decimal, months: u32) -> SimulationRequest {
        SimulationRequest {
            initial_value,
            monthly_contribution: dec!(100),
            months,
            parameters: RateParameters::default(),
            apply_income_tax: true,
            adjust_inflation: false,
            tax_regime: TaxRegime::Regressive2025,
        }
    }

    #[test]
    fn test_simulation_request_wire_keys() {
        let value = serde_json::to_value(simulation(dec!(1000), 12)).unwrap();
        assert_eq!(value["valor_inicial"], serde_json::json!(1000.0));
        assert_eq!(value["aportes_mensais"], serde_json::json!(100.0));
        assert_eq!(value["meses"], serde_json::json!(12));
        assert_eq!(value["incluir_ir"], serde_json::json!(true));
        assert_eq!(value["ajustar_inflacao"], serde_json::json!(false));
        assert_eq!(value["tax_regime"], serde_json::json!("2025"));
        assert_eq!(value["parametros"]["selic"], serde_json::json!(10.0));
    }

    #[test]
    fn test_validation_rules() {
        assert!(simulation(dec!(1000), 12).validate().is_ok());
        assert_eq!(
            simulation(Decimal::ZERO, 12).validate(),
            Err(ValidationError::NonPositiveInitialValue)
        );
        assert_eq!(
            simulation(dec!(-5), 12).validate(),
            Err(ValidationError::NonPositiveInitialValue)
        );
        assert_eq!(
            simulation(dec!(1000), 0).validate(),
            Err(ValidationError::NonPositiveTerm)
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NonPositiveInitialValue.to_string(),
            "Informe um valor inicial maior que zero."
        );
        assert_eq!(
            ValidationError::NonPositiveTerm.to_string(),
            "Informe um período (em meses) maior que zero."
        );
    }

    #[test]
    fn test_calculation_request_rejects_negative_yield() {
        let request = CalculationRequest {
            investment_type: InvestmentType::Cdb,
            yield_type: YieldType::Cdi,
            yield_value: dec!(-1),
            initial_value: dec!(1000),
            monthly_contribution: Decimal::ZERO,
            months: 12,
            apply_income_tax: true,
            adjust_inflation: true,
            tax_regime: TaxRegime::Flat2026,
        };
        assert_eq!(request.validate(), Err(ValidationError::NegativeYield));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["investimento_type"], serde_json::json!("cdb"));
        assert_eq!(value["rentabilidade_type"], serde_json::json!("cdi"));
        assert_eq!(value["tax_regime"], serde_json::json!("2026"));
    }
}
