use crate::error::ParseError;
use crate::value_objects::input::parse_lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Market rate or product parameter forwarded to the calculation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateParameter {
    Selic,
    Cdi,
    Ipca,
    Tr,
    TaxaCustodia,
    TesouroPrefixadoNominal,
    TesouroIpcaMais,
    TaxaAdminFundoDi,
    RentabilidadeCdb,
    RentabilidadeFundoDi,
    RentabilidadeLciLca,
    PoupancaMensal,
}

impl RateParameter {
    pub const ALL: [RateParameter; 12] = [
        Self::Selic,
        Self::Cdi,
        Self::Ipca,
        Self::Tr,
        Self::TaxaCustodia,
        Self::TesouroPrefixadoNominal,
        Self::TesouroIpcaMais,
        Self::TaxaAdminFundoDi,
        Self::RentabilidadeCdb,
        Self::RentabilidadeFundoDi,
        Self::RentabilidadeLciLca,
        Self::PoupancaMensal,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Selic => "selic",
            Self::Cdi => "cdi",
            Self::Ipca => "ipca",
            Self::Tr => "tr",
            Self::TaxaCustodia => "taxa_custodia",
            Self::TesouroPrefixadoNominal => "tesouro_prefixado_nominal",
            Self::TesouroIpcaMais => "tesouro_ipca_mais",
            Self::TaxaAdminFundoDi => "taxa_admin_fundo_di",
            Self::RentabilidadeCdb => "rentabilidade_cdb",
            Self::RentabilidadeFundoDi => "rentabilidade_fundo_di",
            Self::RentabilidadeLciLca => "rentabilidade_lci_lca",
            Self::PoupancaMensal => "poupanca_mensal",
        }
    }

    /// Value used when the user leaves the field blank.
    #[must_use]
    pub fn default_value(&self) -> Decimal {
        match self {
            Self::Selic => Decimal::new(100, 1),
            Self::Cdi => Decimal::new(100, 1),
            Self::Ipca => Decimal::new(40, 1),
            Self::Tr => Decimal::new(17, 2),
            Self::TaxaCustodia => Decimal::new(20, 2),
            Self::TesouroPrefixadoNominal => Decimal::new(100, 1),
            Self::TesouroIpcaMais => Decimal::new(65, 1),
            Self::TaxaAdminFundoDi => Decimal::new(25, 2),
            Self::RentabilidadeCdb => Decimal::new(1000, 1),
            Self::RentabilidadeFundoDi => Decimal::new(980, 1),
            Self::RentabilidadeLciLca => Decimal::new(850, 1),
            Self::PoupancaMensal => Decimal::new(6731, 4),
        }
    }
}

impl FromStr for RateParameter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or(ParseError::RateParameter(key))
    }
}

impl fmt::Display for RateParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of rate parameters. Every key is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateParameters(BTreeMap<RateParameter, Decimal>);

impl RateParameters {
    #[must_use]
    pub fn get(&self, parameter: RateParameter) -> Decimal {
        self.0
            .get(&parameter)
            .copied()
            .unwrap_or_else(|| parameter.default_value())
    }

    pub fn set(&mut self, parameter: RateParameter, value: Decimal) {
        self.0.insert(parameter, value);
    }

    /// Applies a free-text override. Blank input keeps the current value.
    pub fn apply_override(&mut self, parameter: RateParameter, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.set(parameter, parse_lenient_decimal(raw));
    }

    pub fn iter(&self) -> impl Iterator<Item = (RateParameter, Decimal)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for RateParameters {
    fn default() -> Self {
        Self(
            RateParameter::ALL
                .into_iter()
                .map(|p| (p, p.default_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_cover_every_key() {
        let params = RateParameters::default();
        assert_eq!(params.iter().count(), RateParameter::ALL.len());
        assert_eq!(params.get(RateParameter::Ipca), dec!(4.0));
        assert_eq!(params.get(RateParameter::PoupancaMensal), dec!(0.6731));
        assert_eq!(params.get(RateParameter::RentabilidadeLciLca), dec!(85));
    }

    #[test]
    fn test_blank_override_keeps_default() {
        let mut params = RateParameters::default();
        params.apply_override(RateParameter::Selic, "   ");
        assert_eq!(params.get(RateParameter::Selic), dec!(10));
    }

    #[test]
    fn test_override_parses_comma_and_garbage() {
        let mut params = RateParameters::default();
        params.apply_override(RateParameter::Selic, "14,25");
        params.apply_override(RateParameter::Tr, "n/a");
        assert_eq!(params.get(RateParameter::Selic), dec!(14.25));
        assert_eq!(params.get(RateParameter::Tr), Decimal::ZERO);
    }

    #[test]
    fn test_parameter_key_parsing() {
        assert_eq!(
            "taxa-admin-fundo-di".parse::<RateParameter>().unwrap(),
            RateParameter::TaxaAdminFundoDi
        );
        assert!("juros".parse::<RateParameter>().is_err());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let value = serde_json::to_value(RateParameters::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 12);
        assert_eq!(object["tesouro_ipca_mais"], serde_json::json!(6.5));
    }
}
