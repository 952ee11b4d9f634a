use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income tax rule set passed through to the calculation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Regressive table in force until 2025.
    #[default]
    #[serde(rename = "2025")]
    Regressive2025,
    /// Flat rates proposed for 2026.
    #[serde(rename = "2026")]
    Flat2026,
}

impl TaxRegime {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regressive2025 => "2025",
            Self::Flat2026 => "2026",
        }
    }
}

impl FromStr for TaxRegime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2025" => Ok(Self::Regressive2025),
            "2026" => Ok(Self::Flat2026),
            other => Err(ParseError::TaxRegime(other.to_string())),
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Cdb,
    Lci,
    Lca,
    TesouroSelic,
    TesouroIpca,
    TesouroPrefixado,
    FundoDi,
    Debenture,
    DebentureIncentivada,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 9] = [
        Self::Cdb,
        Self::Lci,
        Self::Lca,
        Self::TesouroSelic,
        Self::TesouroIpca,
        Self::TesouroPrefixado,
        Self::FundoDi,
        Self::Debenture,
        Self::DebentureIncentivada,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cdb => "cdb",
            Self::Lci => "lci",
            Self::Lca => "lca",
            Self::TesouroSelic => "tesouro_selic",
            Self::TesouroIpca => "tesouro_ipca",
            Self::TesouroPrefixado => "tesouro_prefixado",
            Self::FundoDi => "fundo_di",
            Self::Debenture => "debenture",
            Self::DebentureIncentivada => "debenture_incentivada",
        }
    }

    /// Label used in comparison cards.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cdb => "CDB",
            Self::Lci => "LCI",
            Self::Lca => "LCA",
            Self::TesouroSelic => "Tesouro Selic",
            Self::TesouroIpca => "Tesouro IPCA+",
            Self::TesouroPrefixado => "Tesouro Prefixado",
            Self::FundoDi => "Fundo DI",
            Self::Debenture => "Debênture",
            Self::DebentureIncentivada => "Debênture Incentivada",
        }
    }
}

impl FromStr for InvestmentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or(ParseError::InvestmentType(key))
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the yield value of an investment is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldType {
    /// Fixed annual rate, in percent.
    Prefixado,
    /// Percentage of the CDI rate.
    Cdi,
    /// IPCA plus a fixed annual spread.
    IpcaMais,
}

impl YieldType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefixado => "prefixado",
            Self::Cdi => "cdi",
            Self::IpcaMais => "ipca_mais",
        }
    }
}

impl FromStr for YieldType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefixado" => Ok(Self::Prefixado),
            "cdi" => Ok(Self::Cdi),
            "ipca_mais" | "ipca+" => Ok(Self::IpcaMais),
            other => Err(ParseError::YieldType(other.to_string())),
        }
    }
}

impl fmt::Display for YieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_regime_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaxRegime::Regressive2025).unwrap(),
            "\"2025\""
        );
        assert_eq!(
            serde_json::from_str::<TaxRegime>("\"2026\"").unwrap(),
            TaxRegime::Flat2026
        );
        assert_eq!(TaxRegime::default(), TaxRegime::Regressive2025);
    }

    #[test]
    fn test_tax_regime_rejects_unknown_year() {
        assert!("2024".parse::<TaxRegime>().is_err());
    }

    #[test]
    fn test_investment_type_parsing() {
        assert_eq!(
            "Tesouro_IPCA".parse::<InvestmentType>().unwrap(),
            InvestmentType::TesouroIpca
        );
        assert_eq!(
            serde_json::to_string(&InvestmentType::DebentureIncentivada).unwrap(),
            "\"debenture_incentivada\""
        );
        assert!("poupanca".parse::<InvestmentType>().is_err());
    }

    #[test]
    fn test_yield_type_parsing() {
        assert_eq!("ipca+".parse::<YieldType>().unwrap(), YieldType::IpcaMais);
        assert_eq!(
            serde_json::to_string(&YieldType::IpcaMais).unwrap(),
            "\"ipca_mais\""
        );
    }
}
