//! Financial glossary shown next to the comparison forms.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlossaryTerm {
    Cdb,
    Lci,
    Lca,
    TesouroSelic,
    TesouroIpca,
    TesouroPrefixado,
    FundoDi,
    Debenture,
    DebentureIncentivada,
    Prefixado,
    Cdi,
    IpcaMais,
    Ir,
    Ipca,
}

impl GlossaryTerm {
    pub const ALL: [GlossaryTerm; 14] = [
        Self::Cdb,
        Self::Lci,
        Self::Lca,
        Self::TesouroSelic,
        Self::TesouroIpca,
        Self::TesouroPrefixado,
        Self::FundoDi,
        Self::Debenture,
        Self::DebentureIncentivada,
        Self::Prefixado,
        Self::Cdi,
        Self::IpcaMais,
        Self::Ir,
        Self::Ipca,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
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
            Self::Prefixado => "prefixado",
            Self::Cdi => "cdi",
            Self::IpcaMais => "ipca_mais",
            Self::Ir => "ir",
            Self::Ipca => "ipca",
        }
    }

    /// Heading for the definition: the key in upper case.
    #[must_use]
    pub fn title(&self) -> String {
        self.key().to_uppercase()
    }

    #[must_use]
    pub fn definition(&self) -> &'static str {
        match self {
            Self::Cdb => {
                "CDB (Certificado de Depósito Bancário) é um título de renda fixa emitido por bancos. \
                 Você empresta dinheiro ao banco e recebe juros em troca. É protegido pelo FGC até R$ 250 mil."
            }
            Self::Lci => {
                "LCI (Letra de Crédito Imobiliário) é um título de renda fixa ligado ao setor imobiliário. \
                 É isento de Imposto de Renda e protegido pelo FGC até R$ 250 mil."
            }
            Self::Lca => {
                "LCA (Letra de Crédito do Agronegócio) é um título de renda fixa ligado ao agronegócio. \
                 É isento de Imposto de Renda e protegido pelo FGC até R$ 250 mil."
            }
            Self::TesouroSelic => {
                "Tesouro Selic é um título público do governo federal. \
                 Sua rentabilidade acompanha a taxa Selic (taxa básica de juros)."
            }
            Self::TesouroIpca => {
                "Tesouro IPCA+ é um título público que protege seu dinheiro da inflação, \
                 rendendo IPCA mais uma taxa fixa."
            }
            Self::TesouroPrefixado => {
                "Tesouro Prefixado é um título público com taxa de juros conhecida desde o início. \
                 Você sabe exatamente quanto vai render."
            }
            Self::FundoDi => {
                "Fundo DI investe em títulos públicos que acompanham a taxa DI, muito próxima da Selic. \
                 É uma forma de investir em renda fixa através de um fundo."
            }
            Self::Debenture => {
                "Debênture é um título de dívida emitido por empresas privadas. \
                 As comuns pagam IR conforme o prazo."
            }
            Self::DebentureIncentivada => {
                "Debênture incentivada financia projetos de infraestrutura e é isenta de IR até 2025; \
                 com a MP 1.303/2025 passa a ter alíquota reduzida."
            }
            Self::Prefixado => {
                "Pré-fixado significa que a taxa de juros é conhecida desde o início. Exemplo: 10% ao ano."
            }
            Self::Cdi => {
                "CDI (Certificado de Depósito Interbancário) é uma taxa de juros muito próxima da Selic. \
                 Quando um investimento rende \"X% do CDI\", significa que rende uma porcentagem dessa taxa."
            }
            Self::IpcaMais => {
                "IPCA+ significa que o investimento rende a inflação (IPCA) mais uma taxa fixa. \
                 Exemplo: IPCA + 5% significa que você ganha a inflação mais 5% ao ano."
            }
            Self::Ir => {
                "IR (Imposto de Renda) é cobrado sobre o ganho do investimento. \
                 A alíquota diminui conforme o tempo de investimento (tabela regressiva)."
            }
            Self::Ipca => {
                "IPCA (Índice Nacional de Preços ao Consumidor Amplo) é o índice oficial de inflação no Brasil. \
                 Mede quanto os preços subiram."
            }
        }
    }
}

impl FromStr for GlossaryTerm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or(ParseError::GlossaryTerm(key))
    }
}

impl fmt::Display for GlossaryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title(), self.definition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = GlossaryTerm::ALL.iter().map(GlossaryTerm::key).collect();
        assert_eq!(keys.len(), GlossaryTerm::ALL.len());
        for term in GlossaryTerm::ALL {
            assert_eq!(term.key().parse::<GlossaryTerm>().unwrap(), term);
        }
    }

    #[test]
    fn test_title_is_upper_case_key() {
        assert_eq!(GlossaryTerm::TesouroSelic.title(), "TESOURO_SELIC");
    }

    #[test]
    fn test_unknown_term() {
        assert_eq!(
            "bitcoin".parse::<GlossaryTerm>(),
            Err(ParseError::GlossaryTerm("bitcoin".to_string()))
        );
    }

    #[test]
    fn test_definitions_are_not_empty() {
        assert!(GlossaryTerm::ALL.iter().all(|t| !t.definition().is_empty()));
        assert!(GlossaryTerm::Lci.definition().contains("isento"));
    }
}
