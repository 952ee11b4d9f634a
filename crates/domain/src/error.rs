use thiserror::Error;

/// Local input validation failures. The message is shown to the user as is
/// and no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Informe um valor inicial maior que zero.")]
    NonPositiveInitialValue,
    #[error("Informe um período (em meses) maior que zero.")]
    NonPositiveTerm,
    #[error("A rentabilidade não pode ser negativa.")]
    NegativeYield,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("regime tributário inválido: {0} (use 2025 ou 2026)")]
    TaxRegime(String),
    #[error("tipo de investimento desconhecido: {0}")]
    InvestmentType(String),
    #[error("tipo de rentabilidade desconhecido: {0}")]
    YieldType(String),
    #[error("parâmetro desconhecido: {0}")]
    RateParameter(String),
    #[error("termo não encontrado no glossário: {0}")]
    GlossaryTerm(String),
}
