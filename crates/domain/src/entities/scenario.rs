use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net value of a scenario after a number of elapsed months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyValue {
    /// Month offset, starting at 1.
    #[serde(rename = "mes")]
    pub month: u32,
    #[serde(rename = "valor_liquido")]
    pub net_value: Decimal,
}

/// Computed outcome of one investment option, as returned by the
/// calculation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Display name, unique within one response. The single-investment
    /// endpoint omits it.
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "total_investido")]
    pub total_invested: Decimal,
    #[serde(rename = "valor_bruto")]
    pub gross_value: Decimal,
    #[serde(rename = "valor_liquido")]
    pub net_value: Decimal,
    #[serde(rename = "custos")]
    pub costs: Decimal,
    #[serde(rename = "valor_ir")]
    pub income_tax: Decimal,
    #[serde(rename = "ganho_liquido")]
    pub net_gain: Decimal,
    /// Gross yield over the whole term, in percent.
    #[serde(rename = "rentabilidade_bruta")]
    pub gross_yield: Decimal,
    /// Net yield over the whole term, in percent.
    #[serde(rename = "rentabilidade_liquida")]
    pub net_yield: Decimal,
    #[serde(rename = "valor_real", default, skip_serializing_if = "Option::is_none")]
    pub real_value: Option<Decimal>,
    #[serde(rename = "ganho_real", default, skip_serializing_if = "Option::is_none")]
    pub real_gain: Option<Decimal>,
    #[serde(
        rename = "evolucao_mensal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_evolution: Option<Vec<MonthlyValue>>,
}

impl ScenarioResult {
    /// Returns the evolution series when it is present and non-empty.
    #[must_use]
    pub fn evolution(&self) -> Option<&[MonthlyValue]> {
        self.monthly_evolution
            .as_deref()
            .filter(|series| !series.is_empty())
    }

    /// Net value recorded for a given month offset, if any.
    #[must_use]
    pub fn net_value_at(&self, month: u32) -> Option<Decimal> {
        let series = self.evolution()?;
        series
            .binary_search_by_key(&month, |point| point.month)
            .ok()
            .map(|idx| series[idx].net_value)
    }
}
