//! Detail card for a single calculated investment.

use std::fmt;

use rendafixa_domain::ScenarioResult;
use rendafixa_domain::format::{format_currency, format_percentage};

/// Labelled lines describing one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub title: String,
    pub lines: Vec<(String, String)>,
}

impl DetailCard {
    /// Value shown for `label`, if the card has that line.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the card. Costs and income tax only appear when positive; the
/// real gain only when the service reported it.
#[must_use]
pub fn detail_card(title: &str, result: &ScenarioResult) -> DetailCard {
    let mut lines = vec![
        line("Total Investido", format_currency(result.total_invested)),
        line("Valor Bruto", format_currency(result.gross_value)),
        line("Rentabilidade Bruta", format_percentage(result.gross_yield)),
    ];
    if result.costs.is_sign_positive() && !result.costs.is_zero() {
        lines.push(line("Custos", format_currency(result.costs)));
    }
    if result.income_tax.is_sign_positive() && !result.income_tax.is_zero() {
        lines.push(line("Imposto de Renda", format_currency(result.income_tax)));
    }
    lines.push(line("Valor Líquido", format_currency(result.net_value)));
    lines.push(line("Rentabilidade Líquida", format_percentage(result.net_yield)));
    lines.push(line("Ganho Líquido", format_currency(result.net_gain)));
    if let Some(real_gain) = result.real_gain {
        lines.push(line(
            "Ganho Real (ajustado pela inflação)",
            format_currency(real_gain),
        ));
    }

    DetailCard {
        title: title.to_string(),
        lines,
    }
}

fn line(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

impl fmt::Display for DetailCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .lines
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        writeln!(f, "{}", self.title)?;
        for (label, value) in &self.lines {
            writeln!(f, "  {label:<width$}  {value}")?;
        }
        Ok(())
    }
}
